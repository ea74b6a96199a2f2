//! Builders for synthetic OVATION-style activity feeds.
//!
//! Feeds are written the way the real product is: `#`-prefixed header
//! lines, then one data line per latitude band. The builders take cell
//! coordinates in image order (row 0 is the top pixel row), which is the
//! reverse of the line order in the feed.

/// Header used by the generated feeds.
pub const FEED_HEADER: &str = "\
# Product: Ovation Aurora Short Term Forecast
# Product Valid At: 2024-05-10 23:05
# Units: aurora probability percent
#";

/// Builds activity feed text from a dense grid of values.
#[derive(Debug, Clone)]
pub struct FeedBuilder {
    width: usize,
    values: Vec<Vec<String>>,
}

impl FeedBuilder {
    /// A grid of `height` bands by `width` bins, all zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            values: vec![vec!["0".to_string(); width]; height],
        }
    }

    /// Set the cell that renders at pixel (`column`, `row`).
    pub fn set(mut self, row: usize, column: usize, value: impl ToString) -> Self {
        self.values[row][column] = value.to_string();
        self
    }

    /// Set every cell to `value`.
    pub fn fill(mut self, value: impl ToString) -> Self {
        let value = value.to_string();
        for row in &mut self.values {
            row.iter_mut().for_each(|cell| *cell = value.clone());
        }
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Feed text: header, then lines from the bottom image row upwards.
    pub fn build(&self) -> String {
        let mut feed = String::from(FEED_HEADER);
        feed.push('\n');
        for row in self.values.iter().rev() {
            feed.push_str("   ");
            feed.push_str(&row.join("   "));
            feed.push('\n');
        }
        feed
    }
}

/// A feed with a single non-zero cell at pixel (`column`, `row`).
pub fn single_cell_feed(
    width: usize,
    height: usize,
    row: usize,
    column: usize,
    value: u32,
) -> String {
    FeedBuilder::new(width, height).set(row, column, value).build()
}

/// A feed of `lines` data lines where every field on line `i` holds `i`.
///
/// Handy for checking which lines survive truncation and in which order.
pub fn numbered_feed(lines: usize, fields_per_line: usize) -> String {
    let mut feed = String::from("header#\n");
    for line in 0..lines {
        feed.push_str(&format!("line{}", line));
        for _ in 0..fields_per_line {
            feed.push_str(&format!("  {}", line));
        }
        feed.push('\n');
    }
    feed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_reverses_rows() {
        let feed = FeedBuilder::new(2, 2).set(0, 1, 9).build();
        let data: Vec<&str> = feed.lines().filter(|l| !l.starts_with('#')).collect();
        assert_eq!(data.len(), 2);
        // Image row 0 is the last line of the feed.
        assert!(data[1].ends_with('9'));
        assert!(!data[0].contains('9'));
    }

    #[test]
    fn test_numbered_feed_line_count() {
        let feed = numbered_feed(3, 2);
        assert_eq!(feed.lines().count(), 4);
        assert!(feed.ends_with("line2  2  2\n"));
    }
}
