//! Activity grid parsing.

use aurora_common::MAX_LATITUDE_BANDS;
use tracing::debug;

use crate::error::{ParseError, Result};

/// Separates the feed header from the data section.
pub const FEED_DELIMITER: char = '#';

/// Parsed activity feed: rows are latitude bands, columns are longitude bins.
///
/// Row 0 is the last data line of the feed, so row indices line up with the
/// top-to-bottom pixel rows of the base map. Fields are kept as text and
/// converted with [`parse_activity`] when read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityGrid {
    rows: Vec<Vec<String>>,
}

impl ActivityGrid {
    /// Parse raw feed text. See [`parse_activity_feed`].
    pub fn parse(raw: &str) -> Result<Self> {
        parse_activity_feed(raw)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Raw text of a cell, if the cell exists.
    pub fn field(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Activity of a cell. Missing and malformed cells read as zero.
    pub fn activity_at(&self, row: usize, column: usize) -> f64 {
        self.field(row, column).map(parse_activity).unwrap_or(0.0)
    }

    /// Iterate every cell as `(row, column, activity)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, fields)| {
            fields
                .iter()
                .enumerate()
                .map(move |(column, field)| (row, column, parse_activity(field)))
        })
    }

    /// Highest activity in the grid, or zero for a grid without positive cells.
    pub fn max_activity(&self) -> f64 {
        self.cells().map(|(_, _, activity)| activity).fold(0.0, f64::max)
    }

    /// Number of cells with positive activity.
    pub fn nonzero_cells(&self) -> usize {
        self.cells().filter(|(_, _, activity)| *activity > 0.0).count()
    }
}

/// Convert a feed field to an activity value.
///
/// Anything that is not a finite number counts as zero activity.
pub fn parse_activity(field: &str) -> f64 {
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse raw feed text into an [`ActivityGrid`].
///
/// Only the text after the last `#` is data. A blank remainder of the `#`
/// line is dropped with its newline, as is one trailing newline. At most
/// [`MAX_LATITUDE_BANDS`] lines are kept (the first ones), the label field of
/// every line is discarded and the row order is reversed.
pub fn parse_activity_feed(raw: &str) -> Result<ActivityGrid> {
    let delimiter = raw
        .rfind(FEED_DELIMITER)
        .ok_or(ParseError::MissingDelimiter)?;
    let section = &raw[delimiter + FEED_DELIMITER.len_utf8()..];

    // Rest of the delimiter line, e.g. "# \n".
    let section = match section.split_once('\n') {
        Some((rest_of_line, data)) if rest_of_line.trim().is_empty() => data,
        _ => section,
    };
    let section = section
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(section);

    if section.trim().is_empty() {
        return Err(ParseError::EmptyDataSection);
    }

    let lines: Vec<&str> = section.split('\n').collect();
    let line_count = lines.len();

    let mut rows: Vec<Vec<String>> = lines
        .into_iter()
        .take(MAX_LATITUDE_BANDS)
        .map(|line| parse_row(line.strip_suffix('\r').unwrap_or(line)))
        .collect();

    if rows.iter().all(Vec::is_empty) {
        return Err(ParseError::NoDataRows { lines: rows.len() });
    }

    rows.reverse();

    debug!(
        lines = line_count,
        rows = rows.len(),
        dropped = line_count.saturating_sub(rows.len()),
        "Parsed activity feed"
    );

    Ok(ActivityGrid { rows })
}

/// Split a data line into fields and drop its label.
fn parse_row(line: &str) -> Vec<String> {
    let mut fields = split_fields(line);
    if !fields.is_empty() {
        fields.remove(0);
    }
    fields
}

/// Every run of whitespace counts as one separator, every comma as another.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_whitespace() {
            while chars.peek().is_some_and(|next| next.is_whitespace()) {
                chars.next();
            }
            fields.push(std::mem::take(&mut current));
        } else if c == ',' {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    fields.push(current);

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_whitespace_runs() {
        assert_eq!(split_fields("a  1   2"), vec!["a", "1", "2"]);
        assert_eq!(split_fields("   0   5"), vec!["", "0", "5"]);
        assert_eq!(split_fields("x\t3 \t4"), vec!["x", "3", "4"]);
    }

    #[test]
    fn test_split_fields_commas_keep_positions() {
        assert_eq!(split_fields("x,1,,3"), vec!["x", "1", "", "3"]);
    }

    #[test]
    fn test_parse_row_empty_line() {
        assert!(parse_row("").is_empty());
        assert!(parse_row("label").is_empty());
    }

    #[test]
    fn test_parse_activity_lenient() {
        assert_eq!(parse_activity("42"), 42.0);
        assert_eq!(parse_activity(" 7 "), 7.0);
        assert_eq!(parse_activity("3.5"), 3.5);
        assert_eq!(parse_activity(""), 0.0);
        assert_eq!(parse_activity("n/a"), 0.0);
        assert_eq!(parse_activity("NaN"), 0.0);
        assert_eq!(parse_activity("inf"), 0.0);
    }

    #[test]
    fn test_crlf_feed() {
        let grid = parse_activity_feed("hdr#\r\na 1 2\r\nb 3 4\r\n").unwrap();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.row(0).unwrap(), ["3", "4"]);
        assert_eq!(grid.row(1).unwrap(), ["1", "2"]);
    }

    #[test]
    fn test_blank_rest_of_delimiter_line() {
        let grid = parse_activity_feed("hdr# \t\r\na 1 2\r\n").unwrap();
        assert_eq!(grid.row_count(), 1);
        assert_eq!(grid.row(0).unwrap(), ["1", "2"]);
    }
}
