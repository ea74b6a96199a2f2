//! Parser for OVATION aurora activity feeds.
//!
//! The feed is plain text: a `#`-terminated header followed by one line per
//! latitude band. Each line starts with a label field and continues with
//! whitespace-separated activity values, one per longitude bin.
//!
//! ```
//! use ovation_parser::ActivityGrid;
//!
//! let grid = ActivityGrid::parse("header#\nnorth 0 7 0\nsouth 1 2 3\n").unwrap();
//! assert_eq!(grid.row_count(), 2);
//! assert_eq!(grid.activity_at(1, 1), 7.0);
//! ```

pub mod error;
pub mod grid;

pub use error::{ParseError, Result};
pub use grid::{parse_activity, parse_activity_feed, ActivityGrid, FEED_DELIMITER};
