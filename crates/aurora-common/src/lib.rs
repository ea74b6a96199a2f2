//! Common types and utilities shared across the aurora map crates.

pub mod grid;
pub mod time;

pub use grid::{MapSize, MAX_LATITUDE_BANDS};
pub use time::{filesystem_safe_utc_date_string, utc_date_string};
