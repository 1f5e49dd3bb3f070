//! Transformation of validated ACCOuNT rows into the published layout.
//!
//! - **datetime**: month-first date parsing and day/hour differences
//! - **row**: per-row reshaping driven by an arm's output columns

pub mod datetime;
pub mod error;
pub mod row;

pub use datetime::{diff_days, diff_hours, parse_date, parse_datetime};
pub use error::{DateTimeParseError, Result, TransformError};
pub use row::{AGE_BIN_LABEL, BAD_VALUE, RowTransformer, bin_age, collapse_checkboxes};
