//! Validation of ACCOuNT data files against their arm schema.

mod report;
mod validator;

pub use report::{ReportGroup, write_validation_report};
pub use validator::{FileValidation, validate_file, validate_row};
