//! Data model for validating and reshaping ACCOuNT consortium data files.

pub mod arm;
pub mod catalog;
pub mod cell;
pub mod error;
pub mod field;
pub mod format;
pub mod message;
pub mod missing;
pub mod output;
pub mod range;
pub mod redact;
pub mod schema;
pub mod site;

pub use arm::TreatmentArm;
pub use catalog::FieldCatalog;
pub use cell::{CellAddress, column_name};
pub use error::{ModelError, Result};
pub use field::FieldDef;
pub use format::FormatRule;
pub use message::{IssueKind, REPORT_HEADER, ValidationMessage};
pub use missing::{MISSING_DATA, canonicalize, is_missing, normalize_cell};
pub use output::{Choice, ENROLLMENT_KEY, OutputColumn, OutputSpec};
pub use range::{BadNumber, RangeRule, parse_number};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data_enabled};
pub use schema::{SITE_KEY, SUBJECT_KEY, Schema};
pub use site::SiteKeyMap;
