use account_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("site code {site:?} on line {row} has no entry in the site-key map")]
    UnmappedSite { site: String, row: usize },
    #[error("output column reads {key}, which is not part of the {schema} schema")]
    FieldNotInSchema { schema: String, key: String },
    #[error("invalid output layout: {0}")]
    Model(#[source] ModelError),
}

impl From<ModelError> for TransformError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::FieldNotInSchema { schema, key } => Self::FieldNotInSchema { schema, key },
            other => Self::Model(other),
        }
    }
}

/// A date and time pair that does not read as `M-D-YYYY h:mm AM|PM`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse date-time {input:?}")]
pub struct DateTimeParseError {
    /// The normalized text that failed to parse.
    pub input: String,
}

pub type Result<T> = std::result::Result<T, TransformError>;
