use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("field {key} is defined more than once")]
    DuplicateField { key: String },
    #[error("unknown field {key}")]
    UnknownField { key: String },
    #[error("field {key} is not part of the {schema} schema")]
    FieldNotInSchema { schema: String, key: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
