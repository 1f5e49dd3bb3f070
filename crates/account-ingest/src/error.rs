//! Error types for arm-file and site-key ingestion.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Delimited File Errors ===
    /// The csv reader rejected a record.
    #[error("failed to parse delimited file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The file has no header record.
    #[error("data file is empty: {path}")]
    EmptyFile { path: PathBuf },

    // === Site Key Errors ===
    /// A line is not of the form `SITE=ID`.
    #[error("malformed site key in {path} at line {line_number}: {line}")]
    MalformedSiteKey {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    /// The site-key file holds no mappings.
    #[error("site key file has no entries: {path}")]
    EmptySiteKeys { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MalformedSiteKey {
            path: PathBuf::from("site.key"),
            line_number: 3,
            line: "NU".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed site key in site.key at line 3: NU"
        );
    }
}
