use account_model::{BadNumber, CellAddress, IssueKind, Schema, ValidationMessage};
use serde::Serialize;
use tracing::{debug, trace};

/// Findings for one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileValidation {
    pub messages: Vec<ValidationMessage>,
    /// Rows that produced no message.
    pub valid_rows: usize,
    pub total_rows: usize,
}

impl FileValidation {
    pub fn invalid_rows(&self) -> usize {
        self.total_rows - self.valid_rows
    }

    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }
}

fn identity(row: &[String], column: usize) -> &str {
    row.get(column).map(|cell| cell.trim()).unwrap_or_default()
}

/// Checks one data row. `row_number` is the 1-based line in the source file.
///
/// A row whose length differs from the schema gets one row-level message and
/// is still checked over the columns both have.
pub fn validate_row(schema: &Schema, row: &[String], row_number: usize) -> Vec<ValidationMessage> {
    let site = identity(row, schema.site_column());
    let subject = identity(row, schema.subject_column());
    let mut messages = Vec::new();

    if row.len() != schema.len() {
        messages.push(ValidationMessage::row_length(
            site,
            subject,
            row_number,
            schema.len(),
            row.len(),
        ));
    }

    for (column, (field, value)) in schema.fields().iter().zip(row).enumerate() {
        let address = CellAddress::new(column, row_number);
        let kind = if !field.validate(value) {
            IssueKind::InvalidFormat
        } else {
            match field.test_range(value) {
                Some(Ok(false)) => IssueKind::OutOfRange {
                    range: field.range_description().unwrap_or_default(),
                },
                Some(Err(BadNumber)) => IssueKind::BadNumber,
                Some(Ok(true)) | None => continue,
            }
        };
        messages.push(ValidationMessage::cell(
            site, subject, address, field.key, kind, value,
        ));
    }

    trace!(row = row_number, messages = messages.len(), "validated row");
    messages
}

/// Checks every data row of a file. The header is line 1, so data starts at line 2.
pub fn validate_file(schema: &Schema, rows: &[Vec<String>]) -> FileValidation {
    let mut validation = FileValidation {
        total_rows: rows.len(),
        ..FileValidation::default()
    };
    for (index, row) in rows.iter().enumerate() {
        let messages = validate_row(schema, row, index + 2);
        if messages.is_empty() {
            validation.valid_rows += 1;
        }
        validation.messages.extend(messages);
    }
    debug!(
        schema = schema.name(),
        rows = validation.total_rows,
        valid_rows = validation.valid_rows,
        messages = validation.messages.len(),
        "validated file"
    );
    validation
}
