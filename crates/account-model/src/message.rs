//! Validation findings and their report-line rendering.

use std::fmt;

use serde::Serialize;

use crate::cell::CellAddress;

/// Header line of the tab-separated validation report.
pub const REPORT_HEADER: &str = "Site\tSubject ID\tCell Address\tField Name\tBad Value";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    /// The value does not have the field's format.
    InvalidFormat,
    /// The value parsed but lies outside the field's bounds.
    OutOfRange { range: String },
    /// The value could not be read as a number for the range check.
    BadNumber,
    /// The row has a different number of cells than the schema.
    RowLength { expected: usize, actual: usize },
}

/// One finding against one cell (or one row, for length mismatches).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationMessage {
    pub site: String,
    pub subject: String,
    /// 1-based line number; the header is line 1.
    pub row: usize,
    /// 0-based column index, absent for row-level findings.
    pub column: Option<usize>,
    /// Field key, absent for row-level findings.
    pub field: Option<&'static str>,
    pub kind: IssueKind,
    /// The raw, untrimmed cell value.
    pub value: String,
}

impl ValidationMessage {
    pub fn row_length(
        site: &str,
        subject: &str,
        row: usize,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self {
            site: site.to_string(),
            subject: subject.to_string(),
            row,
            column: None,
            field: None,
            kind: IssueKind::RowLength { expected, actual },
            value: String::new(),
        }
    }

    pub fn cell(
        site: &str,
        subject: &str,
        address: CellAddress,
        field: &'static str,
        kind: IssueKind,
        value: &str,
    ) -> Self {
        Self {
            site: site.to_string(),
            subject: subject.to_string(),
            row: address.row,
            column: Some(address.column),
            field: Some(field),
            kind,
            value: value.to_string(),
        }
    }

    pub fn address(&self) -> Option<CellAddress> {
        self.column.map(|column| CellAddress::new(column, self.row))
    }

    /// The "Field Name" column of the report.
    pub fn describe(&self) -> String {
        let field = self.field.unwrap_or_default();
        match &self.kind {
            IssueKind::InvalidFormat => format!("invalid {field}"),
            IssueKind::OutOfRange { range } => format!("out of range {field} [{range}]"),
            IssueKind::BadNumber => format!("bad numerical value for {field}"),
            IssueKind::RowLength { expected, actual } => {
                format!("unexpected length: expected {expected}, got {actual}")
            }
        }
    }
}

impl fmt::Display for ValidationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = match self.address() {
            Some(address) => address.to_string(),
            None => format!("Line {}", self.row),
        };
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            report_cell(&self.site),
            report_cell(&self.subject),
            location,
            self.describe(),
            report_cell(&self.value)
        )
    }
}

/// Keeps a value on one report line and in one report column.
fn report_cell(value: &str) -> String {
    value.replace(['\t', '\r', '\n'], " ")
}
