//! Header analysis and field coverage across the arm files.

use std::path::Path;

use account_model::{FieldCatalog, Schema, TreatmentArm, column_name};
use account_standards::ArmStandard;
use anyhow::{Context, Result};
use serde::Serialize;

/// One header cell that differs from the schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderMismatch {
    /// 0-based column index.
    pub column: usize,
    pub expected: Option<&'static str>,
    pub found: Option<String>,
}

impl HeaderMismatch {
    /// Spreadsheet letters of the column, such as `AB`.
    pub fn column_letters(&self) -> String {
        column_name(self.column + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderReport {
    pub expected_columns: usize,
    pub actual_columns: usize,
    pub mismatches: Vec<HeaderMismatch>,
}

impl HeaderReport {
    pub fn is_match(&self) -> bool {
        self.expected_columns == self.actual_columns && self.mismatches.is_empty()
    }
}

/// Compares a file header with the schema's display names, column by column.
pub fn compare_header(schema: &Schema, headers: &[String]) -> HeaderReport {
    let width = schema.len().max(headers.len());
    let mismatches = (0..width)
        .filter_map(|column| {
            let expected = schema.field(column).map(|field| field.display_name);
            let found = headers.get(column).map(|header| header.trim());
            (expected != found).then(|| HeaderMismatch {
                column,
                expected,
                found: found.map(str::to_string),
            })
        })
        .collect();
    HeaderReport {
        expected_columns: schema.len(),
        actual_columns: headers.len(),
        mismatches,
    }
}

/// One line of the coverage file: a published field and the arms that publish it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRow {
    pub title: &'static str,
    pub arms: Vec<TreatmentArm>,
}

pub const COVERAGE_HEADER: [&str; 4] = [
    "Field Title",
    "In Clopidogrel File",
    "In NOAC File",
    "In Warfarin File",
];

/// Published fields in catalog order with the arms whose output carries them.
pub fn coverage_rows(catalog: &FieldCatalog, standards: &[ArmStandard]) -> Vec<CoverageRow> {
    catalog
        .fields()
        .iter()
        .filter_map(|field| {
            let arms: Vec<TreatmentArm> = standards
                .iter()
                .filter(|standard| {
                    standard
                        .output
                        .columns()
                        .iter()
                        .any(|column| column.key() == field.key)
                })
                .map(|standard| standard.arm)
                .collect();
            (!arms.is_empty()).then_some(CoverageRow {
                title: field.display_name,
                arms,
            })
        })
        .collect()
}

/// Writes the coverage rows as an Excel-dialect CSV.
pub fn write_coverage(path: &Path, rows: &[CoverageRow]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(COVERAGE_HEADER)
        .with_context(|| format!("write {}", path.display()))?;
    for row in rows {
        let mut record = vec![row.title];
        record.extend(TreatmentArm::ALL.iter().map(|arm| {
            if row.arms.contains(arm) {
                arm.label()
            } else {
                ""
            }
        }));
        writer
            .write_record(&record)
            .with_context(|| format!("write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
