//! Reshaping of input rows into output rows.

use std::collections::HashMap;

use account_model::{
    CellAddress, Choice, ENROLLMENT_KEY, FieldCatalog, MISSING_DATA, OutputColumn, OutputSpec,
    SITE_KEY, Schema, SiteKeyMap, is_missing, normalize_cell, parse_number, redact_value,
};
use account_standards::Descriptions;
use tracing::{debug, warn};

use crate::datetime::{diff_days, diff_hours, parse_date, parse_datetime};
use crate::error::{Result, TransformError};

/// Published in place of ages of 90 and above.
pub const AGE_BIN_LABEL: &str = "90 and over";
/// Published for an age that is neither missing nor a number.
pub const BAD_VALUE: &str = "BAD VALUE";

const AGE_BIN_FLOOR: f64 = 90.0;
const CHECKED: &str = "Checked";

/// Joins with `"; "` the labels of the choices whose cell reads `Checked`.
pub fn collapse_checkboxes<'a>(
    choices: &[Choice],
    mut cell: impl FnMut(&Choice) -> Option<&'a str>,
) -> String {
    choices
        .iter()
        .filter(|choice| cell(*choice).is_some_and(|value| value.trim() == CHECKED))
        .map(|choice| choice.label)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Hides ages of 90 and above behind one label.
///
/// Returns `None` when the value is not a number.
pub fn bin_age(raw: &str) -> Option<String> {
    if is_missing(raw) {
        return Some(MISSING_DATA.to_string());
    }
    let age = parse_number(raw).ok()?;
    if age >= AGE_BIN_FLOOR {
        Some(AGE_BIN_LABEL.to_string())
    } else {
        Some(raw.trim().to_string())
    }
}

/// Builds output rows for one arm from rows laid out by its schema.
pub struct RowTransformer<'a> {
    schema: &'a Schema,
    output: &'a OutputSpec,
    catalog: &'a FieldCatalog,
    site_keys: Option<&'a SiteKeyMap>,
}

impl<'a> RowTransformer<'a> {
    /// Checks that every output column resolves against the schema and catalog.
    ///
    /// Without a site-key map, site codes are published unchanged.
    pub fn new(
        schema: &'a Schema,
        output: &'a OutputSpec,
        catalog: &'a FieldCatalog,
        site_keys: Option<&'a SiteKeyMap>,
    ) -> Result<Self> {
        output.check(schema, catalog)?;
        if site_keys.is_none() {
            warn!(
                schema = schema.name(),
                "no site-key map supplied, project sites are published unchanged"
            );
        }
        Ok(Self {
            schema,
            output,
            catalog,
            site_keys,
        })
    }

    /// First header row: display names of the output columns.
    pub fn header(&self) -> Vec<&'static str> {
        self.output
            .columns()
            .iter()
            .map(|column| {
                self.catalog
                    .get(column.key())
                    .map_or(column.key(), |field| field.display_name)
            })
            .collect()
    }

    /// Second header row, blank where no description is registered.
    pub fn descriptions(&self, descriptions: &Descriptions) -> Vec<String> {
        self.output
            .columns()
            .iter()
            .map(|column| descriptions.get(column.key()).to_string())
            .collect()
    }

    /// Reshapes one input row. `row_number` is the 1-based line in the source file.
    pub fn build_output_row(&self, row: &[String], row_number: usize) -> Result<Vec<String>> {
        let mut occurrences: HashMap<&'static str, usize> = HashMap::new();
        let mut cells = Vec::with_capacity(self.output.len());
        for column in self.output.columns() {
            let counter = occurrences.entry(column.key()).or_default();
            let occurrence = *counter;
            *counter += 1;
            let cell = self.compute(column, row, row_number, occurrence)?;
            cells.push(normalize_cell(cell));
        }
        Ok(cells)
    }

    /// Reshapes every row of a file, stopping at the first fatal error.
    pub fn build_output_rows(&self, rows: &[Vec<String>]) -> Result<Vec<Vec<String>>> {
        let output = rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.build_output_row(row, index + 2))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            schema = self.schema.name(),
            rows = output.len(),
            columns = self.output.len(),
            "built output rows"
        );
        Ok(output)
    }

    fn cell<'r>(&self, row: &'r [String], key: &str, occurrence: usize) -> Option<&'r str> {
        self.schema
            .column_of(key, occurrence)
            .and_then(|index| row.get(index))
            .map(String::as_str)
    }

    fn compute(
        &self,
        column: &OutputColumn,
        row: &[String],
        row_number: usize,
        occurrence: usize,
    ) -> Result<String> {
        let value = match *column {
            OutputColumn::Field(key) => self
                .cell(row, key, occurrence)
                .unwrap_or_default()
                .to_string(),
            OutputColumn::SiteCode => self.site_code(row, row_number)?,
            OutputColumn::DaysFromEnrollment { output, source } => {
                self.days_from_enrollment(row, row_number, occurrence, output, source)
            }
            OutputColumn::Checkboxes { choices, .. } => {
                collapse_checkboxes(choices, |choice| self.cell(row, choice.field, occurrence))
            }
            OutputColumn::Recode { source, codes, .. } => {
                let raw = self.cell(row, source, occurrence).unwrap_or_default();
                let code = if is_missing(raw) { MISSING_DATA } else { raw.trim() };
                codes
                    .iter()
                    .find(|(from, _)| *from == code)
                    .map(|(_, to)| (*to).to_string())
                    .unwrap_or_default()
            }
            OutputColumn::BinnedAge { output, source } => {
                let raw = self.cell(row, source, occurrence).unwrap_or_default();
                bin_age(raw).unwrap_or_else(|| {
                    warn!(
                        row = row_number,
                        output,
                        value = redact_value(raw),
                        "bad age number"
                    );
                    BAD_VALUE.to_string()
                })
            }
            OutputColumn::HoursBetween {
                output,
                from_date,
                from_time,
                to_date,
                to_time,
            } => self.hours_between(
                row,
                row_number,
                output,
                [from_date, from_time, to_date, to_time],
            ),
        };
        Ok(value)
    }

    fn site_code(&self, row: &[String], row_number: usize) -> Result<String> {
        let raw = self.cell(row, SITE_KEY, 0).unwrap_or_default().trim();
        let Some(site_keys) = self.site_keys else {
            return Ok(raw.to_string());
        };
        site_keys
            .get(raw)
            .map(str::to_string)
            .ok_or_else(|| TransformError::UnmappedSite {
                site: raw.to_string(),
                row: row_number,
            })
    }

    fn days_from_enrollment(
        &self,
        row: &[String],
        row_number: usize,
        occurrence: usize,
        output: &str,
        source: &str,
    ) -> String {
        let event = self.cell(row, source, occurrence).and_then(parse_date);
        let enrollment = self.cell(row, ENROLLMENT_KEY, 0).and_then(parse_date);
        let (Some(event), Some(enrollment)) = (event, enrollment) else {
            return String::new();
        };
        let days = diff_days(enrollment, event);
        if days < 0 {
            let column = self.schema.column_of(source, occurrence).unwrap_or_default();
            warn!(
                row = row_number,
                cell = %CellAddress::new(column, row_number),
                output,
                days,
                "event date precedes enrollment"
            );
        }
        days.to_string()
    }

    fn hours_between(
        &self,
        row: &[String],
        row_number: usize,
        output: &str,
        keys: [&str; 4],
    ) -> String {
        let mut values = [""; 4];
        for (slot, key) in values.iter_mut().zip(keys) {
            match self.cell(row, key, 0) {
                Some(value) if !is_missing(value) => *slot = value,
                _ => return String::new(),
            }
        }
        let [from_date, from_time, to_date, to_time] = values;
        match (
            parse_datetime(from_date, from_time),
            parse_datetime(to_date, to_time),
        ) {
            (Ok(from), Ok(to)) => diff_hours(from, to),
            (Err(error), _) | (_, Err(error)) => {
                warn!(
                    row = row_number,
                    output,
                    value = redact_value(&error.input),
                    "cannot parse date-time, leaving the cell empty"
                );
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHOICES: &[Choice] = &[
        Choice::new("A", "Atrial fibrillation"),
        Choice::new("B", "DVT"),
        Choice::new("C", "PE"),
    ];

    fn collapse(values: [&'static str; 3]) -> String {
        collapse_checkboxes(CHOICES, |choice| {
            CHOICES
                .iter()
                .position(|candidate| candidate == choice)
                .map(|index| values[index])
        })
    }

    #[test]
    fn collapses_checked_labels_in_order() {
        assert_eq!(collapse(["Unchecked", "Checked", "Unchecked"]), "DVT");
        assert_eq!(
            collapse(["Checked", "Unchecked", " Checked "]),
            "Atrial fibrillation; PE"
        );
        assert_eq!(collapse(["Unchecked", "Unchecked", "MD"]), "");
        assert_eq!(collapse(["checked", "yes", "1"]), "");
    }

    #[test]
    fn bins_ages_of_ninety_and_over() {
        assert_eq!(bin_age("89").as_deref(), Some("89"));
        assert_eq!(bin_age(" 90 ").as_deref(), Some(AGE_BIN_LABEL));
        assert_eq!(bin_age("104.5").as_deref(), Some(AGE_BIN_LABEL));
        assert_eq!(bin_age("").as_deref(), Some(MISSING_DATA));
        assert_eq!(bin_age("unknown").as_deref(), Some(MISSING_DATA));
        assert_eq!(bin_age("sixty"), None);
    }
}
