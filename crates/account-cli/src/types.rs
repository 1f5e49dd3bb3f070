use std::collections::BTreeMap;
use std::path::PathBuf;

use account_model::{TreatmentArm, ValidationMessage};
use serde::Serialize;

/// Label used for row-level findings when counting messages per field.
pub const ROW_LENGTH_LABEL: &str = "(row length)";

/// Outcome of one `process` run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub report: PathBuf,
    pub arms: Vec<ArmSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArmSummary {
    pub arm: TreatmentArm,
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub valid_rows: usize,
    pub output_columns: usize,
    pub messages: Vec<ValidationMessage>,
}

impl RunSummary {
    pub fn message_count(&self) -> usize {
        self.arms.iter().map(|arm| arm.messages.len()).sum()
    }

    pub fn has_messages(&self) -> bool {
        self.message_count() > 0
    }

    /// Message counts per field, most frequent first, ties in key order.
    pub fn field_counts(&self) -> Vec<(&'static str, usize)> {
        let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
        for message in self.arms.iter().flat_map(|arm| &arm.messages) {
            *counts
                .entry(message.field.unwrap_or(ROW_LENGTH_LABEL))
                .or_default() += 1;
        }
        let mut counts: Vec<_> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

impl ArmSummary {
    pub fn invalid_rows(&self) -> usize {
        self.rows - self.valid_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use account_model::{CellAddress, IssueKind};

    fn arm(messages: Vec<ValidationMessage>) -> ArmSummary {
        ArmSummary {
            arm: TreatmentArm::Noac,
            input: PathBuf::from("noac.csv"),
            output: PathBuf::from("out/account_noac_processed.csv"),
            rows: 3,
            valid_rows: 1,
            output_columns: 114,
            messages,
        }
    }

    fn finding(field: &'static str) -> ValidationMessage {
        ValidationMessage::cell(
            "NU",
            "PA1",
            CellAddress::new(2, 2),
            field,
            IssueKind::InvalidFormat,
            "x",
        )
    }

    #[test]
    fn counts_fields_most_frequent_first() {
        let summary = RunSummary {
            output_dir: PathBuf::from("out"),
            report: PathBuf::from("out/validation.tsv"),
            arms: vec![
                arm(vec![finding("BMI"), finding("AGE_AT_ENROLLMENT")]),
                arm(vec![
                    finding("BMI"),
                    ValidationMessage::row_length("NU", "PA2", 3, 114, 100),
                ]),
            ],
        };
        assert_eq!(summary.message_count(), 4);
        assert!(summary.has_messages());
        assert_eq!(summary.arms[0].invalid_rows(), 2);
        assert_eq!(
            summary.field_counts(),
            vec![("BMI", 2), (ROW_LENGTH_LABEL, 1), ("AGE_AT_ENROLLMENT", 1)]
        );
    }
}
