//! Input layouts and output layouts of the three treatment-arm files.
//!
//! Each arm lists its expected columns in file order. The reshaped output is
//! derived from that list by a [`Reshape`] table: checkbox groups collapse
//! into one column, event dates gain a day-difference column, coded values
//! are recoded and the site code is translated.

mod clopidogrel;
mod noac;
mod warfarin;

use account_model::{
    Choice, FieldCatalog, OutputColumn, OutputSpec, SITE_KEY, Schema, TreatmentArm,
};
use tracing::debug;

use crate::error::Result;

/// Key of the age column that `BINNED_AGE` is derived from.
pub const AGE_KEY: &str = "AGE_AT_ENROLLMENT";
pub const BINNED_AGE_KEY: &str = "BINNED_AGE";

/// Number of repeating follow-up groups in every arm file.
pub const FOLLOW_UP_GROUPS: usize = 5;

pub(crate) const DEMOGRAPHICS: &[&str] = &[
    "STUDY_ID_PHARMGKB_ID",
    "PROJECT_SITE",
    "GENDER",
    "DATE_OF_BIRTH",
    "ENROLLMENT_DATE",
    "AGE_AT_ENROLLMENT",
    "HEIGHT_CM",
    "WEIGHT_KG",
    "BMI",
    "NOTES",
    "LIST_OF_COMORBIDITIES",
    "DIABETES",
    "CONGESTIVE_HEART_FAILURE_AND_OR_CARDIOMYOPATHY",
    "HYPERTENSION",
    "HYPERCHOLESTEROLEMIA",
    "CURRENT_SMOKER",
    "FORMER_SMOKER",
    "HOW_LONG_A_SMOKER",
    "ALCOHOL",
];

pub(crate) const EMBOLIC_EVENT: &[Choice] = &[
    Choice::new("EMBOLIC_EVENT_CHOICE_0", "None"),
    Choice::new("EMBOLIC_EVENT_CHOICE_1", "Stroke"),
    Choice::new("EMBOLIC_EVENT_CHOICE_2", "DVT"),
    Choice::new("EMBOLIC_EVENT_CHOICE_3", "PE"),
    Choice::new("EMBOLIC_EVENT_CHOICE_4", "DVT/PE"),
    Choice::new("EMBOLIC_EVENT_CHOICE_5", "Myocardial Infarction"),
    Choice::new("EMBOLIC_EVENT_CHOICE_MD", "MD"),
];

const LOST_TO_FOLLOW_UP: &str = "PATIENT_LOST_TO_FOLLOW_UP";

/// Appends the repeating follow-up groups. Only the first group carries the
/// lost-to-follow-up flag, right after its duration column.
pub(crate) fn push_follow_up_groups(keys: &mut Vec<&'static str>, group: &[&'static str]) {
    for index in 0..FOLLOW_UP_GROUPS {
        for (position, &key) in group.iter().enumerate() {
            keys.push(key);
            if index == 0 && position == 0 {
                keys.push(LOST_TO_FOLLOW_UP);
            }
        }
    }
}

/// Rules turning an input layout into an output layout.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Reshape {
    /// Checkbox groups, emitted where their first choice column sits.
    pub checkboxes: &'static [(&'static str, &'static [Choice])],
    /// Event date to the day-difference column that follows it.
    pub days_from_enrollment: &'static [(&'static str, &'static str)],
    /// Columns replaced in place by a code translation.
    pub recodes: &'static [(&'static str, &'static [(&'static str, &'static str)])],
    /// Emit `BINNED_AGE` after the age column.
    pub binned_age: bool,
    /// Elapsed-hours column, emitted after the column named first.
    pub hours_between: Option<(&'static str, OutputColumn)>,
}

impl Reshape {
    pub(crate) fn output_spec(&self, keys: &[&'static str]) -> OutputSpec {
        let mut columns = Vec::with_capacity(keys.len() + 32);
        for &key in keys {
            if key == SITE_KEY {
                columns.push(OutputColumn::SiteCode);
                continue;
            }

            if let Some(&(output, choices)) = self
                .checkboxes
                .iter()
                .find(|(_, choices)| choices.iter().any(|choice| choice.field == key))
            {
                if choices.first().map(|choice| choice.field) == Some(key) {
                    columns.push(OutputColumn::Checkboxes { output, choices });
                }
                continue;
            }

            if let Some(&(source, codes)) = self.recodes.iter().find(|(source, _)| *source == key) {
                columns.push(OutputColumn::Recode {
                    output: source,
                    source,
                    codes,
                });
                continue;
            }

            columns.push(OutputColumn::Field(key));

            if self.binned_age && key == AGE_KEY {
                columns.push(OutputColumn::BinnedAge {
                    output: BINNED_AGE_KEY,
                    source: key,
                });
            }
            if let Some(&(source, output)) = self
                .days_from_enrollment
                .iter()
                .find(|(source, _)| *source == key)
            {
                columns.push(OutputColumn::DaysFromEnrollment { output, source });
            }
            if let Some((after, column)) = self.hours_between
                && after == key
            {
                columns.push(column);
            }
        }
        OutputSpec::new(columns)
    }
}

/// One arm's resolved input schema and output layout.
#[derive(Debug, Clone)]
pub struct ArmStandard {
    pub arm: TreatmentArm,
    pub schema: Schema,
    pub output: OutputSpec,
}

fn layout(arm: TreatmentArm) -> (Vec<&'static str>, Reshape) {
    match arm {
        TreatmentArm::Clopidogrel => (clopidogrel::schema_keys(), clopidogrel::RESHAPE),
        TreatmentArm::Noac => (noac::schema_keys(), noac::RESHAPE),
        TreatmentArm::Warfarin => (warfarin::schema_keys(), warfarin::RESHAPE),
    }
}

/// Resolves an arm's layouts against the catalog and checks that every output
/// column can be computed from the input columns.
pub fn load_arm(arm: TreatmentArm, catalog: &FieldCatalog) -> Result<ArmStandard> {
    let (keys, reshape) = layout(arm);
    let schema = Schema::from_keys(arm.as_str(), catalog, &keys)?;
    let output = reshape.output_spec(&keys);
    output.check(&schema, catalog)?;
    debug!(
        arm = arm.as_str(),
        input_columns = schema.len(),
        output_columns = output.len(),
        "loaded arm standard"
    );
    Ok(ArmStandard {
        arm,
        schema,
        output,
    })
}

pub fn load_arms(catalog: &FieldCatalog) -> Result<Vec<ArmStandard>> {
    TreatmentArm::ALL
        .into_iter()
        .map(|arm| load_arm(arm, catalog))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lost_to_follow_up_only_in_first_group() {
        let mut keys = Vec::new();
        push_follow_up_groups(&mut keys, &["DURATION_OF_FOLLOW_UP", "COMPLETE"]);
        assert_eq!(keys.len(), FOLLOW_UP_GROUPS * 2 + 1);
        assert_eq!(keys[1], LOST_TO_FOLLOW_UP);
        assert_eq!(
            keys.iter().filter(|key| **key == LOST_TO_FOLLOW_UP).count(),
            1
        );
    }

    #[test]
    fn reshape_collapses_groups_at_first_choice() {
        const CHOICES: &[Choice] = &[Choice::new("A_1", "One"), Choice::new("A_2", "Two")];
        let reshape = Reshape {
            checkboxes: &[("A", CHOICES)],
            days_from_enrollment: &[("DATE_OF_DEATH", "TIME_TO_DEATH")],
            recodes: &[],
            binned_age: true,
            hours_between: None,
        };
        let spec = reshape.output_spec(&[
            "PROJECT_SITE",
            "AGE_AT_ENROLLMENT",
            "A_1",
            "A_2",
            "DATE_OF_DEATH",
        ]);
        let keys: Vec<_> = spec.columns().iter().map(OutputColumn::key).collect();
        assert_eq!(
            keys,
            vec![
                "PROJECT_SITE",
                "AGE_AT_ENROLLMENT",
                "BINNED_AGE",
                "A",
                "DATE_OF_DEATH",
                "TIME_TO_DEATH",
            ]
        );
        assert_eq!(spec.columns()[0], OutputColumn::SiteCode);
    }
}
