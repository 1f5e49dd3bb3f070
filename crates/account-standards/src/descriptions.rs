#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, StandardsError};

/// Descriptions shipped for the computed output columns.
const BUILT_IN: &[(&str, &str)] = &[
    (
        "TIME_TO_BLEEDING_EVENT",
        "Days from enrollment to the bleeding event",
    ),
    ("TIME_TO_MACE", "Days from enrollment to the MACE"),
    ("TIME_TO_STEMI", "Days from enrollment to the first STEMI"),
    ("TIME_TO_NSTEMI", "Days from enrollment to the first NSTEMI"),
    (
        "TIME_TO_ANGINA",
        "Days from enrollment to the first unstable angina",
    ),
    ("TIME_TO_THROMB", "Days from enrollment to the stent thrombosis"),
    ("TIME_TO_CARD_DEATH", "Days from enrollment to cardiac death"),
    ("TIME_TO_MI", "Days from enrollment to the first MI"),
    ("TIME_TO_ACS", "Days from enrollment to the first ACS"),
    (
        "TIME_TO_ISC_STROKE",
        "Days from enrollment to the ischemic stroke",
    ),
    (
        "TIME_TO_HEM_STROKE",
        "Days from enrollment to the hemorrhagic stroke",
    ),
    ("TIME_TO_DEATH", "Days from enrollment to death"),
    (
        "DURATION_FOLLOWUP",
        "Days from enrollment to the last follow up",
    ),
    (
        "TIME_TO_EMBOLIC_EVENT",
        "Days from enrollment to the embolic event",
    ),
    (
        "TIME_TO_BLOOD_DRAW",
        "Hours from the last dose to the blood draw",
    ),
    ("EMBOLIC_EVENT", "Embolic events reported, separated by \"; \""),
    (
        "INDICATION_FOR_NOAC_TREATMENT",
        "Indications for NOAC treatment, separated by \"; \"",
    ),
    (
        "WHICH_NOAC_DRUG_USED",
        "NOAC drugs used, separated by \"; \"",
    ),
    (
        "INDICATION_FOR_CLOPIDOGREL_TREATMENT",
        "Indications for clopidogrel treatment, separated by \"; \"",
    ),
    (
        "INDICATION_FOR_WARFARIN_TREATMENT",
        "Indications for warfarin treatment, separated by \"; \"",
    ),
    ("BINNED_AGE", "Age at enrollment, ages 90 and over binned"),
    ("CARDIAC_DEATH", "Cardiac death (Y, N or MD)"),
    ("PROJECT_SITE", "Published site identifier"),
];

#[derive(Debug, Deserialize)]
struct DescriptionsFile {
    #[serde(default)]
    descriptions: BTreeMap<String, String>,
}

/// Field key to the human-readable text of the second output header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptions {
    entries: BTreeMap<String, String>,
}

impl Default for Descriptions {
    fn default() -> Self {
        Self {
            entries: BUILT_IN
                .iter()
                .map(|(key, text)| (key.to_string(), text.to_string()))
                .collect(),
        }
    }
}

impl Descriptions {
    /// Description for `key`, empty when none is registered.
    pub fn get(&self, key: &str) -> &str {
        self.entries.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Adds entries, replacing existing ones with the same key.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        self.entries.extend(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Loads a `[descriptions]` TOML table over the built-in descriptions.
pub fn load_descriptions(path: &Path) -> Result<Descriptions> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let file: DescriptionsFile = toml::from_str(&contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(
        path = %path.display(),
        entries = file.descriptions.len(),
        "loaded field descriptions"
    );
    let mut descriptions = Descriptions::default();
    descriptions.extend(file.descriptions);
    Ok(descriptions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_ins_cover_computed_columns() {
        let descriptions = Descriptions::default();
        assert_eq!(
            descriptions.get("TIME_TO_BLOOD_DRAW"),
            "Hours from the last dose to the blood draw"
        );
        assert_eq!(descriptions.get("NOTES"), "");
    }

    #[test]
    fn file_table_overrides_built_ins() {
        let file: DescriptionsFile = toml::from_str(
            "[descriptions]\nBMI = \"Body mass index\"\nBINNED_AGE = \"Age bucket\"\n",
        )
        .expect("parse descriptions");
        let mut descriptions = Descriptions::default();
        descriptions.extend(file.descriptions);
        assert_eq!(descriptions.get("BMI"), "Body mass index");
        assert_eq!(descriptions.get("BINNED_AGE"), "Age bucket");
    }
}
