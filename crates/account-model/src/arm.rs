use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ModelError;

/// Drug-treatment arm of the consortium, one data file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentArm {
    Clopidogrel,
    Noac,
    Warfarin,
}

impl TreatmentArm {
    pub const ALL: [TreatmentArm; 3] = [Self::Clopidogrel, Self::Noac, Self::Warfarin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clopidogrel => "clopidogrel",
            Self::Noac => "noac",
            Self::Warfarin => "warfarin",
        }
    }

    /// Title used in tables and coverage reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clopidogrel => "Clopidogrel",
            Self::Noac => "NOAC",
            Self::Warfarin => "Warfarin",
        }
    }

    /// File name of the reshaped output for this arm.
    pub fn output_file_name(&self) -> String {
        format!("account_{}_processed.csv", self.as_str())
    }
}

impl fmt::Display for TreatmentArm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TreatmentArm {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clopidogrel" | "c" => Ok(Self::Clopidogrel),
            "noac" | "n" => Ok(Self::Noac),
            "warfarin" | "w" => Ok(Self::Warfarin),
            other => Err(ModelError::Message(format!("unknown treatment arm: {other}"))),
        }
    }
}
