//! Output column descriptors.
//!
//! An [`OutputSpec`] lists the columns of a reshaped file. Each column either
//! copies an input field or names the computation that derives it and the
//! input fields it reads.

use crate::catalog::FieldCatalog;
use crate::error::{ModelError, Result};
use crate::schema::{SITE_KEY, Schema};

/// One labelled member of a checkbox group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub field: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(field: &'static str, label: &'static str) -> Self {
        Self { field, label }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputColumn {
    /// Copy the input value.
    Field(&'static str),
    /// Translate the project site through the site-key map.
    SiteCode,
    /// Whole days from the enrollment date to `source`.
    DaysFromEnrollment {
        output: &'static str,
        source: &'static str,
    },
    /// Elapsed hours from one date/time pair to another.
    HoursBetween {
        output: &'static str,
        from_date: &'static str,
        from_time: &'static str,
        to_date: &'static str,
        to_time: &'static str,
    },
    /// Labels of the checked members, joined with `"; "`.
    Checkboxes {
        output: &'static str,
        choices: &'static [Choice],
    },
    /// Exact-code translation; unknown codes become empty.
    Recode {
        output: &'static str,
        source: &'static str,
        codes: &'static [(&'static str, &'static str)],
    },
    /// Ages of 90 and above collapse into one label.
    BinnedAge {
        output: &'static str,
        source: &'static str,
    },
}

impl OutputColumn {
    /// Catalog key naming this output column.
    pub fn key(&self) -> &'static str {
        match *self {
            Self::Field(key) => key,
            Self::SiteCode => SITE_KEY,
            Self::DaysFromEnrollment { output, .. }
            | Self::HoursBetween { output, .. }
            | Self::Checkboxes { output, .. }
            | Self::Recode { output, .. }
            | Self::BinnedAge { output, .. } => output,
        }
    }

    /// Input fields this column reads.
    pub fn sources(&self) -> Vec<&'static str> {
        match *self {
            Self::Field(key) => vec![key],
            Self::SiteCode => vec![SITE_KEY],
            Self::DaysFromEnrollment { source, .. } => vec![source, ENROLLMENT_KEY],
            Self::HoursBetween {
                from_date,
                from_time,
                to_date,
                to_time,
                ..
            } => vec![from_date, from_time, to_date, to_time],
            Self::Checkboxes { choices, .. } => choices.iter().map(|choice| choice.field).collect(),
            Self::Recode { source, .. } | Self::BinnedAge { source, .. } => vec![source],
        }
    }

    /// True for columns that are not a plain copy.
    pub fn is_computed(&self) -> bool {
        !matches!(self, Self::Field(_))
    }
}

/// Key of the enrollment date that day differences are measured from.
pub const ENROLLMENT_KEY: &str = "ENROLLMENT_DATE";

/// Ordered output columns of one reshaped file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    columns: Vec<OutputColumn>,
}

impl OutputSpec {
    pub fn new(columns: Vec<OutputColumn>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[OutputColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Verifies that every source is an input column and every output key is
    /// a catalog field.
    pub fn check(&self, schema: &Schema, catalog: &FieldCatalog) -> Result<()> {
        for column in &self.columns {
            catalog.require(column.key())?;
            for source in column.sources() {
                if !schema.contains(source) {
                    return Err(ModelError::FieldNotInSchema {
                        schema: schema.name().to_string(),
                        key: source.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Input keys that no output column reads, in schema order without repeats.
    pub fn dropped_fields(&self, schema: &Schema) -> Vec<&'static str> {
        let read: Vec<&'static str> = self
            .columns
            .iter()
            .flat_map(OutputColumn::sources)
            .collect();
        let mut dropped = Vec::new();
        for field in schema.fields() {
            if !read.contains(&field.key) && !dropped.contains(&field.key) {
                dropped.push(field.key);
            }
        }
        dropped
    }
}
