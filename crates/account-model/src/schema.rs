use std::collections::HashMap;

use crate::catalog::FieldCatalog;
use crate::error::Result;
use crate::field::FieldDef;

/// Key of the column holding the subject identifier.
pub const SUBJECT_KEY: &str = "STUDY_ID_PHARMGKB_ID";
/// Key of the column holding the raw site code.
pub const SITE_KEY: &str = "PROJECT_SITE";

/// The expected columns of one input file, in order.
///
/// A field may appear more than once (repeating follow-up groups). Each
/// occurrence is addressed by its position among the columns sharing a key.
#[derive(Debug, Clone)]
pub struct Schema {
    name: String,
    fields: Vec<FieldDef>,
    columns: HashMap<&'static str, Vec<usize>>,
    subject_column: usize,
    site_column: usize,
}

impl Schema {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        let mut columns: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (index, field) in fields.iter().enumerate() {
            columns.entry(field.key).or_default().push(index);
        }
        let first = |key: &str, default: usize| {
            columns
                .get(key)
                .and_then(|indexes| indexes.first().copied())
                .unwrap_or(default)
        };
        let subject_column = first(SUBJECT_KEY, 0);
        let site_column = first(SITE_KEY, 1);
        Self {
            name: name.into(),
            fields,
            columns,
            subject_column,
            site_column,
        }
    }

    /// Resolves field keys against the catalog.
    pub fn from_keys(name: impl Into<String>, catalog: &FieldCatalog, keys: &[&str]) -> Result<Self> {
        let fields = keys
            .iter()
            .map(|key| catalog.require(key).copied())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(name, fields))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FieldDef> {
        self.fields.get(index)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.columns.contains_key(key)
    }

    /// Column indexes of every occurrence of `key`, in file order.
    pub fn occurrences(&self, key: &str) -> &[usize] {
        self.columns.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Column index of the `occurrence`-th (0-based) column with `key`.
    pub fn column_of(&self, key: &str, occurrence: usize) -> Option<usize> {
        self.occurrences(key).get(occurrence).copied()
    }

    pub fn subject_column(&self) -> usize {
        self.subject_column
    }

    pub fn site_column(&self) -> usize {
        self.site_column
    }

    /// Display names in column order, as expected in the file header.
    pub fn display_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.display_name)
    }
}
