use std::collections::HashMap;

use crate::error::{ModelError, Result};
use crate::field::FieldDef;

/// Immutable lookup over an ordered table of field definitions.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    fields: Vec<FieldDef>,
    by_key: HashMap<&'static str, usize>,
}

impl FieldCatalog {
    /// Indexes the table, rejecting duplicate keys.
    pub fn new(fields: &[FieldDef]) -> Result<Self> {
        let mut by_key = HashMap::with_capacity(fields.len());
        for (index, field) in fields.iter().enumerate() {
            if by_key.insert(field.key, index).is_some() {
                return Err(ModelError::DuplicateField {
                    key: field.key.to_string(),
                });
            }
        }
        Ok(Self {
            fields: fields.to_vec(),
            by_key,
        })
    }

    pub fn get(&self, key: &str) -> Option<&FieldDef> {
        self.by_key.get(key).map(|&index| &self.fields[index])
    }

    pub fn require(&self, key: &str) -> Result<&FieldDef> {
        self.get(key).ok_or_else(|| ModelError::UnknownField {
            key: key.to_string(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Fields whose format has not been reviewed.
    pub fn unvalidated(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|field| field.is_unvalidated())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::FormatRule;

    #[test]
    fn rejects_duplicate_keys() {
        let fields = [
            FieldDef::new("BMI", "BMI", FormatRule::Decimal),
            FieldDef::new("BMI", "Body mass", FormatRule::Decimal),
        ];
        assert_eq!(
            FieldCatalog::new(&fields).unwrap_err(),
            ModelError::DuplicateField {
                key: "BMI".to_string()
            }
        );
    }

    #[test]
    fn looks_up_by_key() {
        let fields = [
            FieldDef::new("NOTES", "Notes", FormatRule::FreeText),
            FieldDef::new("LAST_DOSE", "Last dose", FormatRule::Unvalidated),
        ];
        let catalog = FieldCatalog::new(&fields).expect("catalog");
        assert_eq!(catalog.require("NOTES").expect("notes").display_name, "Notes");
        assert!(catalog.get("MISSING").is_none());
        let unvalidated: Vec<_> = catalog.unvalidated().map(|field| field.key).collect();
        assert_eq!(unvalidated, vec!["LAST_DOSE"]);
    }
}
