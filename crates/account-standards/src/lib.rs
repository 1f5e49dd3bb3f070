#![deny(unsafe_code)]

//! Declarative standards for the ACCOuNT data files: the field catalog, the
//! expected column layout of each treatment arm and the layout of its
//! reshaped output.

pub mod arms;
pub mod descriptions;
pub mod error;
pub mod fields;

pub use crate::arms::{ArmStandard, load_arm, load_arms};
pub use crate::descriptions::{Descriptions, load_descriptions};
pub use crate::error::{Result, StandardsError};
pub use crate::fields::{FIELDS, load_default_catalog};
