//! CLI library components for the ACCOuNT data validator.

pub mod analysis;
pub mod logging;
pub mod pipeline;
pub mod types;
