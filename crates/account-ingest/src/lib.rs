pub mod data_table;
pub mod error;
pub mod site_keys;

pub use data_table::{DataTable, detect_delimiter, read_data_table};
pub use error::{IngestError, Result};
pub use site_keys::{parse_site_keys, read_site_keys};
