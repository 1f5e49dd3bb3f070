use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// One arm file: the header record and the raw data records.
///
/// Cells are kept exactly as read, including surrounding whitespace, and
/// records keep their own length so that ragged rows can be reported.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Tab for `.tsv`/`.tab` files or when the header line holds a tab, comma otherwise.
pub fn detect_delimiter(path: &Path, contents: &str) -> u8 {
    let tab_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab"));
    let header_line = contents.lines().next().unwrap_or_default();
    if tab_extension || header_line.contains('\t') {
        b'\t'
    } else {
        b','
    }
}

pub fn read_data_table(path: &Path) -> Result<DataTable> {
    let contents = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let delimiter = detect_delimiter(path, &contents);
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(contents.as_bytes());

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|source| IngestError::Csv {
                path: path.to_path_buf(),
                source,
            })?
            .iter()
            .map(normalize_header)
            .collect(),
        None => {
            return Err(IngestError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
    };

    let mut rows = Vec::new();
    for record in records {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter).escape_default(),
        columns = headers.len(),
        rows = rows.len(),
        "read data table"
    );
    Ok(DataTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalization_strips_bom_and_collapses_spaces() {
        assert_eq!(normalize_header("\u{feff}Study ID  (PharmGKB ID) "), "Study ID (PharmGKB ID)");
    }

    #[test]
    fn delimiter_follows_extension_then_header() {
        assert_eq!(detect_delimiter(Path::new("a.tsv"), "A,B"), b'\t');
        assert_eq!(detect_delimiter(Path::new("a.TAB"), "A,B"), b'\t');
        assert_eq!(detect_delimiter(Path::new("a.csv"), "A\tB\n1,2"), b'\t');
        assert_eq!(detect_delimiter(Path::new("a.csv"), "A,B\n1\t2"), b',');
        assert_eq!(detect_delimiter(Path::new("a.csv"), ""), b',');
    }
}
