use std::fs;
use std::path::{Path, PathBuf};

use account_ingest::{IngestError, read_data_table, read_site_keys};

fn temp_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_comma_file_keeping_raw_cells_and_ragged_rows() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        dir.path(),
        "clopidogrel.csv",
        "\u{feff}Study ID (PharmGKB ID),Project site,Notes\nPA1,NU, spaced \nPA2,UIC\n",
    );
    let table = read_data_table(&path).expect("read table");
    assert_eq!(
        table.headers,
        vec!["Study ID (PharmGKB ID)", "Project site", "Notes"]
    );
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0], vec!["PA1", "NU", " spaced "]);
    assert_eq!(table.rows[1], vec!["PA2", "UIC"]);
}

#[test]
fn reads_tab_file_with_quoted_commas() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        dir.path(),
        "noac.txt",
        "A\tB\n1\t\"x, y\"\n",
    );
    let table = read_data_table(&path).expect("read table");
    assert_eq!(table.headers, vec!["A", "B"]);
    assert_eq!(table.rows[0], vec!["1", "x, y"]);
}

#[test]
fn empty_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(dir.path(), "empty.csv", "");
    let err = read_data_table(&path).expect_err("empty file");
    assert!(matches!(err, IngestError::EmptyFile { .. }));
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_data_table(&dir.path().join("absent.csv")).expect_err("missing");
    assert!(matches!(err, IngestError::FileRead { .. }));
}

#[test]
fn reads_site_key_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(dir.path(), "site.key", "NU=1\nUIC=2\nUofC=3\n");
    let map = read_site_keys(&path).expect("site keys");
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("UofC"), Some("3"));
}
