use std::fmt;

use serde::Serialize;

/// Spreadsheet column letters for a 1-based column number (1 → A, 27 → AA).
///
/// Column 0 has no letter and yields an empty string.
pub fn column_name(column: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = column;
    while remaining > 0 {
        let offset = (remaining - 1) % 26;
        letters.push(b'A' + offset as u8);
        remaining = (remaining - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// A cell coordinate such as `AB12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellAddress {
    /// 0-based column index.
    pub column: usize,
    /// 1-based line number in the source file.
    pub row: usize,
}

impl CellAddress {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_name(self.column + 1), self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_base_26() {
        assert_eq!(column_name(1), "A");
        assert_eq!(column_name(26), "Z");
        assert_eq!(column_name(27), "AA");
        assert_eq!(column_name(28), "AB");
        assert_eq!(column_name(52), "AZ");
        assert_eq!(column_name(53), "BA");
        assert_eq!(column_name(702), "ZZ");
        assert_eq!(column_name(703), "AAA");
        assert_eq!(column_name(0), "");
    }

    #[test]
    fn address_uses_zero_based_column() {
        assert_eq!(CellAddress::new(0, 2).to_string(), "A2");
        assert_eq!(CellAddress::new(27, 14).to_string(), "AB14");
    }
}
