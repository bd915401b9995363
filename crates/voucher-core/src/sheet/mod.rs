pub mod normalize;

use std::collections::BTreeMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader};

use crate::error::VoucherError;
use crate::model::{ParsedSheet, RowRecord};
use normalize::normalize_key;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls"];

/// Reject non-spreadsheet uploads by extension, before any bytes are parsed.
pub fn check_extension(filename: &str) -> Result<(), VoucherError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some(e) if SPREADSHEET_EXTENSIONS.contains(&e) => Ok(()),
        _ => Err(VoucherError::Parse(format!(
            "file must be a spreadsheet (.xlsx or .xls), got '{filename}'"
        ))),
    }
}

/// Parse spreadsheet bytes into normalized booking records.
///
/// The first row of the first worksheet is taken as the header row; every
/// following row becomes one `RowRecord` tagged with its 1-based position.
/// Absent cells normalize to the empty string. Two columns that collide
/// after key normalization keep the rightmost column's value.
pub fn parse_workbook(bytes: &[u8]) -> Result<ParsedSheet, VoucherError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| VoucherError::Parse(format!("failed to open spreadsheet: {e}")))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| VoucherError::Parse("spreadsheet has no worksheets".into()))?
        .map_err(|e| VoucherError::Parse(format!("failed to read worksheet: {e}")))?;

    let mut rows = range.rows();
    let columns: Vec<String> = match rows.next() {
        Some(header) => header.iter().map(cell_to_string).collect(),
        None => return Ok(ParsedSheet::default()),
    };

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        let mut data = BTreeMap::new();
        for (col, name) in columns.iter().enumerate() {
            let value = row.get(col).map(cell_to_string).unwrap_or_default();
            data.insert(normalize_key(name), value);
        }
        records.push(RowRecord {
            row_number: i + 1,
            data,
        });
    }

    Ok(ParsedSheet { records, columns })
}

/// Convert a cell to its string form; empty/error cells become "".
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_accepts_xlsx_and_xls() {
        assert!(check_extension("bookings.xlsx").is_ok());
        assert!(check_extension("bookings.xls").is_ok());
        assert!(check_extension("BOOKINGS.XLSX").is_ok());
    }

    #[test]
    fn test_extension_rejects_other_files() {
        assert!(check_extension("bookings.txt").is_err());
        assert!(check_extension("bookings.csv").is_err());
        assert!(check_extension("bookings").is_err());
    }

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let err = parse_workbook(b"this is not a spreadsheet").unwrap_err();
        assert!(matches!(err, VoucherError::Parse(_)));
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("HTL-1".into())), "HTL-1");
        assert_eq!(cell_to_string(&Data::Float(2.0)), "2");
        assert_eq!(cell_to_string(&Data::Int(3)), "3");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }
}
