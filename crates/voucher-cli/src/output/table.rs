use voucher_core::fields::resolve_fields;
use voucher_core::model::ParsedSheet;

/// Human-readable summary of a parsed sheet: the original columns, then one
/// line per record with the key fields as they would resolve on the voucher.
pub fn format_parsed(parsed: &ParsedSheet) -> String {
    let mut out = String::new();

    out.push_str(&format!("Columns: {}\n", parsed.columns.join(", ")));
    out.push_str(&format!("{} booking record(s)\n\n", parsed.records.len()));

    if parsed.records.is_empty() {
        return out;
    }

    let max_conf = parsed
        .records
        .iter()
        .map(|r| resolve_fields(&r.data).confirmation_number.len())
        .max()
        .unwrap_or(12);

    for record in &parsed.records {
        let fields = resolve_fields(&record.data);
        out.push_str(&format!(
            "  {:>3}  {:<width$}  {}  ({} -> {})\n",
            record.row_number,
            fields.confirmation_number,
            fields.hotel_name,
            fields.check_in_date,
            fields.check_out_date,
            width = max_conf,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use voucher_core::model::{ParsedSheet, RowRecord};

    #[test]
    fn test_format_lists_columns_and_rows() {
        let mut data = BTreeMap::new();
        data.insert("confirmation_number".to_string(), "HTL-1001".to_string());
        data.insert("hotel_name".to_string(), "Seaside Resort".to_string());

        let parsed = ParsedSheet {
            records: vec![RowRecord {
                row_number: 1,
                data,
            }],
            columns: vec!["Confirmation Number".to_string(), "Hotel Name".to_string()],
        };

        let out = format_parsed(&parsed);
        assert!(out.contains("Columns: Confirmation Number, Hotel Name"));
        assert!(out.contains("1 booking record(s)"));
        assert!(out.contains("HTL-1001"));
        assert!(out.contains("Seaside Resort"));
    }

    #[test]
    fn test_empty_sheet() {
        let out = format_parsed(&ParsedSheet::default());
        assert!(out.contains("0 booking record(s)"));
    }
}
