use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One normalized booking row from an uploaded spreadsheet.
///
/// Keys are normalized column names (lowercase, spaces/hyphens replaced by
/// underscores); values are the cell contents as strings, with absent cells
/// mapped to the empty string. `row_number` is the 1-based position of the
/// row in the sheet and is preserved for display and file numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRecord {
    pub row_number: usize,
    pub data: BTreeMap<String, String>,
}

/// The result of parsing one spreadsheet: normalized records in sheet order,
/// plus the original (un-normalized) column headers for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSheet {
    pub records: Vec<RowRecord>,
    pub columns: Vec<String>,
}

/// The 17 fixed voucher template fields.
///
/// Every field is always populated after resolution; absence in the source
/// row is replaced by a per-field default (see `fields::resolve_fields`).
/// Holding them as struct members rather than a map makes that invariant
/// hold by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherFields {
    pub date_voucher_issued: String,
    pub confirmation_number: String,
    pub hotel_name: String,
    pub address: String,
    pub map_location: String,
    pub hotel_contact_no: String,
    pub lead_passenger_name: String,
    pub room_type: String,
    pub inclusions: String,
    pub no_of_rooms: String,
    pub no_of_adults: String,
    pub no_of_children: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub duration: String,
    pub cancellation_policy: String,
    pub booked_and_payable_by: String,
}

impl VoucherFields {
    /// All fields as (template placeholder name, value) pairs, in the order
    /// they appear on the voucher.
    pub fn entries(&self) -> [(&'static str, &str); 17] {
        [
            ("date_voucher_issued", &self.date_voucher_issued),
            ("confirmation_number", &self.confirmation_number),
            ("hotel_name", &self.hotel_name),
            ("address", &self.address),
            ("map_location", &self.map_location),
            ("hotel_contact_no", &self.hotel_contact_no),
            ("lead_passenger_name", &self.lead_passenger_name),
            ("room_type", &self.room_type),
            ("inclusions", &self.inclusions),
            ("no_of_rooms", &self.no_of_rooms),
            ("no_of_adults", &self.no_of_adults),
            ("no_of_children", &self.no_of_children),
            ("check_in_date", &self.check_in_date),
            ("check_out_date", &self.check_out_date),
            ("duration", &self.duration),
            ("cancellation_policy", &self.cancellation_policy),
            ("booked_and_payable_by", &self.booked_and_payable_by),
        ]
    }
}
