pub mod archive;
pub mod error;
pub mod fields;
pub mod model;
pub mod render;
pub mod sheet;

use chrono::Local;

use error::VoucherError;
use model::{ParsedSheet, RowRecord};

/// Main API entry point for uploads: parse spreadsheet bytes into normalized
/// booking records.
///
/// The filename is checked for a spreadsheet extension before any bytes are
/// read. Column names are normalized (lowercase, spaces/hyphens to
/// underscores) and absent cells become empty strings; the original header
/// list is kept for display.
pub fn parse_spreadsheet(bytes: &[u8], filename: &str) -> Result<ParsedSheet, VoucherError> {
    sheet::check_extension(filename)?;
    sheet::parse_workbook(bytes)
}

/// Main API entry point for generation: render one PDF voucher per record
/// and bundle them into a single ZIP archive.
///
/// Records are processed strictly in the order given; entry names carry the
/// 1-based batch position. Any rendering or conversion failure aborts the
/// whole batch with no partial archive.
pub fn generate_archive(records: &[RowRecord]) -> Result<Vec<u8>, VoucherError> {
    let mut entries = Vec::with_capacity(records.len());

    for (i, record) in records.iter().enumerate() {
        let fields = fields::resolve_fields(&record.data);
        let html = render::render_voucher(&fields);
        let pdf = render::pdf::html_to_pdf(&html)?;
        let name = archive::voucher_filename(i + 1, &fields.confirmation_number);
        entries.push((name, pdf));
    }

    archive::build_archive(&entries)
}

/// Download name for one generated archive: `hotel_vouchers_{YYYYMMDD_HHMMSS}.zip`.
pub fn archive_filename() -> String {
    format!("hotel_vouchers_{}.zip", Local::now().format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_filename_shape() {
        let name = archive_filename();
        assert!(name.starts_with("hotel_vouchers_"));
        assert!(name.ends_with(".zip"));
        // hotel_vouchers_ + YYYYMMDD_HHMMSS + .zip
        assert_eq!(name.len(), "hotel_vouchers_".len() + 15 + ".zip".len());
    }
}
