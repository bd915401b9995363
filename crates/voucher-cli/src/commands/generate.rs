use std::path::PathBuf;

use voucher_core::error::VoucherError;
use voucher_core::model::RowRecord;

pub fn run(input_file: PathBuf, out: Option<PathBuf>) -> Result<(), VoucherError> {
    let bytes = std::fs::read(&input_file)?;

    let is_json = input_file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let records: Vec<RowRecord> = if is_json {
        serde_json::from_slice(&bytes)?
    } else {
        let filename = input_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        voucher_core::parse_spreadsheet(&bytes, filename)?.records
    };

    let archive = voucher_core::generate_archive(&records)?;

    let path = out.unwrap_or_else(|| PathBuf::from(voucher_core::archive_filename()));
    std::fs::write(&path, &archive)?;
    eprintln!(
        "Generated {} voucher(s), archive written to {}",
        records.len(),
        path.display()
    );

    Ok(())
}
