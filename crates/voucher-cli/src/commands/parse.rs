use std::path::PathBuf;

use voucher_core::error::VoucherError;

use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
) -> Result<(), VoucherError> {
    let bytes = std::fs::read(&input_file)?;
    let filename = input_file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let parsed = voucher_core::parse_spreadsheet(&bytes, filename)?;

    match output_file {
        Some(path) => {
            // Records only: the file round-trips into `generate` after editing.
            let json = serde_json::to_string_pretty(&parsed.records)?;
            std::fs::write(&path, json)?;
            eprintln!(
                "Parsed {} booking record(s), written to {}",
                parsed.records.len(),
                path.display()
            );
        }
        None => {
            let output_str = match output_format {
                "json" => serde_json::to_string_pretty(&parsed)?,
                _ => output::table::format_parsed(&parsed),
            };
            println!("{output_str}");
        }
    }

    Ok(())
}
