use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::VoucherError;

/// Entry name for one voucher PDF: `voucher_{position}_{confirmation}.pdf`.
///
/// `position` is the 1-based index in the batch, so duplicate confirmation
/// numbers still yield distinct entries. The confirmation component is
/// reduced to filesystem-safe characters; the `"N/A"` default would
/// otherwise put a path separator into the entry name.
pub fn voucher_filename(position: usize, confirmation_number: &str) -> String {
    format!("voucher_{position}_{}.pdf", sanitize(confirmation_number))
}

fn sanitize(s: &str) -> String {
    let cleaned: String = s
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

/// Bundle (entry name, PDF bytes) pairs into one in-memory ZIP archive.
/// Entries are written in the order given, which is the batch order.
pub fn build_archive(entries: &[(String, Vec<u8>)]) -> Result<Vec<u8>, VoucherError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, bytes) in entries {
        zip.start_file(name.as_str(), options)
            .map_err(|e| VoucherError::Generation(format!("failed to add '{name}' to archive: {e}")))?;
        zip.write_all(bytes)
            .map_err(|e| VoucherError::Generation(format!("failed to write '{name}' to archive: {e}")))?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| VoucherError::Generation(format!("failed to finish archive: {e}")))?;

    Ok(cursor.into_inner())
}
