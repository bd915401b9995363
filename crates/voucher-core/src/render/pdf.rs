use std::collections::BTreeMap;

use printpdf::{GeneratePdfOptions, PdfDocument};

use crate::error::VoucherError;

/// Convert rendered voucher HTML into PDF bytes.
///
/// Page geometry (A4, 20mm margins) comes from the template's `@page` rule.
/// Layout warnings are tolerated; only a hard conversion failure is an
/// error, and it aborts the whole batch.
pub fn html_to_pdf(html: &str) -> Result<Vec<u8>, VoucherError> {
    let mut warnings = Vec::new();

    // No external images or fonts are embedded; the template only uses
    // built-in font families.
    let doc = PdfDocument::from_html(
        html,
        &BTreeMap::new(),
        &BTreeMap::new(),
        &GeneratePdfOptions::default(),
        &mut warnings,
    )
    .map_err(|e| VoucherError::Generation(format!("HTML to PDF conversion failed: {e}")))?;

    Ok(doc.save(&Default::default(), &mut warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::resolve_fields_at;
    use crate::render::render_voucher;
    use chrono::NaiveDate;
    use std::collections::BTreeMap as Map;

    #[test]
    fn test_voucher_html_converts_to_pdf() {
        let fields = resolve_fields_at(&Map::new(), NaiveDate::from_ymd_opt(2026, 8, 28).unwrap());
        let html = render_voucher(&fields);
        let pdf = html_to_pdf(&html).unwrap();
        assert!(pdf.starts_with(b"%PDF"), "output does not look like a PDF");
    }
}
