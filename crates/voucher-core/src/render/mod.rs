pub mod pdf;
mod template;

use crate::model::VoucherFields;

/// Render the voucher HTML for one booking by substituting every template
/// field into its `{{placeholder}}`. Values are HTML-escaped; the template
/// itself carries no logic.
pub fn render_voucher(fields: &VoucherFields) -> String {
    let mut html = template::VOUCHER_TEMPLATE.to_string();
    for (key, value) in fields.entries() {
        let placeholder = format!("{{{{{key}}}}}");
        html = html.replace(&placeholder, &escape_html(value));
    }
    html
}

/// Minimal HTML escape, sufficient for both text nodes and quoted attributes.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::resolve_fields_at;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn sample_fields() -> VoucherFields {
        let mut data = BTreeMap::new();
        data.insert("confirmation_number".to_string(), "HTL-1001".to_string());
        data.insert("hotel_name".to_string(), "Seaside Resort & Spa".to_string());
        resolve_fields_at(&data, NaiveDate::from_ymd_opt(2026, 8, 28).unwrap())
    }

    #[test]
    fn test_all_placeholders_substituted() {
        let html = render_voucher(&sample_fields());
        assert!(!html.contains("{{"), "unsubstituted placeholder left in HTML");
        assert!(!html.contains("}}"));
    }

    #[test]
    fn test_values_appear_in_output() {
        let html = render_voucher(&sample_fields());
        assert!(html.contains("HTL-1001"));
        assert!(html.contains("Seaside Resort &amp; Spa"));
    }

    #[test]
    fn test_defaults_appear_in_output() {
        let html = render_voucher(&sample_fields());
        assert!(html.contains("LGT India"));
        assert!(html.contains("28-Aug-2026"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(escape_html(r#""quoted""#), "&quot;quoted&quot;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_markup_in_values_is_inert() {
        let mut fields = sample_fields();
        fields.inclusions = "<script>alert(1)</script>".to_string();
        let html = render_voucher(&fields);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
