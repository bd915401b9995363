/// Normalize a spreadsheet column name to a canonical lookup key.
///
/// Lowercase; each space and hyphen becomes an underscore. Other characters
/// pass through unchanged, so e.g. `Hotel Contact No.` stays
/// `hotel_contact_no.` rather than being stripped.
pub fn normalize_key(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(normalize_key("HOTEL NAME"), "hotel_name");
    }

    #[test]
    fn test_spaces_become_underscores() {
        assert_eq!(normalize_key("Confirmation Number"), "confirmation_number");
    }

    #[test]
    fn test_hyphens_become_underscores() {
        assert_eq!(normalize_key("Check-in Date"), "check_in_date");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(normalize_key("Check-out  Date"), "check_out__date");
    }

    #[test]
    fn test_other_characters_preserved() {
        assert_eq!(normalize_key("No. of Rooms"), "no._of_rooms");
    }

    #[test]
    fn test_already_normalized_is_identity() {
        assert_eq!(normalize_key("hotel_name"), "hotel_name");
    }
}
