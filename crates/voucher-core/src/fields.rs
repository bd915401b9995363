use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::model::VoucherFields;

/// Resolve a normalized booking row into the 17 voucher template fields.
///
/// For each field the alias keys are tried in priority order; the first
/// alias whose value is non-empty after trimming wins. Fields with no usable
/// alias fall back to a per-field default. Total: every field is always
/// populated, so this has no failure mode.
pub fn resolve_fields(data: &BTreeMap<String, String>) -> VoucherFields {
    resolve_fields_at(data, Local::now().date_naive())
}

/// Same as [`resolve_fields`] but with an injected issue date, so the
/// `date_voucher_issued` default is deterministic under test.
pub fn resolve_fields_at(data: &BTreeMap<String, String>, issued_on: NaiveDate) -> VoucherFields {
    let issued_default = issued_on.format("%d-%b-%Y").to_string();

    VoucherFields {
        date_voucher_issued: resolve(
            data,
            &["date_voucher_issued", "voucher_date", "issue_date", "created_date"],
            &issued_default,
        ),
        confirmation_number: resolve(
            data,
            &["confirmation_number", "booking_id", "confirmation_id", "booking_number"],
            "N/A",
        ),
        hotel_name: resolve(data, &["hotel_name", "hotel", "property_name"], "N/A"),
        address: resolve(data, &["address", "hotel_address", "location"], "N/A"),
        map_location: resolve(
            data,
            &["map_location", "map_link", "google_maps", "location_link"],
            "#",
        ),
        hotel_contact_no: resolve(
            data,
            &["hotel_contact_no", "hotel_phone", "contact_number", "phone"],
            "N/A",
        ),
        lead_passenger_name: resolve(
            data,
            &["lead_passenger_name", "guest_name", "primary_guest", "name"],
            "N/A",
        ),
        room_type: resolve(
            data,
            &["room_type", "room_category", "accommodation_type"],
            "N/A",
        ),
        inclusions: resolve(data, &["inclusions", "amenities", "services_included"], "N/A"),
        no_of_rooms: resolve(data, &["no_of_rooms", "rooms", "room_count"], "0"),
        no_of_adults: resolve(data, &["no_of_adults", "adults", "adult_count"], "0"),
        no_of_children: resolve(
            data,
            &["no_of_children", "children", "child_count", "kids"],
            "0",
        ),
        check_in_date: resolve(
            data,
            &["check_in_date", "checkin_date", "arrival_date", "check_in"],
            "N/A",
        ),
        check_out_date: resolve(
            data,
            &["check_out_date", "checkout_date", "departure_date", "check_out"],
            "N/A",
        ),
        duration: resolve(
            data,
            &["duration", "nights", "stay_duration", "number_of_nights"],
            "N/A",
        ),
        cancellation_policy: resolve(
            data,
            &["cancellation_policy", "cancellation", "policy"],
            "N/A",
        ),
        booked_and_payable_by: resolve(
            data,
            &["booked_and_payable_by", "booked_by", "agency", "company"],
            "LGT India",
        ),
    }
}

/// First alias present with a non-empty trimmed value wins; otherwise the
/// default. A whitespace-only value counts as absent.
fn resolve(data: &BTreeMap<String, String>, aliases: &[&str], default: &str) -> String {
    for alias in aliases {
        if let Some(value) = data.get(*alias) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    default.to_string()
}
