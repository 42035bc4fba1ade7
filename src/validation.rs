// Field validators shared by every record constructor and mutator.
// Pure functions: each returns the accepted value or a `RecordError::Validation`
// naming the violated rule. Nothing here reads or writes record state.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::config;
use crate::models::RecordError;

/// Keys every address map must carry, in rendering order.
pub const ADDRESS_KEYS: [&str; 5] = ["street", "city", "state", "postal_code", "country"];

/// Keys every emergency contact map must carry.
pub const EMERGENCY_CONTACT_KEYS: [&str; 2] = ["name", "tel_number"];

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Address or contact map as supplied by callers.
pub type FieldMap = BTreeMap<String, String>;

/// Validate a structured address.
///
/// Fails if any of street, city, state, postal_code, country is missing or empty.
/// Extra keys are kept; the map is returned unchanged.
pub fn validate_address(address: FieldMap) -> Result<FieldMap, RecordError> {
    require_keys(&address, &ADDRESS_KEYS, "Address")?;
    Ok(address)
}

/// Validate an emergency contact: `name` and `tel_number`, both non-empty.
pub fn validate_emergency_contact(contact: FieldMap) -> Result<FieldMap, RecordError> {
    require_keys(&contact, &EMERGENCY_CONTACT_KEYS, "Emergency contact")?;
    Ok(contact)
}

/// Validate that `n` is an integer >= 0 (and fits a u32 count).
pub fn validate_non_negative_int(n: i64) -> Result<u32, RecordError> {
    u32::try_from(n).map_err(|_| {
        RecordError::validation(format!("Value must be a non-negative integer, got {n}"))
    })
}

/// Validate that `d` is not after the current date.
pub fn validate_past_or_today(d: NaiveDate) -> Result<NaiveDate, RecordError> {
    let today = config::today();
    if d > today {
        return Err(RecordError::validation(format!(
            "Date {d} cannot be in the future (today is {today})"
        )));
    }
    Ok(d)
}

/// Validate a required free-text field. Whitespace-only counts as empty.
pub fn validate_non_empty(field: &str, value: &str) -> Result<String, RecordError> {
    if value.trim().is_empty() {
        return Err(RecordError::validation(format!("{field} cannot be empty")));
    }
    Ok(value.to_string())
}

/// Validate the basic shape of an email address (`local@domain.tld`).
pub fn validate_email(value: &str) -> Result<String, RecordError> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(RecordError::validation(format!(
            "Email '{value}' is not a valid address"
        )));
    }
    Ok(value.to_string())
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, config::DATE_FORMAT).map_err(|_| {
        RecordError::validation(format!(
            "{field} '{value}' is not a valid date (expected YYYY-MM-DD)"
        ))
    })
}

fn require_keys(map: &FieldMap, keys: &[&str], what: &str) -> Result<(), RecordError> {
    let missing: Vec<&str> = keys
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect();
    if !missing.is_empty() {
        return Err(RecordError::validation(format!(
            "{what} must include the keys: {}",
            missing.join(", ")
        )));
    }
    if keys.iter().any(|k| map[*k].is_empty()) {
        return Err(RecordError::validation(format!(
            "All {} fields must be non-empty strings",
            what.to_lowercase()
        )));
    }
    Ok(())
}
