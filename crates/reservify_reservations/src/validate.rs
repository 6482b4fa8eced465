// File: crates/reservify_reservations/src/validate.rs
use crate::error::ReservationError;

/// Returns the trimmed value, or `MissingField` when it is absent or blank.
pub fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, ReservationError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ReservationError::MissingField(field))
}

/// Accepts `local@domain.tld` without whitespace. Dotless domains such as
/// `localhost` are rejected.
pub fn validate_email(email: &str) -> Result<(), ReservationError> {
    let invalid = || ReservationError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid());
    }
    Ok(())
}
