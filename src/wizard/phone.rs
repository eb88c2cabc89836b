use crate::models::member::options::{COUNTRY_CODES, DEFAULT_COUNTRY_CODE};

/// Join a dialling code and a typed number into the stored form `+<code><digits>`.
/// Anything but digits is dropped from the number; no digits means no phone.
pub fn compose_phone(code: &str, number: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }
    let code = code.trim();
    let code = if COUNTRY_CODES.iter().any(|c| c.code == code) {
        code
    } else {
        DEFAULT_COUNTRY_CODE
    };
    format!("{code}{digits}")
}

/// Split a stored phone back into (code, number) for re-display.
/// The longest matching known code wins; unknown prefixes keep the default code.
pub fn split_phone(value: &str) -> (String, String) {
    let value = value.trim();
    let best = COUNTRY_CODES
        .iter()
        .filter(|c| value.starts_with(c.code))
        .max_by_key(|c| c.code.len());
    match best {
        Some(c) => (c.code.to_string(), value[c.code.len()..].to_string()),
        None => (DEFAULT_COUNTRY_CODE.to_string(), value.to_string()),
    }
}
