use chrono::NaiveDate;

/// Validate a required text field with a max length.
pub fn validate_required(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(format!("{field_name} is required"));
    }
    if trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an optional text field with a max length (empty is OK).
pub fn validate_optional(value: &str, field_name: &str, max_len: usize) -> Option<String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().count() > max_len {
        return Some(format!("{field_name} must be at most {max_len} characters"));
    }
    None
}

/// Validate an email: must contain '@' and '.', max 254 chars. Empty is OK.
pub fn validate_optional_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() > 254 {
        return Some("Email must be at most 254 characters".to_string());
    }
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') => None,
        _ => Some("Email must be a valid address".to_string()),
    }
}

/// Login form email: required, same shape rule.
pub fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        return Some("Email is required".to_string());
    }
    validate_optional_email(email)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Validate a `YYYY-MM-DD` date that must not lie after `today`.
pub fn validate_past_date(value: &str, field_name: &str, required: bool, today: NaiveDate) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return required.then(|| format!("{field_name} is required"));
    }
    match parse_date(trimmed) {
        None => Some(format!("{field_name} must be a date (YYYY-MM-DD)")),
        Some(d) if d > today => Some(format!("{field_name} cannot be in the future")),
        Some(_) => None,
    }
}

/// Validate that a value is one of a fixed option list.
pub fn validate_choice(value: &str, field_name: &str, options: &[&str]) -> Option<String> {
    if options.contains(&value.trim()) {
        None
    } else if value.trim().is_empty() {
        Some(format!("{field_name} is required"))
    } else {
        Some(format!("{field_name} has an unknown value '{}'", value.trim()))
    }
}

/// Validate a stored phone value: `+<code><digits>`, 7 to 15 digits in total.
pub fn validate_phone(value: &str, field_name: &str, required: bool) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return required.then(|| format!("{field_name} is required"));
    }
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Some(format!("{field_name} may only contain digits"));
    }
    if !(7..=15).contains(&digits.len()) {
        return Some(format!("{field_name} must have between 7 and 15 digits"));
    }
    None
}
