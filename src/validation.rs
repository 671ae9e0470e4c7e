//! Phone and email syntax checks
//!
//! Both validators are pure. Callers decide what an empty input means.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum number of digits in a normalized phone number
pub const PHONE_MIN_DIGITS: usize = 10;

/// Maximum number of digits in a normalized phone number
pub const PHONE_MAX_DIGITS: usize = 15;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Strip everything but ASCII digits from a phone number
pub fn normalize_phone(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validate a phone number, returning its digit-only form on success
///
/// The digit count after normalization must be between 10 and 15 inclusive.
pub fn validate_phone(raw: &str) -> Option<String> {
    let digits = normalize_phone(raw);
    if (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len()) {
        Some(digits)
    } else {
        None
    }
}

/// Check an email address against a conventional address syntax
pub fn validate_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw)
}
