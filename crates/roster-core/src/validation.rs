//! Client-side field validation for the user creation form
//!
//! These checks only drive the form's hints and the submit button. The
//! backend remains the authority on what it accepts.

use std::sync::LazyLock;

use regex::Regex;

/// Minimum character count for every free-text creation field
pub const MIN_FIELD_LEN: usize = 3;

/// `local@domain.tld`: no whitespace anywhere, exactly one `@`, and a dot
/// somewhere after it with text on both sides.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid EMAIL_PATTERN regex")
});

/// Check an email address against the creation form's pattern
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check a free-text field against [`MIN_FIELD_LEN`] (counted in characters)
pub fn meets_min_length(value: &str) -> bool {
    value.chars().count() >= MIN_FIELD_LEN
}
