//! Field validators.
//!
//! Each validator maps one value to an error message, with an empty string
//! meaning the value is valid. Validators never fail.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{MIN_PASSWORD_LENGTH, MSG_INVALID_EMAIL, MSG_PASSWORD_REQUIRED, MSG_WEAK_PASSWORD};

/// `local@domain.tld`, no whitespace and no extra `@` in any part.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validate email syntax.
///
/// Empty input does not match and yields the format message.
pub fn validate_email(email: &str) -> String {
    if EMAIL_REGEX.is_match(email) {
        String::new()
    } else {
        MSG_INVALID_EMAIL.to_string()
    }
}

/// Validate password strength: at least six characters with a lowercase
/// letter, an uppercase letter and a digit, all on a single line.
pub fn validate_password(password: &str) -> String {
    if password.is_empty() {
        return MSG_PASSWORD_REQUIRED.to_string();
    }

    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let single_line = !password.chars().any(is_line_terminator);

    if long_enough && has_lower && has_upper && has_digit && single_line {
        String::new()
    } else {
        MSG_WEAK_PASSWORD.to_string()
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Validate that `value` has at most `max_length` characters.
pub fn validate_string_length(value: &str, max_length: usize) -> String {
    if value.chars().count() > max_length {
        format!("Must be {} characters or less.", max_length)
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert_eq!(validate_email("a@b.co"), "");
        assert_eq!(validate_email("First.Last@Example.COM"), "");
    }

    #[test]
    fn test_invalid_email() {
        assert_eq!(validate_email("not-an-email"), "Invalid email format");
        assert_eq!(validate_email("a@b"), "Invalid email format");
        assert_eq!(validate_email("a b@c.de"), "Invalid email format");
        assert_eq!(validate_email("a@@b.co"), "Invalid email format");
    }

    #[test]
    fn test_empty_email_is_invalid() {
        assert_eq!(validate_email(""), "Invalid email format");
    }

    #[test]
    fn test_password_required() {
        assert_eq!(validate_password(""), "Password is required.");
    }

    #[test]
    fn test_password_needs_mixed_case() {
        assert_eq!(validate_password("abc123"), MSG_WEAK_PASSWORD);
        assert_eq!(validate_password("ABC123"), MSG_WEAK_PASSWORD);
        assert_eq!(validate_password("Abcdef"), MSG_WEAK_PASSWORD);
    }

    #[test]
    fn test_password_minimum_length() {
        assert_eq!(validate_password("Ab1"), MSG_WEAK_PASSWORD);
        assert_eq!(validate_password("Abc12"), MSG_WEAK_PASSWORD);
        assert_eq!(validate_password("Abc123"), "");
    }

    #[test]
    fn test_password_rejects_line_breaks() {
        assert_eq!(validate_password("Abc\n12"), MSG_WEAK_PASSWORD);
        assert_eq!(validate_password("Abc123\r"), MSG_WEAK_PASSWORD);
        assert_eq!(validate_password("Abc\u{2028}123"), MSG_WEAK_PASSWORD);
        assert_eq!(validate_password("Abc 123"), "");
    }

    #[test]
    fn test_string_length_boundary() {
        assert_eq!(validate_string_length(&"x".repeat(100), 100), "");
        assert_eq!(
            validate_string_length(&"x".repeat(101), 100),
            "Must be 100 characters or less."
        );
        assert_eq!(validate_string_length("", 0), "");
    }

    #[test]
    fn test_string_length_counts_characters() {
        // 100 two-byte characters still fit
        assert_eq!(validate_string_length(&"é".repeat(100), 100), "");
    }
}
