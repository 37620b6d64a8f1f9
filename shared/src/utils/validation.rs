//! Identifier validation utilities
//!
//! Doctors and patients log in with an email address, admins with a
//! username. The controller layer validates inbound identifiers with these
//! helpers before handing them to the core.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("invalid email regex")
});

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z][a-zA-Z0-9_.-]{2,31}$").expect("invalid username regex")
});

/// Check if a string is a well-formed email address
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Check if a string is a well-formed admin username
///
/// Usernames start with a letter and are 3 to 32 characters long.
pub fn is_valid_username(value: &str) -> bool {
    USERNAME_REGEX.is_match(value)
}

/// Check if a string is acceptable as a login identifier (either form)
pub fn is_valid_identifier(value: &str) -> bool {
    is_valid_email(value) || is_valid_username(value)
}

/// Check if a string is not empty after trimming
pub fn not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Check if a string length is within bounds
pub fn length_between(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("doctor@clinic.example.com"));
        assert!(is_valid_email("jane.doe+test@mail.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_usernames() {
        assert!(is_valid_username("admin"));
        assert!(is_valid_username("front_desk-01"));
        assert!(!is_valid_username("ab"));
        assert!(!is_valid_username("1admin"));
        assert!(!is_valid_username(""));
    }

    #[test]
    fn test_identifier_accepts_both_forms() {
        assert!(is_valid_identifier("patient@clinic.example.com"));
        assert!(is_valid_identifier("admin"));
        assert!(!is_valid_identifier("!!"));
    }

    #[test]
    fn test_length_between() {
        assert!(length_between("secret", 3, 10));
        assert!(!length_between("ab", 3, 10));
        assert!(!length_between("aaaaaaaaaaaa", 3, 10));
    }
}
