//! Length section - checks password length is within policy bounds.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::estimator::{MAX_LENGTH, MIN_LENGTH};

/// Checks if the password length is between the policy minimum and maximum.
///
/// # Returns
/// - `Some(reason)` if password is too short or too long
/// - `None` if password length is in range
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    if len < MIN_LENGTH {
        return Some(format!(
            "Password must be at least {} characters",
            MIN_LENGTH
        ));
    }
    if len > MAX_LENGTH {
        return Some(format!(
            "Password must be at most {} characters",
            MAX_LENGTH
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        let pwd = SecretString::new("Shrt1".to_string().into());
        let result = length_section(&pwd);
        assert_eq!(
            result,
            Some("Password must be at least 6 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        let pwd = SecretString::new("123456".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_exactly_maximum() {
        let pwd = SecretString::new("a".repeat(20).into());
        assert_eq!(length_section(&pwd), None);
    }

    #[test]
    fn test_length_section_too_long() {
        let pwd = SecretString::new("a".repeat(21).into());
        assert_eq!(
            length_section(&pwd),
            Some("Password must be at most 20 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_counts_characters() {
        // Six characters, twelve bytes.
        let pwd = SecretString::new("éééééé".to_string().into());
        assert_eq!(length_section(&pwd), None);
    }
}
