//! Password policy sections
//!
//! Each section checks one rule of the strong-password policy.

mod length;
mod repeats;
mod variety;

pub use length::length_section;
pub use repeats::repeat_section;
pub use variety::character_variety_section;

use secrecy::SecretString;

/// Result type for section check functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<String>;

/// Signature shared by every section.
pub type Section = fn(&SecretString) -> SectionResult;

/// Sections in evaluation order.
pub const SECTIONS: [(&str, Section); 3] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("repeats", repeat_section),
];

/// Runs every section and collects the reasons of the ones that fail.
pub fn policy_violations(password: &SecretString) -> Vec<String> {
    SECTIONS
        .iter()
        .filter_map(|(_, section)| section(password))
        .collect()
}

/// Returns `true` if the password satisfies every rule of the policy.
pub fn is_strong_password(password: &SecretString) -> bool {
    SECTIONS.iter().all(|(_, section)| section(password).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_strong_password_has_no_violations() {
        let pwd = secret("aB5cD6");
        assert!(is_strong_password(&pwd));
        assert!(policy_violations(&pwd).is_empty());
    }

    #[test]
    fn test_violations_follow_section_order() {
        let violations = policy_violations(&secret("aaa"));
        assert_eq!(violations.len(), 3);
        assert!(violations[0].contains("at least 6"));
        assert!(violations[1].contains("Missing"));
        assert!(violations[2].contains("repeat"));
    }

    #[test]
    fn test_empty_password_is_not_strong() {
        let pwd = secret("");
        assert!(!is_strong_password(&pwd));
        assert_eq!(policy_violations(&pwd).len(), 2);
    }
}
