//! Repeat section - detects runs of three or more identical characters.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::analyzer::analyze;
use crate::estimator::MAX_RUN;

/// Checks the password for runs of identical consecutive characters.
///
/// # Returns
/// - `Some(reason)` if some run is too long
/// - `None` if every run is shorter than three characters
pub fn repeat_section(password: &SecretString) -> SectionResult {
    let runs = analyze(password.expose_secret()).runs;
    let longest = runs.iter().copied().max().unwrap_or(0);
    if longest >= MAX_RUN {
        return Some(format!(
            "Password repeats a character {} times in a row",
            longest
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_section_three_in_a_row() {
        let pwd = SecretString::new("abcDDDef".to_string().into());
        assert_eq!(
            repeat_section(&pwd),
            Some("Password repeats a character 3 times in a row".to_string())
        );
    }

    #[test]
    fn test_repeat_section_reports_longest_run() {
        let pwd = SecretString::new("aaaaBBB1".to_string().into());
        let result = repeat_section(&pwd);
        assert!(matches!(result, Some(ref r) if r.contains("4 times")));
    }

    #[test]
    fn test_repeat_section_pairs_are_fine() {
        let pwd = SecretString::new("aaBB11cc".to_string().into());
        assert_eq!(repeat_section(&pwd), None);
    }

    #[test]
    fn test_repeat_section_empty() {
        let pwd = SecretString::new(String::new().into());
        assert_eq!(repeat_section(&pwd), None);
    }
}
