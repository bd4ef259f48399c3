//! Character variety section - checks for lowercase, uppercase and digits.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::analyzer::analyze;

/// Checks if the password contains every required character class.
///
/// # Returns
/// - `Some(reason)` if missing required character types
/// - `None` if all character types are present
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let counts = analyze(password.expose_secret()).counts;

    let missing: Vec<_> = vec![
        if counts.lowercase == 0 { Some("lowercase") } else { None },
        if counts.uppercase == 0 { Some("uppercase") } else { None },
        if counts.digit == 0 { Some("numbers") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();

    if !missing.is_empty() {
        return Some(format!("Missing: {}", missing.join(", ")));
    }
    None
}
