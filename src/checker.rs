//! Password checker - entry points tying the analyzer, estimator and sections together.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::analyzer::analyze;
use crate::error::PolicyError;
use crate::estimator::estimate_profile;
use crate::sections::SECTIONS;

/// Outcome of a full password check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCheck {
    /// Minimum number of changes, `None` if the check was cancelled.
    pub changes: Option<usize>,
    /// Reasons reported by the failing policy sections.
    pub reasons: Vec<String>,
}

impl PasswordCheck {
    pub fn is_strong(&self) -> bool {
        self.changes == Some(0)
    }
}

/// Returns the minimum number of changes needed to make `password` strong.
///
/// Characters outside letters and digits are accepted: they count toward no
/// character class but still form runs.
pub fn strong_password_checker(password: &str) -> usize {
    estimate_profile(&analyze(password))
}

/// Same as [`strong_password_checker`] for a secret password.
pub fn min_changes(password: &SecretString) -> usize {
    strong_password_checker(password.expose_secret())
}

/// Like [`min_changes`], but rejects anything other than ASCII letters and digits.
///
/// # Errors
///
/// Returns `PolicyError::InvalidCharacter` for the first offending character.
pub fn min_changes_strict(password: &SecretString) -> Result<usize, PolicyError> {
    let pwd = password.expose_secret();
    if let Some((position, character)) = pwd
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_alphanumeric())
    {
        #[cfg(feature = "tracing")]
        tracing::error!("Rejected password: invalid character at position {}", position);
        return Err(PolicyError::InvalidCharacter {
            character,
            position,
        });
    }
    Ok(strong_password_checker(pwd))
}

/// Checks the password against every policy section and computes the
/// minimum number of changes.
///
/// # Arguments
/// * `password` - The password to check
/// * `token` - Optional cancellation token (async feature only)
pub fn check_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordCheck {
    let mut reasons = Vec::new();

    for (section_name, section_fn) in SECTIONS {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::info!("Password check cancelled before section: {}", section_name);
                    reasons.push("Evaluation cancelled".to_string());
                    return PasswordCheck {
                        changes: None,
                        reasons,
                    };
                }
            }
        }

        if let Some(reason) = section_fn(password) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Section {} failed", section_name);
            reasons.push(reason);
        }
    }

    PasswordCheck {
        changes: Some(min_changes(password)),
        reasons,
    }
}

/// Async version that sends the check result via channel.
#[cfg(feature = "async")]
pub async fn check_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordCheck>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("password check is about to start...");

    let check = check_password(password, Some(token));

    if let Err(e) = tx.send(check).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password check result: {}", e);
    }
}
