//! Strong password change estimation
//!
//! Computes the minimum number of single-character changes (insertions,
//! deletions or substitutions) needed to turn a password into a strong one.
//! A strong password:
//!
//! 1. has between 6 and 20 characters,
//! 2. contains at least one lowercase letter, one uppercase letter and one digit,
//! 3. never repeats the same character three times in a row.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable checks and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BATCH_PATH`: Path to a file of passwords for batch checking
//!   (default: `./assets/passwords.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_fixer::{min_changes, strong_password_checker};
//! use secrecy::SecretString;
//!
//! assert_eq!(strong_password_checker("aaaBCD"), 1);
//!
//! let password = SecretString::new("abcDDDefff6".to_string().into());
//! assert_eq!(min_changes(&password), 2);
//! ```

// Internal modules
mod analyzer;
mod batch;
mod checker;
mod error;
mod estimator;
mod sections;

// Public API
pub use analyzer::{analyze, ClassCounts, PasswordProfile, RunLengths};
pub use batch::{
    check_batch, check_batch_from_path, get_batch_path, load_passwords_from_path, BatchError,
};
pub use checker::{
    check_password, min_changes, min_changes_strict, strong_password_checker, PasswordCheck,
};
pub use error::PolicyError;
pub use estimator::{estimate_changes, estimate_profile, MAX_LENGTH, MAX_RUN, MIN_LENGTH};
pub use sections::{is_strong_password, policy_violations};

#[cfg(feature = "async")]
pub use checker::check_password_tx;
