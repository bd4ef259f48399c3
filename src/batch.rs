//! Batch checking module
//!
//! Loads a list of passwords from a text file and checks each one.

use std::path::{Path, PathBuf};

use secrecy::SecretString;
use thiserror::Error;

use crate::checker::min_changes;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Password file is empty")]
    EmptyFile,
}

/// Returns the password file path.
///
/// Priority:
/// 1. Environment variable `PWD_BATCH_PATH`
/// 2. Default path `./assets/passwords.txt`
pub fn get_batch_path() -> PathBuf {
    std::env::var("PWD_BATCH_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/passwords.txt"))
}

/// Loads passwords from a file, one per line.
///
/// Blank lines are skipped and a trailing `\r` is dropped. Any other
/// whitespace is part of the password.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File has no passwords
pub fn load_passwords_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SecretString>, BatchError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Password file loading FAILED: FileNotFound {:?}", path);
        return Err(BatchError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    let passwords: Vec<SecretString> = content
        .lines()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
        .map(|l| SecretString::new(l.to_string().into()))
        .collect();

    if passwords.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Password file loading FAILED: Empty file {:?}", path);
        return Err(BatchError::EmptyFile);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Loaded {} passwords from {:?}", passwords.len(), path);

    Ok(passwords)
}

/// Checks every password in the given file.
///
/// Returns the minimum number of changes for each password, in file order.
///
/// # Example
///
/// ```rust,ignore
/// let changes = pwd_fixer::check_batch_from_path("/tmp/passwords.txt")?;
/// ```
pub fn check_batch_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<usize>, BatchError> {
    let passwords = load_passwords_from_path(path)?;
    Ok(passwords.iter().map(min_changes).collect())
}

/// Checks every password in the file named by `PWD_BATCH_PATH`.
///
/// # Environment Variable
///
/// Set `PWD_BATCH_PATH` to specify the file location.
/// If not set, defaults to `./assets/passwords.txt`.
pub fn check_batch() -> Result<Vec<usize>, BatchError> {
    check_batch_from_path(get_batch_path())
}
