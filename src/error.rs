//! Error types for strict checking.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Invalid character {character:?} at position {position}: only ASCII letters and digits are allowed")]
    InvalidCharacter { character: char, position: usize },
}
