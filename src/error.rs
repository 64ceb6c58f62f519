//! Error types for the kamasutra library.

use std::fmt;

/// Errors produced by the kamasutra library.
///
/// The table build and the transform are total operations; the only fallible
/// surface is parsing the console mode selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KamasutraError {
    /// Mode selector is not a valid choice.
    InvalidMode,
}

impl fmt::Display for KamasutraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KamasutraError::InvalidMode => {
                write!(f, "Mode must be 1 (encrypt) or 2 (decrypt)")
            }
        }
    }
}

impl std::error::Error for KamasutraError {}
