//! Console mode selector.

use crate::error::KamasutraError;

/// Operating mode of the console: encrypt or decrypt.
///
/// Both modes apply the same involutive transform; the distinction exists
/// only for the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Selector `1`.
    Encrypt,
    /// Selector `2`.
    Decrypt,
}

impl Mode {
    /// Parses a console selector: `1` for encrypt, `2` for decrypt.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Parameters
    /// - `input`: One line of console input.
    ///
    /// # Errors
    /// Returns [`KamasutraError::InvalidMode`] for non-numeric input or a
    /// number outside `1..=2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kamasutra::Mode;
    ///
    /// assert_eq!(Mode::parse(" 1 "), Ok(Mode::Encrypt));
    /// assert!(Mode::parse("three").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Mode, KamasutraError> {
        let value: i32 = input
            .trim()
            .parse()
            .map_err(|_| KamasutraError::InvalidMode)?;
        match value {
            1 => Ok(Mode::Encrypt),
            2 => Ok(Mode::Decrypt),
            _ => Err(KamasutraError::InvalidMode),
        }
    }
}
