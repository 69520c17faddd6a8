//! Station telecode type.
//!
//! The ticketing service identifies stations in query parameters and
//! raw records by a three-letter telecode ("BJP" for 北京). The
//! bundled dataset and every upstream response use this same form, so
//! the type is strict: three uppercase ASCII letters, nothing else.

use std::fmt;
use std::str::FromStr;

/// Why a string failed to parse as a telecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidTelecode {
    /// Wrong number of characters
    #[error("telecode must be 3 characters, got {0}")]
    Length(usize),

    /// Right length, but not uppercase ASCII letters
    #[error("telecode must be uppercase ASCII letters A-Z")]
    Charset,
}

/// A station telecode: exactly three uppercase ASCII letters.
///
/// Valid by construction; obtain one through [`str::parse`] or
/// [`Telecode::parse`].
///
/// # Examples
///
/// ```
/// use ticket_query::domain::Telecode;
///
/// let beijing: Telecode = "BJP".parse().unwrap();
/// assert_eq!(beijing.as_str(), "BJP");
///
/// assert!("bjp".parse::<Telecode>().is_err());
/// assert!("BJ".parse::<Telecode>().is_err());
/// assert!("BJPX".parse::<Telecode>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Telecode([u8; 3]);

impl Telecode {
    /// Parse a telecode; convenience alias for [`str::parse`].
    pub fn parse(s: &str) -> Result<Self, InvalidTelecode> {
        s.parse()
    }

    /// The telecode as a string slice.
    pub fn as_str(&self) -> &str {
        // Always valid UTF-8: only uppercase ASCII is ever stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl FromStr for Telecode {
    type Err = InvalidTelecode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let count = s.chars().count();
        if count != 3 {
            return Err(InvalidTelecode::Length(count));
        }

        // Three chars but more than three bytes means non-ASCII input
        let code: [u8; 3] = s.as_bytes().try_into().map_err(|_| InvalidTelecode::Charset)?;

        if code.iter().all(u8::is_ascii_uppercase) {
            Ok(Self(code))
        } else {
            Err(InvalidTelecode::Charset)
        }
    }
}

impl fmt::Debug for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Telecode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
