//! Station code types.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid CRS code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CRS code {input:?}: {reason}")]
pub struct InvalidCrs {
    input: String,
    reason: &'static str,
}

/// A valid 3-letter CRS (Computer Reservation System) station code.
///
/// The departure and destination of a board are both identified this way,
/// e.g. `GTW` for Gatwick Airport and `BTN` for Brighton.
///
/// # Examples
///
/// ```
/// use board_lights::domain::Crs;
///
/// let gtw = Crs::parse("GTW").unwrap();
/// assert_eq!(gtw.as_str(), "GTW");
///
/// assert!(Crs::parse("gtw").is_err());
/// assert!(Crs::parse("GT").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a CRS code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z). Surrounding
    /// whitespace is not trimmed.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let invalid = |reason| InvalidCrs {
            input: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        if bytes.len() != 3 {
            return Err(invalid("must be exactly 3 characters"));
        }
        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(invalid("must be uppercase ASCII letters A-Z"));
        }

        Ok(Crs([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the CRS code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase bytes are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl FromStr for Crs {
    type Err = InvalidCrs;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Crs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
