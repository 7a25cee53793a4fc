//! Indicator colours.

use std::fmt;

use serde::Serialize;

use crate::lights::Severity;

/// The colours a tri-level RGB indicator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Colour {
    Off,
    Red,
    Blue,
    Yellow,
    Green,
    White,
}

impl Colour {
    /// Channel levels as `(red, green, blue)`, each 0 or 1.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Colour::Off => (0, 0, 0),
            Colour::Red => (1, 0, 0),
            Colour::Blue => (0, 0, 1),
            Colour::Yellow => (1, 1, 0),
            Colour::Green => (0, 1, 0),
            Colour::White => (1, 1, 1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Colour::Off => "Off",
            Colour::Red => "Red",
            Colour::Blue => "Blue",
            Colour::Yellow => "Yellow",
            Colour::Green => "Green",
            Colour::White => "White",
        }
    }
}

impl From<Severity> for Colour {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::None => Colour::Off,
            Severity::Cancelled => Colour::Red,
            Severity::UnspecifiedDelay => Colour::Blue,
            Severity::Late => Colour::Yellow,
            Severity::OnTime => Colour::Green,
            Severity::Imminent => Colour::White,
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
