//! Severity levels for a time slot.

use serde::{Serialize, Serializer};

/// How a slot should be shown, in ascending order of priority.
///
/// When more than one train lands in the same slot, the greatest severity
/// wins. The order is deliberately "best news wins": a slot with one on-time
/// train and one cancelled train shows as on time, because there is still a
/// train to catch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// No train in this slot.
    #[default]
    None = 0,
    Cancelled = 1,
    /// Delayed with no estimate.
    UnspecifiedDelay = 2,
    /// Running late to a known estimate.
    Late = 3,
    OnTime = 4,
    /// Leaving now, or just left.
    Imminent = 5,
}

impl Severity {
    /// All levels, lowest first.
    pub const ALL: [Severity; 6] = [
        Severity::None,
        Severity::Cancelled,
        Severity::UnspecifiedDelay,
        Severity::Late,
        Severity::OnTime,
        Severity::Imminent,
    ];

    /// Numeric level, 0 to 5.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.level())
    }
}
