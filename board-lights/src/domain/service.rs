//! Departure board rows, raw and parsed.

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::time::{TimeError, parse_hhmm};

/// A single row of a departure board, exactly as the board reported it.
///
/// The strings are not validated. `estimated_time` is one of `"On time"`,
/// `"Delayed"`, `"Cancelled"` or an "HH:MM" estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawService {
    pub scheduled_time: String,
    pub estimated_time: String,
    pub operator_name: String,
}

impl RawService {
    /// Create a raw service row.
    pub fn new(
        scheduled_time: impl Into<String>,
        estimated_time: impl Into<String>,
        operator_name: impl Into<String>,
    ) -> Self {
        Self {
            scheduled_time: scheduled_time.into(),
            estimated_time: estimated_time.into(),
            operator_name: operator_name.into(),
        }
    }
}

/// Error returned when a board row cannot be understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The scheduled departure is not an "HH:MM" time
    #[error("scheduled time {value:?}: {source}")]
    ScheduledTime { value: String, source: TimeError },

    /// The estimate is neither a known status nor an "HH:MM" time
    #[error("estimated time {value:?}: {source}")]
    EstimatedTime { value: String, source: TimeError },
}

/// What the board says about a train's departure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartureStatus {
    OnTime,
    /// Late, with no estimate given.
    Delayed,
    Cancelled,
    /// Running to a revised estimated departure time.
    Expected(NaiveTime),
}

impl DepartureStatus {
    /// Parse Darwin's `etd` field.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_lights::domain::DepartureStatus;
    ///
    /// assert_eq!(DepartureStatus::parse("On time").unwrap(), DepartureStatus::OnTime);
    /// assert!(matches!(DepartureStatus::parse("10:15"), Ok(DepartureStatus::Expected(_))));
    /// assert!(DepartureStatus::parse("No report").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        match s {
            "On time" => Ok(Self::OnTime),
            "Delayed" => Ok(Self::Delayed),
            "Cancelled" => Ok(Self::Cancelled),
            other => parse_hhmm(other)
                .map(Self::Expected)
                .map_err(|source| ParseError::EstimatedTime {
                    value: other.to_string(),
                    source,
                }),
        }
    }
}

impl fmt::Display for DepartureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTime => f.write_str("On time"),
            Self::Delayed => f.write_str("Delayed"),
            Self::Cancelled => f.write_str("Cancelled"),
            Self::Expected(t) => write!(f, "{}", t.format("%H:%M")),
        }
    }
}

/// A board row with its times and status resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Departure {
    pub scheduled: NaiveTime,
    pub status: DepartureStatus,
}

impl Departure {
    /// Parse a raw board row.
    ///
    /// The scheduled time is checked first, so a row with two bad fields
    /// reports the scheduled one.
    pub fn parse(raw: &RawService) -> Result<Self, ParseError> {
        let scheduled =
            parse_hhmm(&raw.scheduled_time).map_err(|source| ParseError::ScheduledTime {
                value: raw.scheduled_time.clone(),
                source,
            })?;
        let status = DepartureStatus::parse(&raw.estimated_time)?;
        Ok(Self { scheduled, status })
    }
}

impl TryFrom<&RawService> for Departure {
    type Error = ParseError;

    fn try_from(raw: &RawService) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}
