//! Classification and bucketing of departures.
//!
//! A departure is first classified into a [`Severity`] and the instant used
//! to place it (scheduled time, or the revised estimate for late trains).
//! That instant is then bucketed into a slot relative to "now".

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::{Departure, DepartureStatus, TimeError, next_occurrence};

use super::config::DisplayConfig;
use super::severity::Severity;

/// A departure's severity and the instant it should be placed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub severity: Severity,
    /// Scheduled departure, or the estimate for a late-running train,
    /// pinned to its next occurrence after "now".
    pub reference: NaiveDateTime,
}

/// A departure placed in a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClassifiedService {
    pub slot: usize,
    pub severity: Severity,
}

impl ClassifiedService {
    pub fn new(slot: usize, severity: Severity) -> Self {
        Self { slot, severity }
    }
}

/// Classify a departure relative to `now`.
///
/// Fails only if pinning a time to a date overflows the calendar.
pub fn classify(departure: &Departure, now: NaiveDateTime) -> Result<Classification, TimeError> {
    let scheduled = next_occurrence(departure.scheduled, now)?;

    let (severity, reference) = match departure.status {
        DepartureStatus::OnTime => (Severity::OnTime, scheduled),
        DepartureStatus::Delayed => (Severity::UnspecifiedDelay, scheduled),
        DepartureStatus::Cancelled => (Severity::Cancelled, scheduled),
        DepartureStatus::Expected(estimate) => (Severity::Late, next_occurrence(estimate, now)?),
    };

    Ok(Classification {
        severity,
        reference,
    })
}

/// Number of whole buckets between `now` and `reference`, rounded down.
pub fn bucket_index(reference: NaiveDateTime, now: NaiveDateTime, config: &DisplayConfig) -> i64 {
    let width_secs = config.bucket_width().num_seconds();
    (reference - now).num_seconds().div_euclid(width_secs)
}

/// Place a classified departure on the strip.
///
/// Returns `None` when the departure has no slot:
/// - it falls after the last slot but within the far horizon, or
/// - it is cancelled and outside the slots.
///
/// A departure past the far horizon is shown as [`Severity::Imminent`] in
/// slot 0. Because reference instants are always pinned forward, a train
/// that left moments ago appears almost a full day away, which is what
/// puts it past the horizon.
pub fn bucketize(
    classification: Classification,
    now: NaiveDateTime,
    config: &DisplayConfig,
) -> Option<ClassifiedService> {
    let bucket = bucket_index(classification.reference, now, config);

    if let Ok(slot) = usize::try_from(bucket) {
        if slot < config.slot_count() {
            return Some(ClassifiedService::new(slot, classification.severity));
        }
    }

    if bucket > config.far_horizon_buckets() && classification.severity != Severity::Cancelled {
        return Some(ClassifiedService::new(0, Severity::Imminent));
    }

    None
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use proptest::prelude::*;

    fn severity() -> impl Strategy<Value = Severity> {
        prop::sample::select(Severity::ALL.to_vec())
    }

    proptest! {
        /// A placed departure always lands on the strip
        #[test]
        fn slot_within_strip(secs in 0i64..86_400, sev in severity(), count in 1usize..16) {
            let now = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
            let config = DisplayConfig::new(count, 5, 250).unwrap();
            let c = Classification { severity: sev, reference: now + Duration::seconds(secs) };
            if let Some(placed) = bucketize(c, now, &config) {
                prop_assert!(placed.slot < count);
            }
        }

        /// Cancelled trains are only ever placed at their own slot
        #[test]
        fn cancelled_keeps_severity(secs in 0i64..86_400) {
            let now = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(12, 0, 0).unwrap();
            let c = Classification { severity: Severity::Cancelled, reference: now + Duration::seconds(secs) };
            if let Some(placed) = bucketize(c, now, &DisplayConfig::default()) {
                prop_assert_eq!(placed.severity, Severity::Cancelled);
                prop_assert_eq!(placed.slot as i64, secs / 300);
            }
        }
    }
}
