//! Reduction of a departure board to a strip of coloured slots.
//!
//! Each slot covers a fixed-width window of time, nearest first. Every
//! departure is classified by status, placed in the slot its departure
//! falls in, and each slot keeps the best status of the trains placed in it.
//!
//! Rows that cannot be parsed are logged and skipped; one bad row never
//! stops the rest of the board being shown.

mod classify;
mod config;
mod severity;
mod slots;

pub use classify::{Classification, ClassifiedService, bucket_index, bucketize, classify};
pub use config::DisplayConfig;
pub use severity::Severity;
pub use slots::Slots;

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::domain::{Departure, ParseError, RawService, TimeError};

/// Why a board row was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Classify and place a single board row.
///
/// `Ok(None)` means the row is valid but has no slot on the strip.
pub fn place(
    raw: &RawService,
    now: NaiveDateTime,
    config: &DisplayConfig,
) -> Result<Option<ClassifiedService>, ClassifyError> {
    let departure = Departure::parse(raw)?;
    let classification = classify(&departure, now)?;
    Ok(bucketize(classification, now, config))
}

/// A board reduced to slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSummary {
    /// Every row that was placed, in board order.
    pub classified: Vec<ClassifiedService>,
    pub slots: Slots,
}

/// Reduce a whole board to slots.
pub fn summarise(
    services: &[RawService],
    now: NaiveDateTime,
    config: &DisplayConfig,
) -> BoardSummary {
    let mut classified = Vec::with_capacity(services.len());

    for raw in services {
        match place(raw, now, config) {
            Ok(Some(placed)) => classified.push(placed),
            Ok(None) => {
                debug!(
                    scheduled = %raw.scheduled_time,
                    estimated = %raw.estimated_time,
                    "Departure outside display window"
                );
            }
            Err(e) => {
                warn!(
                    scheduled = %raw.scheduled_time,
                    estimated = %raw.estimated_time,
                    operator = %raw.operator_name,
                    error = %e,
                    "Skipping unparseable departure"
                );
            }
        }
    }

    let slots = Slots::reduce(config.slot_count(), classified.iter().copied());

    debug!(
        rows = services.len(),
        placed = classified.len(),
        "Board summarised"
    );

    BoardSummary { classified, slots }
}
