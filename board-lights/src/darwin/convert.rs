//! Conversion from Darwin DTOs to raw board rows.
//!
//! No validation happens here. Missing fields become empty strings and are
//! rejected, row by row, when the board is classified.

use crate::domain::{DepartureStatus, RawService};

use super::types::{ServiceItem, StationBoard};

/// Convert a departure board response to raw rows, in board order.
///
/// Only train services are shown; bus and ferry replacements are ignored.
pub fn convert_station_board(board: &StationBoard) -> Vec<RawService> {
    board
        .train_services
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(convert_service_item)
        .collect()
}

/// Convert a single service item.
///
/// A service flagged `isCancelled` is reported as cancelled whatever its
/// `etd` says.
pub fn convert_service_item(item: &ServiceItem) -> RawService {
    let estimated_time = if item.is_cancelled == Some(true) {
        DepartureStatus::Cancelled.to_string()
    } else {
        item.etd.clone().unwrap_or_default()
    };

    RawService {
        scheduled_time: item.std.clone().unwrap_or_default(),
        estimated_time,
        operator_name: item.operator.clone().unwrap_or_default(),
    }
}
