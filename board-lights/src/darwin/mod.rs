//! Darwin LDB (Live Departure Boards) client.
//!
//! This module fetches the departure board for a station pair from the
//! National Rail Darwin API, or from local JSON files for offline use.
//!
//! Key characteristics of Darwin:
//! - Times are in "HH:MM" format (UK local time) with no date
//! - `etd` is either a status ("On time", "Delayed", "Cancelled") or a
//!   revised "HH:MM" estimate
//! - Empty boards omit `trainServices` entirely

mod client;
mod convert;
mod error;
mod mock;
mod types;

use std::future::Future;

use crate::domain::{Crs, RawService};

pub use client::{DEFAULT_BASE_URL, DarwinClient, DarwinConfig};
pub use convert::{convert_service_item, convert_station_board};
pub use error::DarwinError;
pub use mock::MockDarwinClient;
pub use types::{NrccMessage, ServiceItem, StationBoard};

/// Something that can supply a departure board.
///
/// This abstraction allows the display to be driven from mock data.
pub trait BoardSource {
    /// Fetch the rows of the board at `departure` for trains calling at
    /// `destination`, in board order.
    fn fetch_board(
        &self,
        departure: &Crs,
        destination: &Crs,
    ) -> impl Future<Output = Result<Vec<RawService>, DarwinError>>;
}
