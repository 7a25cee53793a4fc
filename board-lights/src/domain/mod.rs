//! Domain types for departure board rows.
//!
//! Everything the board hands us is a string. This module turns those
//! strings into validated values once, at the edge, so the display logic
//! never re-inspects text.

mod service;
mod station;
mod time;

pub use service::{Departure, DepartureStatus, ParseError, RawService};
pub use station::{Crs, InvalidCrs};
pub use time::{TimeError, next_occurrence, parse_hhmm};
