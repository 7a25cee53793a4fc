//! Darwin API response DTOs.
//!
//! These types map directly to the Darwin LDB JSON API responses. Only the
//! fields the board display reads are declared; serde ignores the rest.
//! They use `Option` liberally because Darwin omits fields rather than
//! sending null values in many cases.

use serde::Deserialize;

/// Response from `GetDepBoardWithDetails`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationBoard {
    /// When this response was generated (ISO 8601 datetime).
    pub generated_at: Option<String>,

    /// Human-readable name of the station.
    pub location_name: String,

    /// Human-readable name of the filter station, when filtered.
    pub filter_location_name: Option<String>,

    /// Train services at this station. Absent when the board is empty.
    pub train_services: Option<Vec<ServiceItem>>,

    /// Whether services are available (false during disruption).
    pub are_services_available: Option<bool>,

    /// Network Rail communication messages.
    pub nrcc_messages: Option<Vec<NrccMessage>>,
}

/// A service on the departure board.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    /// Scheduled time of departure from this station.
    pub std: Option<String>,

    /// Estimated time of departure from this station.
    /// May be "On time", "Delayed", "Cancelled", or a time like "10:15".
    pub etd: Option<String>,

    /// Train operating company name.
    pub operator: Option<String>,

    /// Whether this service is cancelled.
    pub is_cancelled: Option<bool>,
}

/// Network Rail communication message.
#[derive(Debug, Clone, Deserialize)]
pub struct NrccMessage {
    /// The message content (may contain HTML).
    #[serde(rename = "Value")]
    pub value: Option<String>,
}
