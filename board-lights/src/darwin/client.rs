//! Darwin LDB HTTP client.
//!
//! Fetches the departure board for a station, filtered to trains calling
//! at a destination.

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::domain::{Crs, RawService};

use super::BoardSource;
use super::convert::convert_station_board;
use super::error::DarwinError;
use super::types::StationBoard;

/// Default base URL for Darwin LDB API.
pub const DEFAULT_BASE_URL: &str =
    "https://api1.raildata.org.uk/1010-live-departure-board-dep-with-details/LDBWS";

/// Default number of board rows requested.
const DEFAULT_NUM_ROWS: u8 = 20;

/// Configuration for the Darwin client.
#[derive(Debug, Clone)]
pub struct DarwinConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the API (defaults to production Darwin)
    pub base_url: String,
    /// Number of services to request (max 150)
    pub num_rows: u8,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DarwinConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            num_rows: DEFAULT_NUM_ROWS,
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the number of rows requested.
    pub fn with_num_rows(mut self, n: u8) -> Self {
        self.num_rows = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Darwin LDB API client.
#[derive(Debug, Clone)]
pub struct DarwinClient {
    http: reqwest::Client,
    base_url: String,
    num_rows: u8,
}

impl DarwinClient {
    /// Create a new Darwin client with the given configuration.
    pub fn new(config: DarwinConfig) -> Result<Self, DarwinError> {
        let mut headers = HeaderMap::new();

        // Darwin uses "x-apikey" for authentication
        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| DarwinError::InvalidApiKey)?;
        headers.insert("x-apikey", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            num_rows: config.num_rows,
        })
    }

    /// Get the departure board at `crs`, filtered to services calling at
    /// `filter_crs`.
    pub async fn get_departures_to(
        &self,
        crs: &Crs,
        filter_crs: &Crs,
    ) -> Result<StationBoard, DarwinError> {
        let url = format!(
            "{}/api/20220120/GetDepBoardWithDetails/{}",
            self.base_url.trim_end_matches('/'),
            crs.as_str()
        );

        debug!(%url, filter = %filter_crs, rows = self.num_rows, "Requesting departure board");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("numRows", self.num_rows.to_string()),
                ("filterCrs", filter_crs.as_str().to_string()),
                ("filterType", "to".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DarwinError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DarwinError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DarwinError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| DarwinError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

/// Log the parts of a board that are not rows.
pub(super) fn log_board(board: &StationBoard) {
    let rows = board.train_services.as_ref().map_or(0, Vec::len);
    info!(
        station = %board.location_name,
        filter = board.filter_location_name.as_deref().unwrap_or("-"),
        generated_at = board.generated_at.as_deref().unwrap_or("-"),
        rows,
        "Fetched departure board"
    );
    if board.are_services_available == Some(false) {
        info!(station = %board.location_name, "Board reports no services available");
    }
    for message in board.nrcc_messages.iter().flatten() {
        if let Some(text) = &message.value {
            info!(message = %text, "Service message");
        }
    }
}

impl BoardSource for DarwinClient {
    async fn fetch_board(
        &self,
        departure: &Crs,
        destination: &Crs,
    ) -> Result<Vec<RawService>, DarwinError> {
        let board = self.get_departures_to(departure, destination).await?;
        log_board(&board);
        Ok(convert_station_board(&board))
    }
}
