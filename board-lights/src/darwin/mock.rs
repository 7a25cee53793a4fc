//! Mock Darwin client for running without API access.
//!
//! Loads sample departure boards from JSON files and serves them
//! as if they were live API responses.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{Crs, RawService};

use super::BoardSource;
use super::client::log_board;
use super::convert::convert_station_board;
use super::error::DarwinError;
use super::types::StationBoard;

/// Mock Darwin client that serves boards from JSON files.
#[derive(Debug, Clone)]
pub struct MockDarwinClient {
    /// Pre-loaded station boards, keyed by CRS.
    boards: HashMap<Crs, StationBoard>,
}

impl MockDarwinClient {
    /// Create a new mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{CRS}.json` (e.g., `GTW.json`) holding a
    /// `GetDepBoardWithDetails` response. Other files are ignored.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, DarwinError> {
        let data_dir = data_dir.as_ref();
        let mut boards = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            DarwinError::MockData(format!("failed to read {}: {e}", data_dir.display()))
        })?;

        for entry in entries {
            let path = entry
                .map_err(|e| DarwinError::MockData(format!("failed to read directory entry: {e}")))?
                .path();

            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(crs) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| Crs::parse(s).ok())
            else {
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| {
                DarwinError::MockData(format!("failed to read {}: {e}", path.display()))
            })?;

            let board: StationBoard = serde_json::from_str(&json).map_err(|e| DarwinError::Json {
                message: format!("{}: {e}", path.display()),
                body: None,
            })?;

            boards.insert(crs, board);
        }

        if boards.is_empty() {
            return Err(DarwinError::MockData(format!(
                "no board files found in {}",
                data_dir.display()
            )));
        }

        Ok(Self { boards })
    }

    /// List available stations in the mock data.
    pub fn available_stations(&self) -> Vec<Crs> {
        let mut stations: Vec<Crs> = self.boards.keys().copied().collect();
        stations.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        stations
    }
}

impl BoardSource for MockDarwinClient {
    /// Serve the stored board for `departure`.
    ///
    /// The destination filter is not applied; mock boards are expected to
    /// be pre-filtered.
    async fn fetch_board(
        &self,
        departure: &Crs,
        _destination: &Crs,
    ) -> Result<Vec<RawService>, DarwinError> {
        let board = self.boards.get(departure).ok_or_else(|| {
            DarwinError::MockData(format!(
                "no board for station {departure}. Available: {:?}",
                self.available_stations()
            ))
        })?;

        log_board(board);
        Ok(convert_station_board(board))
    }
}
