//! Run configuration sourced from the environment.
//!
//! Station codes and the API key come from environment variables (a `.env`
//! file is loaded first by the binary). Everything is validated before any
//! request is made.

use chrono::NaiveDateTime;

use crate::darwin::DarwinConfig;
use crate::domain::{Crs, InvalidCrs};

/// Departure station CRS code.
pub const DEPARTURE_VAR: &str = "DEPARTURE_CRS_CODE";
/// Destination station CRS code.
pub const DESTINATION_VAR: &str = "DESTINATION_CRS_CODE";
/// Darwin API key.
pub const API_KEY_VAR: &str = "DARWIN_WEBSERVICE_API_KEY";
/// Optional override of the Darwin base URL.
pub const BASE_URL_VAR: &str = "DARWIN_BASE_URL";

/// Errors in the run configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} is not set")]
    Missing(&'static str),

    /// A station variable is not a CRS code
    #[error("{var}: {source}")]
    InvalidStation {
        var: &'static str,
        source: InvalidCrs,
    },

    /// The display parameters cannot describe a strip
    #[error("invalid display configuration: {0}")]
    InvalidDisplay(&'static str),
}

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub departure: Crs,
    pub destination: Crs,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through a variable lookup function.
    ///
    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let station = |var: &'static str| -> Result<Crs, ConfigError> {
            let value = get(var).ok_or(ConfigError::Missing(var))?;
            Crs::parse(value.trim()).map_err(|source| ConfigError::InvalidStation { var, source })
        };

        Ok(Self {
            departure: station(DEPARTURE_VAR)?,
            destination: station(DESTINATION_VAR)?,
            api_key: get(API_KEY_VAR),
            base_url: get(BASE_URL_VAR),
        })
    }

    /// Build the Darwin client configuration. Requires the API key.
    pub fn darwin_config(&self) -> Result<DarwinConfig, ConfigError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let config = DarwinConfig::new(api_key);
        Ok(match &self.base_url {
            Some(url) => config.with_base_url(url),
            None => config,
        })
    }
}

/// Parse a local date-time given as `YYYY-MM-DDTHH:MM` or
/// `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM[:SS]: {e}"))
}
