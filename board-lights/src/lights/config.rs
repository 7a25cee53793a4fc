//! Display configuration for the light strip.

use chrono::Duration;

use crate::config::ConfigError;

/// Configuration parameters for turning a board into slots.
///
/// Always describes a usable strip: at least one slot, and slots at least
/// one minute wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Number of time slots, one per indicator.
    slot_count: usize,

    /// Width of each time slot (minutes).
    bucket_width_mins: i64,

    /// Bucket index beyond which a train is shown as imminent in slot 0.
    /// Buckets between the last slot and this threshold are dropped.
    far_horizon_buckets: i64,
}

impl DisplayConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        slot_count: usize,
        bucket_width_mins: i64,
        far_horizon_buckets: i64,
    ) -> Result<Self, ConfigError> {
        if slot_count == 0 {
            return Err(ConfigError::InvalidDisplay("slot count must be at least 1"));
        }
        if bucket_width_mins < 1 {
            return Err(ConfigError::InvalidDisplay(
                "bucket width must be at least 1 minute",
            ));
        }
        if far_horizon_buckets < 0 {
            return Err(ConfigError::InvalidDisplay(
                "far horizon must not be negative",
            ));
        }

        Ok(Self {
            slot_count,
            bucket_width_mins,
            far_horizon_buckets,
        })
    }

    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    pub fn bucket_width_mins(&self) -> i64 {
        self.bucket_width_mins
    }

    pub fn far_horizon_buckets(&self) -> i64 {
        self.far_horizon_buckets
    }

    /// Returns the slot width as a Duration.
    pub fn bucket_width(&self) -> Duration {
        Duration::minutes(self.bucket_width_mins)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            slot_count: 8,
            bucket_width_mins: 5,
            far_horizon_buckets: 250,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = DisplayConfig::default();

        assert_eq!(config.slot_count(), 8);
        assert_eq!(config.bucket_width_mins(), 5);
        assert_eq!(config.far_horizon_buckets(), 250);
        assert_eq!(config.bucket_width(), Duration::minutes(5));
    }

    #[test]
    fn custom_config() {
        let config = DisplayConfig::new(12, 10, 100).unwrap();

        assert_eq!(config.slot_count(), 12);
        assert_eq!(config.bucket_width(), Duration::minutes(10));
        assert_eq!(config.far_horizon_buckets(), 100);
    }

    #[test]
    fn zero_horizon_allowed() {
        assert!(DisplayConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn rejects_unusable_strips() {
        assert_eq!(
            DisplayConfig::new(0, 5, 250),
            Err(ConfigError::InvalidDisplay("slot count must be at least 1"))
        );
        assert_eq!(
            DisplayConfig::new(8, 0, 250),
            Err(ConfigError::InvalidDisplay(
                "bucket width must be at least 1 minute"
            ))
        );
        assert!(DisplayConfig::new(8, -5, 250).is_err());
        assert_eq!(
            DisplayConfig::new(8, 5, -1),
            Err(ConfigError::InvalidDisplay("far horizon must not be negative"))
        );
    }
}
