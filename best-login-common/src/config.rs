//! Application configuration
//!
//! The UI reads an optional JSON document at startup; every field has a
//! default so a partial document only overrides what it names.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Storage key holding the theme preference
    pub theme_storage_key: String,
    pub latency: LatencyRange,
    pub confetti: ConfettiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_string(),
            latency: LatencyRange::default(),
            confetti: ConfettiConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(input)?;
        config.latency.validate()?;
        Ok(config)
    }
}

/// Simulated round-trip latency bounds, half-open `[min_ms, max_ms)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self {
            min_ms: 500,
            max_ms: 1500,
        }
    }
}

impl LatencyRange {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ms >= self.max_ms {
            return Err(ConfigError::InvalidLatency {
                min_ms: self.min_ms,
                max_ms: self.max_ms,
            });
        }
        Ok(())
    }

    /// Pick a delay inside the range.
    ///
    /// A degenerate range yields `min_ms`.
    pub fn sample(&self, rng: &mut fastrand::Rng) -> Duration {
        let millis = if self.min_ms < self.max_ms {
            rng.u64(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        Duration::from_millis(millis)
    }

    pub fn contains(&self, delay: Duration) -> bool {
        let millis = delay.as_millis();
        millis >= u128::from(self.min_ms) && millis < u128::from(self.max_ms)
    }
}

/// Success page confetti settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    /// Delay before the burst starts
    pub delay_ms: u32,
    pub radius: f64,
    pub count: usize,
    pub colors: Vec<String>,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            radius: 6.0,
            count: 150,
            colors: [
                "#ff6b6b", "#4ecdc4", "#45b7d1", "#96ceb4", "#ffeaa7", "#dda0dd", "#f39c12",
                "#e74c3c", "#9b59b6",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}
