use crate::error::{RentalError, Result};
use crate::store::{BundledSource, DataSource, JsonFileSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Upper bound for any simulated latency
pub const MAX_LATENCY_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub latency: LatencyConfig,
}

/// Where listings and the sample profile come from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub listings: Option<PathBuf>,
    pub profile: Option<PathBuf>,
}

/// Artificial delay per operation, in milliseconds, emulating a remote API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LatencyConfig {
    pub list_all_ms: u64,
    pub get_by_id_ms: u64,
    pub filter_ms: u64,
    pub recommend_ms: u64,
    pub profile_ms: u64,
    pub compare_ms: u64,
    pub routes_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            list_all_ms: 200,
            get_by_id_ms: 100,
            filter_ms: 200,
            recommend_ms: 300,
            profile_ms: 100,
            compare_ms: 400,
            routes_ms: 300,
        }
    }
}

impl LatencyConfig {
    /// No artificial delay at all
    pub fn none() -> Self {
        Self {
            list_all_ms: 0,
            get_by_id_ms: 0,
            filter_ms: 0,
            recommend_ms: 0,
            profile_ms: 0,
            compare_ms: 0,
            routes_ms: 0,
        }
    }

    fn entries(&self) -> [(&'static str, u64); 7] {
        [
            ("list_all_ms", self.list_all_ms),
            ("get_by_id_ms", self.get_by_id_ms),
            ("filter_ms", self.filter_ms),
            ("recommend_ms", self.recommend_ms),
            ("profile_ms", self.profile_ms),
            ("compare_ms", self.compare_ms),
            ("routes_ms", self.routes_ms),
        ]
    }
}

/// Sleep for the given number of milliseconds, skipping the timer for zero
pub async fn simulate_latency(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| RentalError::config(format!("TOML parsing error: {}", e)))
    }

    /// Load from an optional path, using defaults when none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, ms) in self.latency.entries() {
            if ms > MAX_LATENCY_MS {
                return Err(RentalError::config(format!(
                    "latency.{} is {} ms, maximum is {} ms",
                    name, ms, MAX_LATENCY_MS
                )));
            }
        }
        Ok(())
    }

    /// Data source described by the `[data]` section
    pub fn data_source(&self) -> Box<dyn DataSource> {
        if self.data.listings.is_none() && self.data.profile.is_none() {
            Box::new(BundledSource)
        } else {
            Box::new(JsonFileSource::new(
                self.data.listings.clone(),
                self.data.profile.clone(),
            ))
        }
    }
}
