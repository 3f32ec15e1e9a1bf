//! `marble.toml`: where bars come from and how the chart is dressed.
//!
//! Every section and key is optional:
//!
//! ```toml
//! [service]
//! base_url = "https://api.polygon.io"
//! api_key_env = "POLYGON_API_KEY"   # name of the variable, never the key
//! limit = 5000
//! multiplier = 1
//!
//! [chart]
//! use_dummy_trades = true
//!
//! [palette]
//! bullish = "#22c55e"
//! bearish = "#ef4444"
//! ```

use std::path::{Path, PathBuf};

use aggregates_client::sources::{
    SourceError,
    rest::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_LIMIT, RestSource},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::palette::Palette;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarbleConfig {
    pub service: ServiceCfg,
    pub chart: ChartCfg,
    pub palette: Palette,
}

/// Connection settings for the aggregates REST endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceCfg {
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Page size.
    pub limit: u32,
    /// Timespan units per bar.
    pub multiplier: u32,
}

impl Default for ServiceCfg {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            limit: DEFAULT_LIMIT,
            multiplier: 1,
        }
    }
}

impl ServiceCfg {
    /// A REST source for these settings. Fails if the key variable is unset.
    pub fn rest_source(&self) -> Result<RestSource, SourceError> {
        Ok(RestSource::from_env(&self.base_url, &self.api_key_env)?
            .with_limit(self.limit)
            .with_multiplier(self.multiplier))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartCfg {
    /// Plot illustrative trades when none are supplied.
    pub use_dummy_trades: bool,
}

impl Default for ChartCfg {
    fn default() -> Self {
        Self {
            use_dummy_trades: true,
        }
    }
}

/// Parses a config from TOML text.
pub fn load_config_str(s: &str) -> Result<MarbleConfig, ConfigError> {
    Ok(toml::from_str(s)?)
}

/// Reads and parses a config file.
pub fn load_config_path(path: impl AsRef<Path>) -> Result<MarbleConfig, ConfigError> {
    let path = path.as_ref();
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_str(&s)
}
