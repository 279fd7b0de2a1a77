//! Application configuration.
//!
//! Configuration is an optional TOML file; every field has a default so the
//! engine runs with no file at all.
//!
//! ```toml
//! data_path = "data/appointments.csv"
//!
//! [risk_bands]
//! high = 0.5
//! moderate = 0.2
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "invalid risk bands: high={high}, moderate={moderate} \
         (thresholds must lie in [0, 1] with high >= moderate)"
    )]
    InvalidRiskBands { high: f64, moderate: f64 },
}

/// Probability thresholds for the High/Moderate/Low risk bands. Bounds are
/// exclusive: a probability must exceed a threshold to enter its band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskBands {
    pub high: f64,
    pub moderate: f64,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            high: 0.5,
            moderate: 0.2,
        }
    }
}

impl RiskBands {
    pub fn validate(&self) -> ConfigResult<()> {
        let in_range = |v: f64| (0.0..=1.0).contains(&v);
        if !in_range(self.high) || !in_range(self.moderate) || self.high < self.moderate {
            return Err(ConfigError::InvalidRiskBands {
                high: self.high,
                moderate: self.moderate,
            });
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Appointments CSV to load when the caller does not name one.
    pub data_path: PathBuf,
    /// Risk-band thresholds for the estimate readout.
    pub risk_bands: RiskBands,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/appointments.csv"),
            risk_bands: RiskBands::default(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.risk_bands.validate()?;
        Ok(config)
    }

    /// Load from a file when one is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
