use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::period::QuickPeriod;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "RUSTY_TICKER_CONFIG";
/// Environment variable overriding `default_period` with a token such as `3M`.
pub const PERIOD_ENV: &str = "RUSTY_TICKER_PERIOD";
/// Config file looked up in the working directory when the variable is unset.
pub const DEFAULT_CONFIG_FILE: &str = "rusty-ticker.json";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// User-tunable display settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Fixed histogram bin count; `None` picks one with Sturges' rule.
    pub histogram_bins: Option<usize>,
    /// Quick period applied right after a file is loaded.
    pub default_period: QuickPeriod,
    /// `k` values for the `±k SD` price bands.
    pub band_multipliers: Vec<f64>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            histogram_bins: None,
            default_period: QuickPeriod::All,
            band_multipliers: vec![1.0, 2.0, 3.0],
        }
    }
}

impl ViewerConfig {
    /// Parse a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: ViewerConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load from `$RUSTY_TICKER_CONFIG`, else `./rusty-ticker.json`, else
    /// defaults, then apply `$RUSTY_TICKER_PERIOD`. A broken file or an
    /// unknown period token is logged and ignored.
    pub fn load() -> Self {
        let period = std::env::var(PERIOD_ENV).ok();
        Self::load_file_or_default().with_period_override(period.as_deref())
    }

    /// Replace `default_period` when `token` names a quick period.
    pub fn with_period_override(mut self, token: Option<&str>) -> Self {
        if let Some(token) = token {
            match token.parse::<QuickPeriod>() {
                Ok(period) => self.default_period = period,
                Err(e) => log::warn!("{e}; keeping {}", self.default_period),
            }
        }
        self
    }

    fn load_file_or_default() -> Self {
        let path = match std::env::var_os(CONFIG_ENV) {
            Some(p) => PathBuf::from(p),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !local.exists() {
                    return Self::default();
                }
                local
            }
        };

        match Self::from_path(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Ignoring config: {e:#}");
                Self::default()
            }
        }
    }
}
