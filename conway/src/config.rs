//! Run settings
//!
//! Everything about a run that can vary lives here and is read once from an
//! optional TOML file. Missing keys fall back to the defaults below.

use crate::error::ConfigError;
use crate::grid::EdgePolicy;
use crate::loader::Symbols;
use crate::render::RenderStyle;
use clap::ValueEnum;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Number of frames shown per run, the loaded grid included.
pub const GENERATION_LIMIT: u32 = 50;

/// Edge policy as spelled in the settings file and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EdgeSetting {
    #[default]
    Wrap,
    Clip,
}

impl From<EdgeSetting> for EdgePolicy {
    fn from(edge: EdgeSetting) -> Self {
        match edge {
            EdgeSetting::Wrap => EdgePolicy::Wrap,
            EdgeSetting::Clip => EdgePolicy::Clip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub edge: EdgeSetting,
    /// Pause between generations, in milliseconds
    pub interval_ms: u64,
    /// Exit on the spot when the grid file is malformed instead of
    /// returning the error to the caller
    pub abort_on_malformed: bool,
    /// Symbols used in grid files
    pub symbols: Symbols,
    /// Console look
    pub style: RenderStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            edge: EdgeSetting::Wrap,
            interval_ms: 100,
            abort_on_malformed: false,
            symbols: Symbols::default(),
            style: RenderStyle::default(),
        }
    }
}

impl Settings {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml(&contents)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");
        Ok(settings)
    }

    pub fn edge_policy(&self) -> EdgePolicy {
        self.edge.into()
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.symbols.live == self.symbols.dead {
            return Err(ConfigError::SameSymbols(self.symbols.live));
        }
        Ok(())
    }
}
