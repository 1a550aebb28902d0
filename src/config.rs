//! @ai:module:intent Configuration structs for the metrics report
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportConfig, PathConfig, DiscoveryConfig, TableConfig, ChartConfig
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::metrics::MIN_APPROACHES;
use anyhow::Context;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "benchmark.toml";

/// @ai:intent Main configuration for report generation
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub chart: ChartConfig,
}

/// @ai:intent Output locations
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

/// @ai:intent How run documents are found inside an approach directory
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Regex matched against file names
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

/// @ai:intent Comparison table constraints
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_min_approaches")]
    pub min_approaches: usize,
}

/// @ai:intent Chart image parameters
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            results_dir: default_results_dir(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            file_pattern: default_file_pattern(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_approaches: default_min_approaches(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            font_family: default_font_family(),
        }
    }
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_file_pattern() -> String {
    r"^metrics_.*\.json$".to_string()
}

fn default_min_approaches() -> usize {
    MIN_APPROACHES
}

fn default_width() -> u32 {
    1200
}

fn default_height() -> u32 {
    700
}

fn default_font_family() -> String {
    "sans-serif".to_string()
}

impl ReportConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// @ai:intent Load the given file, else `benchmark.toml` if present, else defaults
    /// @ai:effects fs:read
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);

                if default_path.exists() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Reject values the pipeline cannot work with
    /// @ai:effects pure
    pub fn validate(&self) -> Result<()> {
        if self.table.min_approaches < MIN_APPROACHES {
            return Err(Error::Config(format!(
                "table.min_approaches must be at least {}, got {}",
                MIN_APPROACHES, self.table.min_approaches
            )));
        }

        if self.chart.width == 0 || self.chart.height == 0 {
            return Err(Error::Config("chart dimensions must be non-zero".to_string()));
        }

        self.discovery.pattern()?;
        Ok(())
    }
}

impl DiscoveryConfig {
    /// @ai:intent Compiled file name pattern
    /// @ai:effects pure
    pub fn pattern(&self) -> Result<Regex> {
        Regex::new(&self.file_pattern).map_err(|e| {
            Error::Config(format!("invalid discovery.file_pattern '{}': {}", self.file_pattern, e))
        })
    }
}
