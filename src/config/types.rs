//! Configuration type definitions

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::DuplicateCheck;
use crate::error::CatalogResult;

use super::loader::{self, ConfigWarning};

/// Report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Length of the "n most" lists
    #[serde(default = "default_top")]
    pub top: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

fn default_top() -> u32 {
    3
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub const VALID_VALUES: [&'static str; 2] = ["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Interactive prompt configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// How often a rejected contact is re-asked before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

/// Catalog behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub duplicate_check: DuplicateCheck,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub prompt: PromptConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Load configuration from a TOML file, logging unknown keys
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let (config, warnings) = loader::load_with_warnings(path)?;
        warnings.iter().for_each(ConfigWarning::log);
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CatalogResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// environment overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (TOMERATER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides_from(self, |key| std::env::var(key).ok())
    }
}
