//! Catalog Script Files
//!
//! Reads a [`CatalogScript`] from disk. The format follows the extension:
//! `.json`, `.yaml`/`.yml`, anything else is read as TOML.

use std::fs;
use std::path::Path;

use crate::application::CatalogScript;
use crate::error::{CatalogError, CatalogResult};

/// Supported script encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptFormat {
    Toml,
    Json,
    Yaml,
}

impl ScriptFormat {
    /// Pick the format from a file extension, TOML by default
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => ScriptFormat::Json,
            Some("yaml") | Some("yml") => ScriptFormat::Yaml,
            _ => ScriptFormat::Toml,
        }
    }
}

/// Load and parse a catalog script
pub fn load_script(path: &Path) -> CatalogResult<CatalogScript> {
    let content = fs::read_to_string(path)?;
    let format = ScriptFormat::from_path(path);
    tracing::debug!(file = %path.display(), ?format, "loading catalog script");
    parse_script(&content, format).map_err(|message| CatalogError::Script {
        file: path.to_path_buf(),
        message,
    })
}

/// Parse script text in the given format
pub fn parse_script(content: &str, format: ScriptFormat) -> Result<CatalogScript, String> {
    match format {
        ScriptFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        ScriptFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        ScriptFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
    }
}
