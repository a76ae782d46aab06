//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::DuplicateCheck;
use crate::error::{CatalogError, CatalogResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, OutputFormat};

/// File name of the project-level config
pub const PROJECT_CONFIG_FILE: &str = "tomerater.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl ConfigWarning {
    /// Emit this warning as a `warn` event
    pub fn log(&self) {
        tracing::warn!(
            key = %self.key,
            file = %self.file.display(),
            line = ?self.line,
            suggestion = ?self.suggestion,
            "unknown config key"
        );
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CatalogResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CatalogError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("tomerater/config.toml")));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                warnings.iter().for_each(ConfigWarning::log);
                return config.with_env_overrides();
            }
            Err(err) => {
                tracing::warn!(file = %path.display(), error = %err, "ignoring unreadable config");
            }
        }
    }

    Config::default().with_env_overrides()
}

/// Apply TOMERATER_* overrides read through `lookup`.
///
/// Invalid values keep the current setting and log a warning.
pub fn with_env_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(format) = lookup("TOMERATER_FORMAT") {
        config.output.format = EnvVarValidator::new("TOMERATER_FORMAT", &OutputFormat::VALID_VALUES)
            .parse(&format, |s| s.parse().ok(), config.output.format);
    }

    if let Some(top) = lookup("TOMERATER_TOP") {
        config.report.top = EnvVarValidator::new("TOMERATER_TOP", &["a positive integer"]).parse(
            &top,
            |s| s.trim().parse::<u32>().ok().filter(|n| *n > 0),
            config.report.top,
        );
    }

    if let Some(check) = lookup("TOMERATER_DUPLICATE_CHECK") {
        config.catalog.duplicate_check =
            EnvVarValidator::new("TOMERATER_DUPLICATE_CHECK", &DuplicateCheck::VALID_VALUES)
                .parse(
                    &check,
                    |s| s.parse().ok(),
                    config.catalog.duplicate_check,
                );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "report",
        "top",
        "output",
        "format",
        "prompt",
        "max_attempts",
        "catalog",
        "duplicate_check",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
