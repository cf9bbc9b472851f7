use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::har::{FailureFilter, DEFAULT_FAILURE_STATUS, DEFAULT_SNIPPET_CHARS};

/// Global configuration loaded from `~/.config/hartriage/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// Lowest response status reported as a failure.
    pub min_failure_status: u16,
    /// Response bodies longer than this many characters are truncated.
    pub max_snippet_chars: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            min_failure_status: DEFAULT_FAILURE_STATUS,
            max_snippet_chars: DEFAULT_SNIPPET_CHARS,
        }
    }
}

impl TriageConfig {
    pub fn failure_filter(&self) -> FailureFilter {
        FailureFilter {
            min_status: self.min_failure_status,
            max_snippet_chars: self.max_snippet_chars,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hartriage")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TriageConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, writing the defaults there first if it is absent.
pub fn load_or_init_at(path: &Path) -> Result<TriageConfig> {
    if !path.exists() {
        let default_cfg = TriageConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::debug!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load configuration from an explicit file. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<TriageConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: TriageConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
