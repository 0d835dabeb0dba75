use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse nav.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Engine configuration from nav.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Tree-view tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Section ids pre-expanded on first run (before any user toggle).
    #[serde(default = "default_expanded_sections")]
    pub default_expanded_sections: Vec<String>,
    /// Item ids pre-expanded on first run.
    #[serde(default = "default_expanded_items")]
    pub default_expanded_items: Vec<String>,
    /// Delay before scrolling the active node into view, in milliseconds.
    /// Lets a just-triggered expansion settle before measuring layout.
    #[serde(default = "default_scroll_delay_ms")]
    pub scroll_delay_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            default_expanded_sections: default_expanded_sections(),
            default_expanded_items: default_expanded_items(),
            scroll_delay_ms: default_scroll_delay_ms(),
        }
    }
}

fn default_expanded_sections() -> Vec<String> {
    vec![
        "documents".to_string(),
        "work-items-section-1".to_string(),
    ]
}

fn default_expanded_items() -> Vec<String> {
    vec!["backlog".to_string(), "sprints".to_string()]
}

fn default_scroll_delay_ms() -> u64 {
    100
}

/// Read nav.toml from the given directory. A missing file yields the
/// defaults; a malformed file is an error.
pub fn load_config(dir: &Path) -> Result<NavConfig, ConfigError> {
    let path = dir.join("nav.toml");
    if !path.exists() {
        return Ok(NavConfig::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}
