//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "display": { "groupSeparator": " " }
//! }
//! ```
//! Keys this crate does not manage are preserved on save.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_GROUP_SEPARATOR;

/// Environment variable overriding the configured group separator
pub const GROUP_SEPARATOR_ENV: &str = "IBAN_GROUP_SEPARATOR";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    display: DisplaySettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisplaySettings {
    #[serde(default = "default_group_separator")]
    group_separator: String,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
            other: HashMap::new(),
        }
    }
}

fn default_group_separator() -> String {
    DEFAULT_GROUP_SEPARATOR.to_string()
}

/// Application configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Separator placed between groups of four when displaying an IBAN
    pub group_separator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing or malformed settings file yields the defaults. The
    /// separator can be overridden with `IBAN_GROUP_SEPARATOR`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_with(data_dir, std::env::var(GROUP_SEPARATOR_ENV).ok())
    }

    /// Load config from the data directory with an explicit separator
    /// override in place of the environment
    pub fn load_with(data_dir: &Path, separator_override: Option<String>) -> Result<Self> {
        let raw = read_settings(data_dir)?;
        let group_separator =
            resolve_group_separator(separator_override, raw.display.group_separator);

        Ok(Self { group_separator })
    }

    /// Save config to the data directory
    /// Preserves settings this crate doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let mut settings = read_settings(data_dir)?;
        settings.display.group_separator = self.group_separator.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)
            .with_context(|| format!("Failed to write {}", settings_path.display()))?;
        Ok(())
    }

    /// Replace the group separator
    pub fn set_group_separator(&mut self, separator: impl Into<String>) {
        self.group_separator = separator.into();
    }
}

fn read_settings(data_dir: &Path) -> Result<SettingsFile> {
    let settings_path = data_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }

    let content = std::fs::read_to_string(&settings_path)
        .with_context(|| format!("Failed to read {}", settings_path.display()))?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

fn resolve_group_separator(env_value: Option<String>, file_value: String) -> String {
    env_value.unwrap_or(file_value)
}
