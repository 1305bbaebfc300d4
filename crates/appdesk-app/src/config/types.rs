//! Configuration types for appdesk
//!
//! Defines:
//! - `Settings` - Global application settings (`config.toml`)
//! - `Theme` - Colour scheme persisted under the `theme` storage key

use std::path::PathBuf;

use appdesk_api::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};

/// Default export file name
pub const DEFAULT_EXPORT_FILE: &str = "resultats.doc";

/// Colour scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Midnight,
    Light,
}

impl Theme {
    /// Parse a persisted value; anything unrecognised is `Midnight`
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Midnight,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Midnight => "midnight",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Midnight => Theme::Light,
            Theme::Light => Theme::Midnight,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application settings (`<config_dir>/appdesk/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub export: ExportSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Remote API settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Scheme + host (+ optional prefix) of the REST API
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Write the report after every successful refresh
    #[serde(default = "default_true")]
    pub export_on_refresh: bool,

    /// Ask before deleting a record
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            export_on_refresh: true,
            confirm_delete: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Report export settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ExportSettings {
    /// Output directory; defaults to the user's documents directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_export_file")]
    pub file_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_export_file(),
        }
    }
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl ExportSettings {
    /// Configured directory, else documents dir, else the working directory
    pub fn resolve_directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::document_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn resolve_path(&self) -> PathBuf {
        self.resolve_directory().join(&self.file_name)
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme used when storage holds none
    #[serde(default)]
    pub default_theme: Theme,
}
