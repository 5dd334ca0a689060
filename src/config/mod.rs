//! Configuration module for srcnav
//!
//! Holds the backend location, the tags known for the project, widget
//! timings and key overrides. Stored in the user's config directory and
//! overridable from `SRCNAV_*` environment variables.

use crate::keybinds::{DEFAULT_SCROLL_STEP, KeyBindingConfig};
use crate::locate::{DEFAULT_FADE, DEFAULT_SCROLL_OFFSET, LineLocator};
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

const ENV_PREFIX: &str = "SRCNAV";

/// Autocomplete timings and limits
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AutocompleteSettings {
    /// Debounce for the symbol input
    pub symbol_defer_ms: u64,
    /// Debounce for the file input
    pub file_defer_ms: u64,
    /// Suggestions kept by the file input
    pub file_lookup_limit: usize,
    /// Characters typed before the file input queries
    pub file_min_chars: usize,
}

impl Default for AutocompleteSettings {
    fn default() -> Self {
        Self {
            symbol_defer_ms: 200,
            file_defer_ms: 10,
            file_lookup_limit: 100,
            file_min_chars: 1,
        }
    }
}

/// Scrolling and line-jump behaviour
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NavigationSettings {
    /// Fraction of the viewport scrolled by `j`/`k`
    pub scroll_step_fraction: f64,
    /// Pixels left above a line after jumping to it
    pub line_scroll_offset: f64,
    /// Line highlight fade-out
    pub highlight_fade_ms: u64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            scroll_step_fraction: DEFAULT_SCROLL_STEP,
            line_scroll_offset: DEFAULT_SCROLL_OFFSET,
            highlight_fade_ms: u64::try_from(DEFAULT_FADE.as_millis()).unwrap_or(2000),
        }
    }
}

impl NavigationSettings {
    /// Line locator using these settings
    #[must_use]
    pub const fn locator(&self) -> LineLocator {
        LineLocator::new(
            self.line_scroll_offset,
            Duration::from_millis(self.highlight_fade_ms),
        )
    }
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SrcnavConfig {
    /// Base URL of the code browser
    #[serde(default = "default_server")]
    pub server: String,

    /// Tag queries go to
    #[serde(default)]
    pub tag: String,

    /// Project name shown in the tag picker
    #[serde(default)]
    pub project: Option<String>,

    /// Every tag the project has been indexed under
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub autocomplete: AutocompleteSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,

    /// Key overrides, by action id
    #[serde(default)]
    pub keys: KeyBindingConfig,
}

fn default_server() -> String {
    "http://localhost:9000/".to_string()
}

impl Default for SrcnavConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            tag: String::new(),
            project: None,
            tags: Vec::new(),
            autocomplete: AutocompleteSettings::default(),
            navigation: NavigationSettings::default(),
            keys: KeyBindingConfig::default(),
        }
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("tags")
        .try_parsing(true)
}

impl SrcnavConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("srcnav").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it
    /// doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating a default file there if
    /// it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        if !path.exists() {
            Self::default().save_to(path)?;
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .add_source(env)
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Parsed server URL
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if `server` is not a valid URL.
    pub fn server_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keybinds::KeybindDef;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env() -> Environment {
        environment().source(Some(HashMap::new()))
    }

    #[test]
    fn test_default_config() {
        let config = SrcnavConfig::default();
        assert_eq!(config.autocomplete.symbol_defer_ms, 200);
        assert_eq!(config.navigation.line_scroll_offset, 70.0);
        assert_eq!(config.navigation.highlight_fade_ms, 2000);
        assert!(config.tags.is_empty());
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = SrcnavConfig::load_with(&path, no_env()).unwrap();
        assert!(path.exists());
        assert_eq!(config, SrcnavConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = SrcnavConfig {
            tag: "v2".into(),
            project: Some("kernel".into()),
            tags: vec!["v1".into(), "v2".into()],
            ..SrcnavConfig::default()
        };
        config
            .keys
            .keybinds
            .insert("goto_line".into(), KeybindDef::Single("l".into()));
        config.save_to(&path).unwrap();

        let loaded = SrcnavConfig::load_with(&path, no_env()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tag = \"v3\"\n[autocomplete]\nfile_defer_ms = 50\n").unwrap();

        let config = SrcnavConfig::load_with(&path, no_env()).unwrap();
        assert_eq!(config.tag, "v3");
        assert_eq!(config.autocomplete.file_defer_ms, 50);
        assert_eq!(config.autocomplete.symbol_defer_ms, 200);
        assert_eq!(config.server, "http://localhost:9000/");
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tag = \"v1\"\n").unwrap();

        let env = HashMap::from([
            ("SRCNAV_TAG".to_string(), "v9".to_string()),
            ("SRCNAV_TAGS".to_string(), "v1,v9".to_string()),
        ]);
        let config = SrcnavConfig::load_with(&path, environment().source(Some(env))).unwrap();
        assert_eq!(config.tag, "v9");
        assert_eq!(config.tags, vec!["v1".to_string(), "v9".to_string()]);
    }

    #[test]
    fn test_invalid_server_url() {
        let config = SrcnavConfig {
            server: "not a url".into(),
            ..SrcnavConfig::default()
        };
        assert!(config.server_url().is_err());
    }
}
