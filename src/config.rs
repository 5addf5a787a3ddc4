//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::chart::Breakpoints;
use crate::preferences::THEME_KEY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub preferences: PreferencesConfig,

    #[serde(default)]
    pub chart: ChartSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the theme preference lives
#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default = "default_preferences_file")]
    pub file: String,

    #[serde(default = "default_preference_key")]
    pub key: String,
}

fn default_preferences_file() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("adboard").join("preferences.json").to_string_lossy().to_string())
        .unwrap_or_else(|| "./adboard_preferences.json".to_string())
}

fn default_preference_key() -> String {
    THEME_KEY.to_string()
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            file: default_preferences_file(),
            key: default_preference_key(),
        }
    }
}

impl PreferencesConfig {
    /// The preference file path with a leading `~/` expanded
    pub fn resolved_file(&self) -> PathBuf {
        match (self.file.strip_prefix("~/"), dirs::home_dir()) {
            (Some(rest), Some(home)) => home.join(rest),
            _ => PathBuf::from(&self.file),
        }
    }
}

/// Chart responsiveness
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    #[serde(flatten)]
    pub breakpoints: Breakpoints,
}

fn default_debounce_ms() -> u64 {
    250
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            breakpoints: Breakpoints::default(),
        }
    }
}

impl ChartSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("adboard").join("config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(file) = std::env::var("ADBOARD_PREFERENCES_FILE") {
            self.preferences.file = file;
        }
        if let Ok(ms) = std::env::var("ADBOARD_DEBOUNCE_MS") {
            if let Ok(ms) = ms.parse() {
                self.chart.debounce_ms = ms;
            }
        }
        if let Ok(level) = std::env::var("ADBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ADBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Adboard Configuration
#
# Environment variables override these settings:
# - ADBOARD_PREFERENCES_FILE
# - ADBOARD_DEBOUNCE_MS
# - ADBOARD_LOG_LEVEL
# - ADBOARD_LOG_FORMAT

[preferences]
# JSON file standing in for browser local storage
file = "~/.local/share/adboard/preferences.json"

# Key the theme is stored under
key = "theme"

[chart]
# Quiet period before a resize is applied (ms)
debounce_ms = 250

# Viewport widths (px) below which the small and medium layouts apply
small_width = 576.0
medium_width = 768.0

# X-axis tick budget per layout
small_ticks = 5
medium_ticks = 7
large_ticks = 10

# Axis font sizes
small_font = 10
font = 12

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.preferences.key, "theme");
        assert_eq!(config.chart.debounce(), Duration::from_millis(250));
        assert_eq!(config.chart.breakpoints, Breakpoints::default());
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.chart.debounce_ms, 250);
        assert_eq!(config.chart.breakpoints.small_width, 576.0);
        assert_eq!(config.chart.breakpoints.large_ticks, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::parse("[chart]\ndebounce_ms = 100\nsmall_ticks = 4\n").unwrap();
        assert_eq!(config.chart.debounce_ms, 100);
        assert_eq!(config.chart.breakpoints.small_ticks, 4);
        assert_eq!(config.chart.breakpoints.medium_ticks, 7);
        assert_eq!(config.preferences.key, "theme");
    }

    #[test]
    fn test_resolved_file() {
        let prefs = PreferencesConfig {
            file: "/tmp/prefs.json".to_string(),
            key: "theme".to_string(),
        };
        assert_eq!(prefs.resolved_file(), PathBuf::from("/tmp/prefs.json"));

        let prefs = PreferencesConfig {
            file: "~/prefs.json".to_string(),
            ..prefs
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(prefs.resolved_file(), home.join("prefs.json"));
        }
    }

    #[test]
    fn test_load_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(Config::load(&missing), Err(ConfigError::Io { .. })));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[chart\n").unwrap();
        assert!(matches!(Config::load(&bad), Err(ConfigError::Parse { .. })));
    }
}
