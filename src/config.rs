//! Configuration management for the to-do TUI.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the API endpoint, request timeout, default filter and logging.

use crate::filter::StatusFilter;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Public to-do API used when no base URL is configured.
pub const DEFAULT_API_BASE_URL: &str =
    "https://mate-academy.github.io/react_dynamic-list-of-todos/api";

const APP_DIR: &str = "todo-tui";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the to-do API (serves `todos.json` and `users/{id}.json`)
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Status filter applied on startup
    pub default_filter: StatusFilter,
    /// Log file path (relative to config dir or absolute)
    pub log_file: String,
    /// Default tracing filter directive, overridden by `RUST_LOG`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 15,
            default_filter: StatusFilter::All,
            log_file: "todo-tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/todo-tui/config.jsonc`
    /// 3. `~/.config/todo-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/todo-tui/config.jsonc` or `~/.config/todo-tui/config.jsonc`
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Details
    /// If log_file is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_file);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            Ok(app_config_dir()?.join(log_path))
        }
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let dir = config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
    Ok(dir.join(APP_DIR))
}

/// Strip `//` comments that are not inside a string literal.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let bytes = line.as_bytes();
            for (i, &b) in bytes.iter().enumerate() {
                match b {
                    _ if escaped => escaped = false,
                    b'\\' if in_string => escaped = true,
                    b'"' => in_string = !in_string,
                    b'/' if !in_string && bytes.get(i + 1) == Some(&b'/') => {
                        return line[..i].trim_end();
                    }
                    _ => {}
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.default_filter, StatusFilter::All);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
    }

    #[test]
    fn test_config_missing_file_gives_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("nope.jsonc"))).unwrap();
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            api_base_url: "http://localhost:8080/api".to_string(),
            default_filter: StatusFilter::Completed,
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_base_url, "http://localhost:8080/api");
        assert_eq!(loaded.default_filter, StatusFilter::Completed);
    }

    #[test]
    fn test_config_jsonc_with_comments_and_urls() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Where the to-dos come from
            "api_base_url": "https://example.com/api", // trailing comment
            "default_filter": "active",
            "request_timeout_secs": 5
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_base_url, "https://example.com/api");
        assert_eq!(loaded.default_filter, StatusFilter::Active);
        assert_eq!(loaded.request_timeout_secs, 5);
        assert_eq!(loaded.log_file, "todo-tui.log");
    }

    #[test]
    fn test_config_rejects_unknown_filter() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");
        fs::write(&config_path, r#"{"default_filter": "someday"}"#).unwrap();
        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_log_file_path_absolute() {
        let config = Config {
            log_file: "/tmp/todo-tui-test.log".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.log_file_path().unwrap(),
            PathBuf::from("/tmp/todo-tui-test.log")
        );
    }
}
