//! The shell's configuration: defaults, YAML persistence, environment overlay
//! and local document resolution.

use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for window titles, the app menu and the config directory.
pub const APP_NAME: &str = "webview-shell";

/// Default inner width of new windows, in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 800;

/// Default inner height of new windows, in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 600;

/// Location of the bundled page relative to the install directory.
pub const DEFAULT_DOCUMENT: &str = "app/index.html";

/// Environment variable selecting the runtime environment.
pub const ENV_VAR: &str = "WEBVIEW_SHELL_ENV";

/// Value of [`ENV_VAR`] that turns on development mode.
pub const DEV_ENV_VALUE: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name shown in window titles and the macOS application menu
    pub app_name: String,
    /// Inner width of new windows
    pub window_width: u32,
    /// Inner height of new windows
    pub window_height: u32,
    /// Page loaded into every window. Relative paths resolve against the
    /// install directory. `None` uses the bundled `app/index.html`.
    pub document: Option<PathBuf>,
    /// Development mode: open the web inspector in every new window
    pub dev_mode: bool,
    /// Debug log file verbosity
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            document: None,
            dev_mode: false,
            log_level: LogLevel::Off,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    pub fn with_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    /// Load the user config file if it exists, otherwise defaults, then apply
    /// the process environment on top.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        let mut config = if config_path.exists() {
            log::info!("Loading existing config from {:?}", config_path);
            Self::load_from(&config_path)?
        } else {
            log::info!("No config file found, using defaults");
            Self::default()
        };

        config.apply_environment(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load and validate a config file. An empty file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = if contents.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml_ng::from_str::<Config>(&contents)?
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Validation(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if self.app_name.trim().is_empty() {
            return Err(ConfigError::Validation("app_name must not be empty".into()));
        }
        Ok(())
    }

    /// Overlay environment settings. `lookup` returns the value of a variable.
    ///
    /// Development mode is only ever switched on here; a config file that
    /// enables it is not overridden by an unset variable.
    pub fn apply_environment<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_VAR)
            && is_development(&value)
        {
            log::info!("{}={} enables development mode", ENV_VAR, value.trim());
            self.dev_mode = true;
        }
    }

    /// Directory holding the config file (`~/.config/webview-shell` on
    /// macOS/Linux, the platform config dir on Windows).
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_NAME)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/webview-shell
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_NAME)
            } else {
                PathBuf::from(".")
            }
        }
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Resolve the page loaded into each window.
    ///
    /// An explicit `document` wins (relative paths join `install_dir`).
    /// Otherwise the first existing `app/index.html` under `install_dir` then
    /// `fallback_dir` is used. When none exists the install location is
    /// returned anyway and the web view shows the miss.
    pub fn resolve_document(&self, install_dir: Option<&Path>, fallback_dir: Option<&Path>) -> PathBuf {
        if let Some(document) = &self.document {
            return match install_dir {
                Some(dir) if document.is_relative() => dir.join(document),
                _ => document.clone(),
            };
        }

        let candidates: Vec<PathBuf> = [install_dir, fallback_dir]
            .into_iter()
            .flatten()
            .map(|dir| dir.join(DEFAULT_DOCUMENT))
            .collect();

        if let Some(found) = candidates.iter().find(|path| path.is_file()) {
            return found.clone();
        }

        let chosen = candidates
            .into_iter()
            .next()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT));
        log::warn!("Local document not found, loading {:?} anyway", chosen);
        chosen
    }
}

/// Whether an environment value selects development mode.
pub fn is_development(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(DEV_ENV_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.app_name, APP_NAME);
        assert!(!config.dev_mode);
        assert!(config.document.is_none());
    }

    #[test]
    fn test_is_development() {
        assert!(is_development("development"));
        assert!(is_development(" Development\n"));
        assert!(!is_development("production"));
        assert!(!is_development(""));
    }

    #[test]
    fn test_validate_rejects_zero_size() {
        let config = Config::new().with_window_size(0, 600);
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }
}
