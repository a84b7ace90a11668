//! Application settings persisted as `config.toml` in the app directory.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable config directory found.
    #[error("No suitable config directory found")]
    NoConfigDir,
    /// Failed to create the config directory.
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to read a config file.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write a config file.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse TOML config.
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    /// Failed to serialize config to TOML.
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

/// Settings loaded at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Classifier artifact; relative paths resolve against the working directory.
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,
    /// Decorative background stretched behind every page.
    #[serde(default = "default_background_image")]
    pub background_image: Option<PathBuf>,
    #[serde(default)]
    pub window: WindowSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Initial (and minimum) window inner size in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_extent")]
    pub width: f32,
    #[serde(default = "default_window_extent")]
    pub height: f32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_extent(),
            height: default_window_extent(),
        }
    }
}

/// Log verbosity and retention under `.placement/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing` filter directives; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log files kept across launches, the current one included.
    #[serde(default = "default_max_log_files")]
    pub max_files: usize,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            max_files: default_max_log_files(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            background_image: default_background_image(),
            window: WindowSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

fn default_model_path() -> PathBuf {
    PathBuf::from("assets/model.json")
}

fn default_background_image() -> Option<PathBuf> {
    Some(PathBuf::from("bg.jpg"))
}

fn default_window_extent() -> f32 {
    650.0
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    10
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(|error| match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => ConfigError::CreateDir { path, source },
    })?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration, writing defaults to disk on first launch.
pub fn load_or_create() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from_path(&path);
    }
    let config = AppConfig::default();
    save_to_path(&config, &path)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(config)
}

/// Parse a config file; missing keys fall back to defaults.
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the TOML settings file atomically to prevent partial writes on crash.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    let write_err = |source: std::io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(data.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|err| write_err(err.error))?;
    Ok(())
}
