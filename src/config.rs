// src/config.rs
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::labels::Locale;

pub const CONFIG_FILE: &str = "data_upload.json";
pub const CONFIG_ENV: &str = "DATA_UPLOAD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub upload_delay_ms: u64,
    pub connect_delay_ms: u64,
    pub locale: Locale,
    pub dark_mode: bool,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            upload_delay_ms: 1000,
            connect_delay_ms: 2000,
            locale: Locale::Ru,
            dark_mode: false,
            window_width: 1024,
            window_height: 768,
        }
    }
}

impl AppConfig {
    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    /// Reads `path`. A missing file means defaults.
    pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(AppConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&json).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// `$DATA_UPLOAD_CONFIG`, or `data_upload.json` in the working directory.
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Loads from [`AppConfig::default_path`], falling back to defaults on error.
    pub fn load_or_default() -> AppConfig {
        let path = Self::default_path();
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{}; using default settings", err);
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.upload_delay(), Duration::from_millis(1000));
        assert_eq!(config.connect_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(r#"{ "locale": "en", "connect_delay_ms": 50 }"#);
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.connect_delay_ms, 50);
        assert_eq!(config.upload_delay_ms, 1000);
        assert_eq!(config.window_width, 1024);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_config("{ not json");
        let err = AppConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        let file = write_config(r#"{ "locale": "fi" }"#);
        assert!(AppConfig::load(file.path()).is_err());
    }
}
