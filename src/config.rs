//! Runtime configuration.
//!
//! Values come from `pte-practice.json` (or a file passed with `--config`),
//! every field is optional, and command-line flags override what the file
//! says.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "pte-practice.json";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Address the web app binds to.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Content file replacing the built-in practice tables.
    #[serde(default)]
    pub content: Option<PathBuf>,

    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            content: None,
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads `pte-practice.json` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        match std::fs::read_to_string(&path) {
            Ok(contents) => Self::parse(&path, &contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                config.validate()?;
                Ok(config)
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// Loads an explicitly requested config file. Unlike
    /// [`Config::load_from_dir`], a missing file is an error.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(path, &contents)
    }

    fn parse(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host must not be empty".to_string()));
        }

        if self.port == 0 {
            return Err(ConfigError::Invalid(
                "port must be greater than 0".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logLevel must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// `host:port` string for the web app's listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
