//! Store connection configuration
//!
//! The connection is described by `{host, port, database, user, password}`.
//! Resolution order, highest wins: command-line flags (clap also maps the
//! `FPT_PG_*` environment variables onto them), then a YAML config file,
//! then built-in defaults. Credentials never live in source.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 5432;
pub const DEFAULT_DATABASE: &str = "production";
pub const DEFAULT_USER: &str = "postgres";

/// Name of the config file inside the platform config directory
const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },

    #[error("config file {} does not exist", .0.display())]
    Missing(PathBuf),
}

/// Partial connection settings, as read from a config file or supplied as
/// flag overrides. Every field is optional; [`StoreConfig::resolve`] fills
/// the gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ConfigFile {
    /// Parse the file at `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Starter file content written by `fpt config init`
    pub fn template() -> String {
        format!(
            "# fpt store connection\n\
             # Every key is optional; flags and FPT_PG_* environment\n\
             # variables take precedence over this file.\n\
             host: {DEFAULT_HOST}\n\
             port: {DEFAULT_PORT}\n\
             database: {DEFAULT_DATABASE}\n\
             user: {DEFAULT_USER}\n\
             # password: secret\n"
        )
    }
}

/// Fully resolved connection settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: Option<String>,
}

impl StoreConfig {
    /// Merge flag overrides over an optional config file over the defaults
    pub fn resolve(overrides: &ConfigFile, file: Option<&ConfigFile>) -> Self {
        let file = file.cloned().unwrap_or_default();
        Self {
            host: overrides
                .host
                .clone()
                .or(file.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
            database: overrides
                .database
                .clone()
                .or(file.database)
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            user: overrides
                .user
                .clone()
                .or(file.user)
                .unwrap_or_else(|| DEFAULT_USER.to_string()),
            password: overrides.password.clone().or(file.password),
        }
    }

    /// Load and resolve: an explicitly named file must exist; the default
    /// location is used only when present.
    pub fn load(explicit: Option<&Path>, overrides: &ConfigFile) -> Result<Self, ConfigError> {
        let file = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Missing(path.to_path_buf()));
                }
                Some(ConfigFile::load(path)?)
            }
            None => match default_path() {
                Some(path) if path.exists() => Some(ConfigFile::load(&path)?),
                _ => None,
            },
        };
        Ok(Self::resolve(overrides, file.as_ref()))
    }
}

// Password stays out of logs and panics.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Default config file location (platform config directory)
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "fpt")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
