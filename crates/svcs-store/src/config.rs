//! Repository configuration (`vcs/config.toml`)
//!
//! ```toml
//! [user]
//! name = "alice"
//! ```

use crate::atomic::atomic_write;
use crate::errors::{corrupted, io_error, serialization, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use svcs_core::errors::{ExError, SvcsError};
use svcs_core::identity::IdentitySource;

/// Parsed configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoConfig {
    #[serde(default)]
    pub user: UserConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Durable configuration file; also the production `IdentitySource`
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the configuration; a missing file yields the defaults
    ///
    /// # Errors
    ///
    /// - `Io`: the file exists but cannot be read
    /// - `Corrupted`: the file is not valid TOML for `RepoConfig`
    pub fn load(&self) -> Result<RepoConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RepoConfig::default()),
            Err(e) => return Err(io_error("config_read", &self.path, e)),
        };

        toml::from_str(&content).map_err(|e| corrupted("config_read", &self.path, e.to_string()))
    }

    /// Persist the configuration atomically
    ///
    /// # Errors
    ///
    /// - `Serialization`: the configuration cannot be encoded
    /// - `Io`: the file cannot be written
    pub fn save(&self, config: &RepoConfig) -> Result<()> {
        let content =
            toml::to_string(config).map_err(|e| serialization("config_write", e.to_string()))?;
        atomic_write(&self.path, content.as_bytes())
    }

    /// The configured username, if any; blank names count as unset
    ///
    /// # Errors
    ///
    /// Same as [`ConfigFile::load`].
    pub fn username(&self) -> Result<Option<String>> {
        Ok(self
            .load()?
            .user
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty()))
    }

    /// Store a new username and return it as stored
    ///
    /// # Errors
    ///
    /// - `InvalidInput`: the name is blank
    /// - Any error from [`ConfigFile::load`] or [`ConfigFile::save`]
    pub fn set_username(&self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SvcsError::EmptyUsername.into());
        }

        let mut config = self.load()?;
        config.user.name = Some(name.to_string());
        self.save(&config)?;

        tracing::debug!(author = name, "Stored username");
        Ok(name.to_string())
    }
}

impl IdentitySource for ConfigFile {
    fn author(&self) -> std::result::Result<Option<String>, ExError> {
        self.username()
    }
}
