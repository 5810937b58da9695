//! Configuration management
//!
//! Settings live in `~/.pusher/config.yaml`. A missing file means defaults,
//! and every field has a default so partial files are accepted.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::git::auth::PushAuth;

/// Runtime configuration for the interactive session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How credentials are handed to `git push`.
    pub push_auth: PushAuth,

    /// Branch name the push flow renames the current branch to.
    pub branch: String,

    /// Name of the remote the push and update flows use.
    pub remote: String,

    /// Host used to build repository URLs (`https://{host}/{user}/{repo}.git`).
    pub host: String,

    /// Base URL of the GitHub REST API.
    pub api_url: String,

    /// Keychain service the username and token are stored under.
    pub keyring_service: String,

    /// Default answer for the "private repository?" prompt.
    pub private_by_default: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            push_auth: PushAuth::default(),
            branch: "main".to_string(),
            remote: "origin".to_string(),
            host: "github.com".to_string(),
            api_url: crate::github::DEFAULT_API_URL.to_string(),
            keyring_service: crate::credentials::KEYRING_SERVICE.to_string(),
            private_by_default: true,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_path()?)
    }

    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_saphyr::from_str(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }


    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
            .join(".pusher");

        Ok(config_dir.join("config.yaml"))
    }

    /// Builds the HTTPS clone URL for `username/name` on the configured host.
    pub fn repository_url(&self, username: &str, name: &str) -> String {
        format!("https://{}/{}/{}.git", self.host, username, name)
    }
}
