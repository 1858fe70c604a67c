//! Configuration and session storage for authdesk
//!
//! The config file plays the role of the browser's local storage: it keeps
//! the API location, the current session token and the couple of display
//! fields returned at sign-in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// API base URL used when neither flag, environment nor config set one
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the authentication API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// Signed-in session, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// Stored session: the token plus the identity it was issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token returned by login or register
    pub token: String,

    /// Username returned alongside the token
    pub username: String,

    /// Email returned alongside the token
    pub email: String,

    /// Expiry decoded from the token, when it carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Whether the token's own expiry has passed. Tokens without an expiry
    /// are left for the server to judge.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|exp| exp <= Utc::now())
    }
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".authdesk").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path.
    ///
    /// A missing file yields an empty configuration.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional override path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds a bearer token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Resolve the API base URL: explicit override, then config, then default.
    ///
    /// Trailing slashes are dropped so paths can be appended directly.
    pub fn resolve_api_url(&self, override_url: Option<&str>) -> String {
        override_url
            .or(self.api_url.as_deref())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string()
    }

    /// The stored token, if signed in
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Get the session, returning an error if not signed in
    pub fn require_session(&self) -> Result<&Session> {
        self.session
            .as_ref()
            .ok_or_else(|| ConfigError::NotSignedIn.into())
    }

    /// Replace the stored session
    pub fn store_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Drop the stored session. Returns whether one was present.
    pub fn clear_session(&mut self) -> bool {
        self.session.take().is_some()
    }
}
