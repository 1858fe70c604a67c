//! Command execution context
//!
//! Provides a unified context for command execution: the loaded config
//! (session store), an API client pointed at the resolved base URL, and the
//! output format.

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::AuthServiceClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration, including the stored session
    pub config: Config,
    /// API client for the resolved base URL
    pub client: AuthServiceClient,
    /// Output format preference
    pub format: OutputFormat,
    /// Config path override, used when saving
    config_path: Option<String>,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is treated as an empty one; it is created on
    /// the first save.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let api_url = config.resolve_api_url(opts.api_url_ref());
        log::debug!("Using API at {}", api_url);

        let client = AuthServiceClient::new(api_url)?;
        let format = opts.resolve_format(&config);

        Ok(Self {
            config,
            client,
            format,
            config_path: opts.config.clone(),
        })
    }

    /// Persist the (possibly updated) config
    pub fn save(&self) -> Result<()> {
        self.config.save_at(self.config_path.as_deref())
    }

    /// Make the API that issued the current session the configured one
    pub fn bind_session_to_api(&mut self) {
        let issuer = self.client.base_url();
        if self.config.resolve_api_url(None) != issuer {
            log::debug!("Saving API URL {} with the new session", issuer);
            self.config.api_url = Some(issuer.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn opts_for(path: &std::path::Path, api_url: Option<&str>) -> GlobalOptions {
        GlobalOptions {
            format: None,
            config: Some(path.to_string_lossy().to_string()),
            api_url: api_url.map(str::to_string),
        }
    }

    #[test]
    fn test_bind_session_to_api_persists_override() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");

        let mut ctx =
            CommandContext::new(&opts_for(&path, Some("http://auth.example.test/api/"))).unwrap();
        ctx.bind_session_to_api();
        ctx.save().unwrap();

        let reloaded = Config::load_from(path).unwrap();
        assert_eq!(
            reloaded.resolve_api_url(None),
            "http://auth.example.test/api"
        );
    }

    #[test]
    fn test_bind_session_to_api_leaves_matching_url_alone() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");

        let mut ctx = CommandContext::new(&opts_for(&path, None)).unwrap();
        ctx.bind_session_to_api();

        assert!(ctx.config.api_url.is_none());
    }
}
