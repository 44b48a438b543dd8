//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` under the board root and covers
//! the optional collection API endpoint: base URL, bearer token, and request
//! timeout. Environment variables take precedence over the file.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{FunnelboardError, Result};
use crate::paths::config_path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Collection API endpoint; the client stays disabled while unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiConfig>,

    /// API request timeout in seconds (default: 30)
    #[serde(default = "default_api_timeout")]
    pub api_timeout: u64,
}

fn default_api_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api: None,
            api_timeout: default_api_timeout(),
        }
    }
}

/// Collection API endpoint configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn path() -> PathBuf {
        config_path()
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            FunnelboardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                FunnelboardError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            FunnelboardError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Restrictive permissions on Unix: the file may hold a token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&path, permissions).map_err(|e| {
                FunnelboardError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to set permissions on config at {}: {}", path.display(), e),
                ))
            })?;
        }

        Ok(())
    }

    /// API base URL from environment variable or config file
    pub fn api_base_url(&self) -> Option<String> {
        if let Ok(url) = env::var("FUNNELBOARD_API_URL")
            && !url.is_empty()
        {
            return Some(url);
        }
        self.api.as_ref().map(|a| a.base_url.clone())
    }

    /// Bearer token from environment variable or config file
    pub fn api_token(&self) -> Option<String> {
        if let Ok(token) = env::var("FUNNELBOARD_API_TOKEN")
            && !token.is_empty()
        {
            return Some(token);
        }
        self.api.as_ref().and_then(|a| a.token.clone())
    }

    /// Set the API base URL, keeping any existing token
    pub fn set_api_base_url(&mut self, base_url: String) {
        match &mut self.api {
            Some(api) => api.base_url = base_url,
            None => self.api = Some(ApiConfig { base_url, token: None }),
        }
    }

    /// Set the bearer token. Requires a base URL to already be configured.
    pub fn set_api_token(&mut self, token: String) -> Result<()> {
        match &mut self.api {
            Some(api) => {
                api.token = Some(token);
                Ok(())
            }
            None => Err(FunnelboardError::Config(
                "set api.base_url before api.token".to_string(),
            )),
        }
    }

    /// Get the API request timeout duration
    pub fn api_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.api_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api.is_none());
        assert_eq!(config.api_timeout, 30);
    }

    #[test]
    #[serial]
    fn test_config_serialization_roundtrip() {
        // SAFETY: #[serial] ensures single-threaded access to the environment
        unsafe {
            std::env::remove_var("FUNNELBOARD_API_URL");
            std::env::remove_var("FUNNELBOARD_API_TOKEN");
        }
        let mut config = Config::default();
        config.set_api_base_url("http://localhost:8080".to_string());
        config.set_api_token("tok_test123".to_string()).unwrap();

        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();

        assert_eq!(parsed.api_base_url().as_deref(), Some("http://localhost:8080"));
        assert_eq!(parsed.api_token().as_deref(), Some("tok_test123"));
        assert_eq!(parsed.api_timeout, 30);
    }

    #[test]
    fn test_token_requires_base_url() {
        let mut config = Config::default();
        assert!(config.set_api_token("tok".to_string()).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ApiConfig {
            base_url: "http://localhost:8080".to_string(),
            token: Some("tok_secret".to_string()),
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("tok_secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    #[serial]
    fn test_env_overrides_file_values() {
        let mut config = Config::default();
        config.set_api_base_url("http://from-file:1".to_string());

        // SAFETY: #[serial] ensures single-threaded access to the environment
        unsafe { std::env::set_var("FUNNELBOARD_API_URL", "http://from-env:2") };
        assert_eq!(config.api_base_url().as_deref(), Some("http://from-env:2"));
        unsafe { std::env::remove_var("FUNNELBOARD_API_URL") };

        assert_eq!(config.api_base_url().as_deref(), Some("http://from-file:1"));
    }

    #[test]
    #[serial]
    fn test_timeout_default_via_serde() {
        let config: Config = serde_yaml_ng::from_str("api:\n  base_url: http://x\n").unwrap();
        assert_eq!(config.api_timeout(), std::time::Duration::from_secs(30));
    }
}
