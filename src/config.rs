use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "https://api.tournesol.app";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Application configuration
/// In debug builds: loads from .env file and environment
/// In release builds: loads from ~/.rankview/config.yaml
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the remote API, without trailing slash
    pub api_url: String,
    /// Pre-issued bearer token sent with every request
    pub api_token: Option<String>,
    /// Overrides the default User-Agent header
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            user_agent: None,
        }
    }
}

/// On-disk shape of config.yaml, every key optional
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    api_token: Option<String>,
    user_agent: Option<String>,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, reading environment only");
            }

            Self::from_lookup(|key| std::env::var(key).ok())
        }

        #[cfg(not(debug_assertions))]
        {
            match Self::config_file_path() {
                Some(path) if path.exists() => Self::from_yaml_file(&path),
                Some(path) => {
                    info!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
                None => {
                    warn!("Could not determine home directory, using default config");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Build configuration from `RANKVIEW_*` variables served by `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Self {
            api_url: non_empty("RANKVIEW_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: non_empty("RANKVIEW_API_TOKEN"),
            user_agent: non_empty("RANKVIEW_USER_AGENT"),
        };

        if config.api_token.is_none() {
            warn!("RANKVIEW_API_TOKEN not set, the ratings page will be rejected by the API");
        }

        config.validated()
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents)?
        };

        info!("Loaded config from {}", path.display());

        Self {
            api_url: file.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            api_token: file.api_token,
            user_agent: file.user_agent,
        }
        .validated()
    }

    /// ~/.rankview/config.yaml
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".rankview").join("config.yaml"))
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        let url = self.api_url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "api_url",
                reason: format!("expected an http(s) URL, got {:?}", self.api_url),
            });
        }
        self.api_url = url.to_string();
        Ok(self)
    }
}
