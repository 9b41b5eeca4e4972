// src/config.rs
use std::{env, net::SocketAddr, time::Duration};

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a whole number of seconds, got `{value}`")]
    InvalidTimeout { var: &'static str, value: String },

    #[error("{var} must be a socket address like 0.0.0.0:5000, got `{value}`")]
    InvalidAddr { var: &'static str, value: String },
}

/// Where the client sends its requests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub chat_path: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads `CHAT_BASE_URL`, `CHAT_PATH` and `CHAT_TIMEOUT_SECS`, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        if let Some(url) = non_empty_var("CHAT_BASE_URL") {
            cfg.base_url = url;
        }
        if let Some(path) = non_empty_var("CHAT_PATH") {
            cfg.chat_path = path;
        }
        if let Some(raw) = non_empty_var("CHAT_TIMEOUT_SECS") {
            cfg.timeout = parse_timeout("CHAT_TIMEOUT_SECS", &raw)?;
        }
        Ok(cfg)
    }
}

/// Azure OpenAI deployment used by the completions responder.
#[derive(Debug, Clone)]
pub struct CompletionsConfig {
    pub endpoint: String,
    pub api_key: String,
    pub deployment: String,
    pub search: Option<SearchConfig>,
    pub timeout: Duration,
}

/// Azure Search index attached to completions as a data source.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    pub admin_key: String,
    pub index_name: String,
}

impl CompletionsConfig {
    /// `None` unless endpoint, key and deployment are all set.
    pub fn from_env() -> Option<Self> {
        let endpoint = non_empty_var("AZURE_OPENAI_ENDPOINT")?;
        let api_key = non_empty_var("AZURE_OPENAI_API_KEY")?;
        let deployment = non_empty_var("AZURE_OPENAI_CHAT_COMPLETIONS_DEPLOYMENT_NAME")?;

        let search = match (
            non_empty_var("AZURE_SEARCH_SERVICE_ENDPOINT"),
            non_empty_var("AZURE_SEARCH_SERVICE_ADMIN_KEY"),
            non_empty_var("SEARCH_INDEX_NAME"),
        ) {
            (Some(endpoint), Some(admin_key), Some(index_name)) => Some(SearchConfig {
                endpoint,
                admin_key,
                index_name,
            }),
            _ => None,
        };

        Some(Self {
            endpoint,
            api_key,
            deployment,
            search,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub completions: Option<CompletionsConfig>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = non_empty_var("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        Ok(Self {
            addr: parse_addr("SERVER_ADDR", &raw)?,
            completions: CompletionsConfig::from_env(),
        })
    }
}

pub fn parse_timeout(var: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidTimeout {
            var,
            value: raw.to_string(),
        })
}

pub fn parse_addr(var: &'static str, raw: &str) -> Result<SocketAddr, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidAddr {
        var,
        value: raw.to_string(),
    })
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_loopback_chat() {
        let cfg = ClientConfig::default();
        assert_eq!(cfg.base_url, "http://127.0.0.1:5000");
        assert_eq!(cfg.chat_path, "/chat");
        assert_eq!(cfg.timeout, Duration::from_secs(30));
    }

    #[test]
    fn timeout_parsing() {
        assert_eq!(parse_timeout("T", " 5 ").unwrap(), Duration::from_secs(5));
        assert!(matches!(
            parse_timeout("T", "soon"),
            Err(ConfigError::InvalidTimeout { .. })
        ));
    }

    #[test]
    fn addr_parsing() {
        assert_eq!(parse_addr("A", "0.0.0.0:5000").unwrap().port(), 5000);
        assert!(parse_addr("A", "localhost").is_err());
    }
}
