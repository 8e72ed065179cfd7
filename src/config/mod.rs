//! Configuration module for the webhook service.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use reqwest::Url;

/// Default view queried for users subscribed to a topic.
pub const DEFAULT_VIEW_URL: &str = "http://localhost:4985/db/_design/extras/_view/user_topics";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Document-store view holding the topic subscriptions
    pub view_url: Url,
    /// Timeout applied to each view query
    pub view_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
}

/// Invalid configuration value.
#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.var, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("GCM_BIND_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8000".to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError {
                var: "GCM_BIND_ADDR",
                message: format!("{}", e),
            })?;

        let view_url = parse_view_url(
            &lookup("GCM_VIEW_URL").unwrap_or_else(|| DEFAULT_VIEW_URL.to_string()),
        )?;

        let view_timeout = parse_view_timeout(
            &lookup("GCM_VIEW_TIMEOUT_SECS").unwrap_or_else(|| "10".to_string()),
        )?;

        let log_level = lookup("GCM_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let log_format = match lookup("GCM_LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError {
                    var: "GCM_LOG_FORMAT",
                    message: format!("expected \"text\" or \"json\", got \"{}\"", other),
                })
            }
        };

        Ok(Self {
            bind_addr,
            view_url,
            view_timeout,
            log_level,
            log_format,
        })
    }
}

fn parse_view_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError {
        var: "GCM_VIEW_URL",
        message: format!("{}", e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError {
            var: "GCM_VIEW_URL",
            message: format!("unsupported scheme {}", scheme),
        }),
    }
}

/// A zero timeout would fail every view query, so it is rejected.
fn parse_view_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError {
            var: "GCM_VIEW_TIMEOUT_SECS",
            message: "must be at least 1 second".to_string(),
        }),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(e) => Err(ConfigError {
            var: "GCM_VIEW_TIMEOUT_SECS",
            message: format!("{}", e),
        }),
    }
}
