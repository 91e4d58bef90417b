//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub port: u16,
    /// Base URL of the fintech accounts API.
    pub backend_url: String,
    /// Externally reachable address of this service, used for callbacks.
    pub public_base_url: String,
    pub request_timeout: Duration,
    pub idle_timeout: Duration,
    pub log_format: LogFormat,
    /// OTLP collector endpoint; traces are exported only when set.
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port = lookup("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a port number: {e}"))?;

        let backend_url = lookup("BACKEND_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());

        let public_base_url = lookup("PUBLIC_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| format!("http://localhost:{port}"));

        let request_timeout = seconds(&lookup, "HTTP_REQUEST_TIMEOUT_SECS", 30)?;
        let idle_timeout = seconds(&lookup, "HTTP_IDLE_TIMEOUT_SECS", 1)?;

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("") | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be 'text' or 'json', got '{other}'"),
        };

        let otlp_endpoint = lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            backend_url,
            public_base_url,
            request_timeout,
            idle_timeout,
            log_format,
            otlp_endpoint,
        })
    }
}

fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: u64,
) -> anyhow::Result<Duration> {
    let secs = match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} must be a whole number of seconds: {e}"))?,
        None => default,
    };
    Ok(Duration::from_secs(secs))
}
