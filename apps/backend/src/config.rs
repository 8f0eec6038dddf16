//! Server configuration from environment variables.

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";

/// Worst-case growth of text under JSON string escaping (`\u001f`).
const JSON_ESCAPE_FACTOR: usize = 6;
/// Room for the form's other fields and JSON syntax.
const JSON_ENVELOPE_BYTES: usize = 64 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Largest accepted `flashcards` field, in bytes.
    pub max_input_bytes: usize,
    /// Link handed out by the share endpoint.
    pub public_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            public_url: DEFAULT_PUBLIC_URL.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// Env vars (all optional):
    /// - HOST: bind address (default 0.0.0.0)
    /// - PORT: bind port (default 3000)
    /// - MAX_INPUT_BYTES: input size limit (default 1 MiB)
    /// - PUBLIC_URL: link returned for sharing
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using `lookup` to read each variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => defaults.port,
        };

        let max_input_bytes = match lookup("MAX_INPUT_BYTES") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(bytes) if bytes > 0 => bytes,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "MAX_INPUT_BYTES",
                        value,
                    })
                }
            },
            None => defaults.max_input_bytes,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            max_input_bytes,
            public_url: lookup("PUBLIC_URL").unwrap_or(defaults.public_url),
        })
    }

    /// Largest request body accepted, sized so an escaped `flashcards` field
    /// at `max_input_bytes` still fits.
    pub fn body_limit(&self) -> usize {
        self.max_input_bytes
            .saturating_mul(JSON_ESCAPE_FACTOR)
            .saturating_add(JSON_ENVELOPE_BYTES)
    }

    /// Address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
