//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Service configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct HoneypotConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// Shared secret callers present in the `x-api-key` header.
    pub api_key: SecretString,
}

impl HoneypotConfig {
    /// Read `API_KEY`, `HONEYPOT_HOST` and `HONEYPOT_PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("API_KEY".to_string()))?;

        let host = lookup("HONEYPOT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("HONEYPOT_PORT") {
            Some(raw) => raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
                key: "HONEYPOT_PORT".to_string(),
                message: format!("{raw:?}: {e}"),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            api_key: SecretString::from(api_key),
        })
    }

    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
