//! Server configuration
//!
//! Built with the `config` crate from defaults overridden by `WORDSMITH_*`
//! environment variables.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`)
    pub host: String,
    /// Bind port (default: `3000`)
    pub port: u16,
    /// Session lifetime in seconds (default: 7 days)
    pub session_ttl_seconds: u64,
    /// Mark the session cookie `Secure` (default: false)
    pub secure_cookies: bool,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// | Env Var                          | Default   |
    /// |----------------------------------|-----------|
    /// | `WORDSMITH_HOST`                 | `0.0.0.0` |
    /// | `WORDSMITH_PORT`                 | `3000`    |
    /// | `WORDSMITH_SESSION_TTL_SECONDS`  | `604800`  |
    /// | `WORDSMITH_SECURE_COOKIES`       | `false`   |
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 3000_i64)?
            .set_default("session_ttl_seconds", 604_800_i64)?
            .set_default("secure_cookies", false)?
            .add_source(Environment::with_prefix("WORDSMITH").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            session_ttl_seconds: 604_800,
            secure_cookies: false,
        }
    }
}
