//! Process configuration, read once at startup.

use std::collections::HashMap;

use config::{Config as ConfigLoader, ConfigError, Environment};
use serde::Deserialize;

/// Immutable settings shared by the server and the upstream client.
///
/// Every field comes from an unprefixed environment variable of the same
/// name in upper case (`PORT`, `NASA_API_KEY`, ...). A `.env` file is
/// loaded into the environment by the binary before this runs.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Interface to listen on
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Key appended to every upstream call as `api_key`
    #[serde(default = "default_api_key")]
    pub nasa_api_key: String,

    /// Scheme and host of the upstream API, without a trailing path
    #[serde(default = "default_base_url")]
    pub nasa_api_base_url: String,

    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

/// NASA's shared, heavily rate-limited demo key.
fn default_api_key() -> String {
    "DEMO_KEY".to_string()
}

fn default_base_url() -> String {
    "https://api.nasa.gov".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::default())
    }

    /// Loads from an explicit variable map instead of the process
    /// environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(Environment::default().source(Some(vars.into_iter().collect())))
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        ConfigLoader::builder()
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    /// `host:port` for [`Server::bind`](crate::Server::bind).
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
