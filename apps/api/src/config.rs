// Service configuration
// Read from the environment after `.env` has been loaded

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3000;

/// Errors raised while reading configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime configuration of the board service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Builds the configuration from `BOARD_HOST` and `BOARD_PORT`
    ///
    /// Missing variables fall back to `0.0.0.0:3000` with a warning;
    /// present but unparsable values are an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("BOARD_HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                name: "BOARD_HOST",
                value,
            })?,
            None => {
                tracing::warn!("BOARD_HOST not set, using default {}", DEFAULT_HOST);
                DEFAULT_HOST
            }
        };

        let port = match lookup("BOARD_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "BOARD_PORT",
                value,
            })?,
            None => {
                tracing::warn!("BOARD_PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Ok(Self { host, port })
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
