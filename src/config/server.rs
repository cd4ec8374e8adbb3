use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::config::ConfigError;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";
pub const PORT_VAR: &str = "NODE_PORT";

pub const DEFAULT_ENVIRONMENT: &str = "none specified";
pub const DEFAULT_PORT: u16 = 8080;

/// Startup configuration for the HTTP responder, read once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: String,
    pub host: IpAddr,
    pub port: u16,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary variable source.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let environment = read(ENVIRONMENT_VAR).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let port = match read(PORT_VAR) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                    source,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            environment,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
