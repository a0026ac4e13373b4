//! Server configuration read from the environment.

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use mlpipe_runner::DEFAULT_PIPELINE_DELAY;
use thiserror::Error;

const HOST_VAR: &str = "MLPIPE_HOST";
const PORT_VAR: &str = "MLPIPE_PORT";
const DELAY_VAR: &str = "MLPIPE_PIPELINE_DELAY_SECS";

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var} value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Listener and pipeline settings for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// How long each pipeline run takes; defaults to the runner's fixed delay.
    pub pipeline_delay: Duration,
}

impl ServerConfig {
    /// Reads the configuration from process environment variables, falling
    /// back to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup(HOST_VAR) {
            Some(raw) => parse_var(HOST_VAR, &raw)?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match lookup(PORT_VAR) {
            Some(raw) => parse_var(PORT_VAR, &raw)?,
            None => DEFAULT_PORT,
        };

        let pipeline_delay = match lookup(DELAY_VAR) {
            Some(raw) => Duration::from_secs(parse_var(DELAY_VAR, &raw)?),
            None => DEFAULT_PIPELINE_DELAY,
        };

        Ok(Self {
            host,
            port,
            pipeline_delay,
        })
    }

    /// The socket address the server listens on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
