//! Runtime settings read from the environment.
//!
//! `main` loads a `.env` file first (dotenv), so any of these may live there.

use crate::models::MAX_LENGTH;
use crate::processing::{DEFAULT_HOST_LIMIT, DEFAULT_SUBNET_LIMIT};
use std::error::Error;
use std::str::FromStr;

pub const ENV_SUBNET_LIMIT: &str = "SUBNET_CALC_SUBNET_LIMIT";
pub const ENV_HOST_LIMIT: &str = "SUBNET_CALC_HOST_LIMIT";
pub const ENV_DEFAULT_PREFIX: &str = "SUBNET_CALC_DEFAULT_PREFIX";

/// Prefix given to a bare address when nothing else is configured.
pub const DEFAULT_PREFIX: u8 = 24;

/// Limits and defaults for a calculation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Most subnets a split may produce.
    pub subnet_limit: usize,
    /// Most hosts listed.
    pub host_limit: usize,
    /// Prefix applied to an address given without one.
    pub default_prefix: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            subnet_limit: DEFAULT_SUBNET_LIMIT,
            host_limit: DEFAULT_HOST_LIMIT,
            default_prefix: Some(DEFAULT_PREFIX),
        }
    }
}

impl Config {
    /// Read the `SUBNET_CALC_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(limit) = read_var::<usize, _>(&lookup, ENV_SUBNET_LIMIT)? {
            config.subnet_limit = limit;
        }
        if let Some(limit) = read_var::<usize, _>(&lookup, ENV_HOST_LIMIT)? {
            config.host_limit = limit;
        }
        if let Some(prefix) = read_var::<u8, _>(&lookup, ENV_DEFAULT_PREFIX)? {
            if prefix > MAX_LENGTH {
                return Err(
                    format!("{ENV_DEFAULT_PREFIX}={prefix} is not a prefix length 0-32").into(),
                );
            }
            config.default_prefix = Some(prefix);
        }

        log::debug!("Config: {config:?}");
        Ok(config)
    }
}

fn read_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, Box<dyn Error>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("Invalid {key}={raw:?}: {e}").into()),
        _ => Ok(None),
    }
}
