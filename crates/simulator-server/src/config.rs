use std::{
    env,
    net::{AddrParseError, SocketAddr},
};

use core_limits::{
    LimitConfig, LimitsError, DEFAULT_ALERT_FACTOR, DEFAULT_MAX_RATIO, DEFAULT_PRUDENTIAL_FACTOR,
};
use thiserror::Error;

const DEFAULT_LISTEN_PORT: u16 = 8080;

const ENV_ADDR_KEY: &str = "SIMULATOR_ADDR";
const ENV_MAX_RATIO_KEY: &str = "SIMULATOR_MAX_RATIO";
const ENV_PRUDENTIAL_FACTOR_KEY: &str = "SIMULATOR_PRUDENTIAL_FACTOR";
const ENV_ALERT_FACTOR_KEY: &str = "SIMULATOR_ALERT_FACTOR";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub limits: LimitConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SIMULATOR_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
    #[error("{key} must be a number")]
    InvalidRatio { key: &'static str },
    #[error("{key} contains non-unicode data")]
    NonUnicode { key: &'static str },
    #[error("limit ratios from the environment are invalid: {0}")]
    InvalidLimits(#[from] LimitsError),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match env::var(ENV_ADDR_KEY) {
            Ok(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            Err(env::VarError::NotPresent) => SocketAddr::from(([0, 0, 0, 0], DEFAULT_LISTEN_PORT)),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::NonUnicode { key: ENV_ADDR_KEY });
            }
        };

        let limits = LimitConfig::new(
            parse_ratio_env(ENV_MAX_RATIO_KEY, DEFAULT_MAX_RATIO)?,
            parse_ratio_env(ENV_PRUDENTIAL_FACTOR_KEY, DEFAULT_PRUDENTIAL_FACTOR)?,
            parse_ratio_env(ENV_ALERT_FACTOR_KEY, DEFAULT_ALERT_FACTOR)?,
        )?;

        Ok(Self {
            listen_addr,
            limits,
        })
    }
}

fn parse_ratio_env(key: &'static str, default_value: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidRatio { key }),
        Err(env::VarError::NotPresent) => Ok(default_value),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode { key }),
    }
}
