use std::env;
use std::net::IpAddr;

use dotenvy::dotenv;
use log::LevelFilter;
use rocket::figment::Figment;
use snafu::prelude::*;

use crate::modules::acp_times::Rounding;
use crate::modules::helpers::logging::parse_log_level;

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("PORT must be a port number, got {value:?}"))]
    InvalidPort { value: String, source: std::num::ParseIntError },

    #[snafu(display("HOST must be an ip address, got {value:?}"))]
    InvalidHost { value: String, source: std::net::AddrParseError },

    #[snafu(display("DEBUG must be true or false, got {value:?}"))]
    InvalidDebug { value: String },

    #[snafu(display("ROUNDING must be directional or nearest, got {value:?}"))]
    InvalidRounding { value: String },
}

/// # server configuration
/// read from the environment, a `.env` file is loaded first when present.
///
/// | variable        | default       |
/// |-----------------|---------------|
/// | `HOST`          | `0.0.0.0`     |
/// | `PORT`          | `5000`        |
/// | `LOGGING_LEVEL` | `INFO`        |
/// | `LOG_FILE`      | unset         |
/// | `DEBUG`         | `false`       |
/// | `ROUNDING`      | `directional` |
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
    pub debug: bool,
    pub rounding: Rounding,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 5000,
            log_level: LevelFilter::Info,
            log_file: None,
            debug: false,
            rounding: Rounding::Directional,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// build the config from any key value source, missing keys keep their default
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup("HOST") {
            config.host = value.trim().parse::<IpAddr>().context(InvalidHostSnafu { value: value.clone() })?;
        }

        if let Some(value) = lookup("PORT") {
            config.port = value.trim().parse::<u16>().context(InvalidPortSnafu { value: value.clone() })?;
        }

        if let Some(value) = lookup("LOGGING_LEVEL") {
            config.log_level = parse_log_level(&value);
        }

        config.log_file = lookup("LOG_FILE").filter(|path| !path.trim().is_empty());

        if let Some(value) = lookup("DEBUG") {
            config.debug = match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => true,
                "false" | "0" | "no" => false,
                _ => return InvalidDebugSnafu { value }.fail(),
            };
        }

        if let Some(value) = lookup("ROUNDING") {
            config.rounding = match value.trim().to_lowercase().as_str() {
                "directional" => Rounding::Directional,
                "nearest" => Rounding::Nearest,
                _ => return InvalidRoundingSnafu { value }.fail(),
            };
        }

        // debug always logs everything
        if config.debug && config.log_level < LevelFilter::Debug {
            config.log_level = LevelFilter::Debug;
        }

        Ok(config)
    }

    /// the rocket figment for this config. rocket's own logger is turned off,
    /// logging goes through `setup_logging`.
    pub fn figment(&self) -> Figment {
        rocket::Config::figment()
            .merge(("address", self.host))
            .merge(("port", self.port))
            .merge(("log_level", "off"))
    }
}
