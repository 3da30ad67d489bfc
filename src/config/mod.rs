//! Configuration module for the clinic scheduler.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.var, self.value)
    }
}

impl std::error::Error for ConfigError {}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Human-readable or JSON log lines
    pub log_format: LogFormat,
    /// Start with the built-in doctors, locations, hours and appointments
    pub seed_data: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let raw_addr =
            env::var("CLINIC_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5000".to_string());
        let bind_addr = raw_addr.parse().map_err(|_| ConfigError {
            var: "CLINIC_BIND_ADDR",
            value: raw_addr.clone(),
        })?;

        let log_level = env::var("CLINIC_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("CLINIC_LOG_FORMAT").ok().as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError {
                    var: "CLINIC_LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        let seed_data = match env::var("CLINIC_SEED_DATA") {
            Err(_) => true,
            Ok(value) => parse_bool(&value).ok_or(ConfigError {
                var: "CLINIC_SEED_DATA",
                value,
            })?,
        };

        Ok(Self {
            bind_addr,
            log_level,
            log_format,
            seed_data,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both cases touch the process environment, so they run in one test.
    #[test]
    fn test_config_from_env() {
        env::remove_var("CLINIC_BIND_ADDR");
        env::remove_var("CLINIC_LOG_LEVEL");
        env::remove_var("CLINIC_LOG_FORMAT");
        env::remove_var("CLINIC_SEED_DATA");

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.seed_data);

        env::set_var("CLINIC_BIND_ADDR", "not-an-address");
        let err = Config::from_env().unwrap_err();
        assert_eq!(err.var, "CLINIC_BIND_ADDR");
        env::remove_var("CLINIC_BIND_ADDR");

        env::set_var("CLINIC_SEED_DATA", "off");
        env::set_var("CLINIC_LOG_FORMAT", "json");
        let config = Config::from_env().unwrap();
        assert!(!config.seed_data);
        assert_eq!(config.log_format, LogFormat::Json);
        env::remove_var("CLINIC_SEED_DATA");
        env::remove_var("CLINIC_LOG_FORMAT");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
