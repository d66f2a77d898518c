use std::{env, net::IpAddr, str::FromStr};

use dotenvy::dotenv;
use log::{debug, info, warn};
use serde::Deserialize;
use sqids::{alphabet::DEFAULT_ALPHABET, Options};

use crate::errors::ConfigError;

// Server-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub workers: usize,
}

// Application-specific configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub name: String,
    pub version: String,
    pub environment: Environment,
    pub log_level: String,
}

// Settings handed to the encoder
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SqidsConfig {
    pub alphabet: String,
    pub min_length: usize,
    /// `None` keeps the built-in blocklist
    pub blocklist: Option<Vec<String>>,
}

impl SqidsConfig {
    pub fn options(&self) -> Options {
        Options {
            alphabet: self.alphabet.clone(),
            min_length: self.min_length,
            blocklist: self.blocklist.clone(),
        }
    }
}

// Environment enum for different deployment environments
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Testing,
    Production,
}

// Implement FromStr trait for Environment enum to enable parsing from string
impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "testing" | "test" => Ok(Environment::Testing),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(format!(
                "Invalid environment: {}. Must be one of: development, testing, production",
                s
            )),
        }
    }
}

// Result type for configuration functions
type ConfigResult<T> = Result<T, ConfigError>;

// Config struct that matches our environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub sqids: SqidsConfig,
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> ConfigResult<Self> {
        // Load .env file if it exists
        match dotenv() {
            Ok(_) => debug!(".env file loaded successfully"),
            Err(e) => warn!("Could not load .env file: {}", e),
        }

        let config = Self::from_lookup(|key| env::var(key))?;
        info!("Configuration loaded successfully");
        debug!("Loaded config: {:?}", config);

        Ok(config)
    }

    /// Builds the configuration from any key/value source shaped like `env::var`
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        // Create the server config
        let server = ServerConfig {
            host: get_or_default(&lookup, "SERVER_HOST", "127.0.0.1")?,
            port: get_or_default(&lookup, "SERVER_PORT", "8000")?,
            workers: get_or_default(&lookup, "SERVER_WORKERS", "4")?,
        };

        // Get version from Cargo.toml or environment
        let version = option_env!("CARGO_PKG_VERSION")
            .unwrap_or("0.1.0")
            .to_string();

        // Create the app config
        let app = AppConfig {
            name: get_or_default(&lookup, "APP_NAME", "sqids-server")?,
            version: lookup("APP_VERSION").unwrap_or(version),
            environment: get_or_default(&lookup, "APP_ENVIRONMENT", "development")?,
            log_level: get_or_default(&lookup, "RUST_LOG", "info")?,
        };

        // Encoder config; an empty SQIDS_BLOCKLIST disables blocking altogether
        let sqids = SqidsConfig {
            alphabet: get_or_default(&lookup, "SQIDS_ALPHABET", DEFAULT_ALPHABET)?,
            min_length: get_or_default(&lookup, "SQIDS_MIN_LENGTH", "0")?,
            blocklist: match lookup("SQIDS_BLOCKLIST") {
                Ok(words) => Some(parse_word_list(&words)),
                Err(env::VarError::NotPresent) => None,
                Err(e) => return Err(ConfigError::EnvVarError(e)),
            },
        };

        Ok(Config { server, app, sqids })
    }
}

/// Splits a comma separated list, dropping blanks
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Helper function to get a variable with a default value
fn get_or_default<T, F>(lookup: &F, key: &str, default: &str) -> ConfigResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Result<String, env::VarError>,
{
    match lookup(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(format!("Could not parse {}: {}", key, e))),
        Err(env::VarError::NotPresent) => {
            debug!("{} not set, using default: {}", key, default);
            default.parse::<T>().map_err(|e| {
                ConfigError::ParseError(format!("Could not parse default for {}: {}", key, e))
            })
        }
        Err(e) => Err(ConfigError::EnvVarError(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.workers, 4);
        assert_eq!(config.app.environment, Environment::Development);
        assert_eq!(config.sqids.options(), Options::default());
    }

    #[test]
    fn test_sqids_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("SQIDS_ALPHABET", "0123456789abcdef"),
            ("SQIDS_MIN_LENGTH", "12"),
            ("SQIDS_BLOCKLIST", " dead, beef ,,"),
        ]))
        .unwrap();

        assert_eq!(config.sqids.alphabet, "0123456789abcdef");
        assert_eq!(config.sqids.min_length, 12);
        assert_eq!(
            config.sqids.blocklist,
            Some(vec!["dead".to_string(), "beef".to_string()])
        );
    }

    #[test]
    fn test_empty_blocklist_disables_blocking() {
        let config = Config::from_lookup(lookup_from(&[("SQIDS_BLOCKLIST", "")])).unwrap();
        assert_eq!(config.sqids.blocklist, Some(vec![]));
    }

    #[test]
    fn test_parse_errors() {
        let err = Config::from_lookup(lookup_from(&[("SQIDS_MIN_LENGTH", "-3")])).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));

        let err = Config::from_lookup(lookup_from(&[("APP_ENVIRONMENT", "staging")])).unwrap_err();
        assert!(err.to_string().contains("Invalid environment"));
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("prod".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("TEST".parse::<Environment>(), Ok(Environment::Testing));
        assert!("qa".parse::<Environment>().is_err());
    }
}
