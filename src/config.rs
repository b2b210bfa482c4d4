// src/config.rs

use std::{env, fmt, net::SocketAddr};

use dotenvy::dotenv;

/// Errors raised while reading configuration from the environment.
#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "{} must be set", key),
            ConfigError::Invalid { key, value } => write!(f, "{} has invalid value '{}'", key, value),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    /// Number of questions returned per page by `GET /questions`.
    pub questions_per_page: i64,
    /// Fixed seed for the quiz RNG. `None` seeds from OS entropy.
    pub quiz_seed: Option<u64>,
    pub log_dir: String,
    pub db_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let bind_addr = parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;

        let questions_per_page: i64 = parse_or(&lookup, "QUESTIONS_PER_PAGE", 10)?;
        if questions_per_page < 1 {
            return Err(ConfigError::Invalid {
                key: "QUESTIONS_PER_PAGE",
                value: questions_per_page.to_string(),
            });
        }

        let quiz_seed = match lookup("QUIZ_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::Invalid {
                key: "QUIZ_SEED",
                value: raw,
            })?),
            None => None,
        };

        let log_dir = lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string());

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?;

        Ok(Self {
            database_url,
            rust_log,
            bind_addr,
            questions_per_page,
            quiz_seed,
            log_dir,
            db_max_connections,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
