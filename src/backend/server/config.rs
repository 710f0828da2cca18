/**
 * Server Configuration
 *
 * Loads server configuration from environment variables.
 *
 * # Variables
 *
 * | Variable             | Default       | Notes                                 |
 * |----------------------|---------------|---------------------------------------|
 * | `JWT_SECRET`         | -             | Required                              |
 * | `DATABASE_URL`       | -             | Or `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` |
 * | `SERVER_PORT`        | `3000`        |                                       |
 * | `UPLOAD_DIR`         | `uploads`     |                                       |
 * | `DB_MAX_CONNECTIONS` | `10`          |                                       |
 * | `BCRYPT_COST`        | `10`          | 10 to 31                              |
 *
 * # Error Handling
 *
 * A missing secret or database location is fatal: the binary logs the
 * error and exits non-zero before binding its port.
 */

use std::path::PathBuf;

use thiserror::Error;

use crate::backend::auth::service::DEFAULT_HASH_COST;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const MIN_HASH_COST: u32 = 10;
const MAX_HASH_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET is not defined")]
    MissingSecret,
    #[error("DATABASE_URL is not defined and DB_HOST/DB_USER/DB_PASSWORD/DB_NAME are incomplete")]
    MissingDatabaseUrl,
    #[error("invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("BCRYPT_COST must be between 10 and 31, got {0}")]
    HashCostOutOfRange(u32),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub jwt_secret: String,
    pub database_url: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub max_connections: u32,
    pub hash_cost: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a lookup function
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingSecret)?;

        let database_url = match get("DATABASE_URL") {
            Some(url) => url,
            None => compose_database_url(&get).ok_or(ConfigError::MissingDatabaseUrl)?,
        };

        let port = parse_or(get("SERVER_PORT"), "SERVER_PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(
            get("DB_MAX_CONNECTIONS"),
            "DB_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let hash_cost = parse_or(get("BCRYPT_COST"), "BCRYPT_COST", DEFAULT_HASH_COST)?;
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&hash_cost) {
            return Err(ConfigError::HashCostOutOfRange(hash_cost));
        }

        let upload_dir = get("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));

        Ok(Self {
            jwt_secret,
            database_url,
            port,
            upload_dir,
            max_connections,
            hash_cost,
        })
    }
}

/// Build a Postgres URL from the discrete `DB_*` variables
fn compose_database_url<F>(get: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let host = get("DB_HOST")?;
    let user = get("DB_USER")?;
    let password = get("DB_PASSWORD")?;
    let name = get("DB_NAME")?;

    let authority = match get("DB_PORT") {
        Some(port) => format!("{host}:{port}"),
        None => host,
    };

    Some(format!("postgres://{user}:{password}@{authority}/{name}"))
}

fn parse_or<T: std::str::FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/vocab"),
        ])
        .unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
        assert_eq!(config.database_url, "postgres://localhost/vocab");
        assert_eq!(config.port, 3000);
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.hash_cost, 10);
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let result = config_from(&[("DATABASE_URL", "postgres://localhost/vocab")]);
        assert_eq!(result.unwrap_err(), ConfigError::MissingSecret);

        let result = config_from(&[
            ("JWT_SECRET", ""),
            ("DATABASE_URL", "postgres://localhost/vocab"),
        ]);
        assert_eq!(result.unwrap_err(), ConfigError::MissingSecret);
    }

    #[test]
    fn test_database_url_from_parts() {
        let config = config_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DB_HOST", "db"),
            ("DB_PORT", "5433"),
            ("DB_USER", "app"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "vocab"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "postgres://app:pw@db:5433/vocab");
    }

    #[test]
    fn test_missing_database_location() {
        let result = config_from(&[("JWT_SECRET", "s3cret"), ("DB_HOST", "db")]);
        assert_eq!(result.unwrap_err(), ConfigError::MissingDatabaseUrl);
    }

    #[test]
    fn test_invalid_port() {
        let result = config_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/vocab"),
            ("SERVER_PORT", "eighty"),
        ]);
        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidNumber {
                key: "SERVER_PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn test_hash_cost_floor() {
        let result = config_from(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/vocab"),
            ("BCRYPT_COST", "4"),
        ]);
        assert_eq!(result.unwrap_err(), ConfigError::HashCostOutOfRange(4));
    }
}
