use std::str::FromStr;

use jsonwebtoken::Algorithm;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_ALGORITHM: &str = "HS256";
const DEFAULT_JWT_EXPIRE_MINUTES: i64 = 60;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

pub struct Config {
    pub database_url: String,

    pub jwt_secret_key: String,
    pub jwt_algorithm: Algorithm,
    pub jwt_expire_minutes: i64,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable by name, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value valid
    /// - `Err(AppError::ConfigErr)` - Missing required variable or invalid value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let jwt_algorithm = parse_algorithm(
            &lookup("JWT_ALGORITHM").unwrap_or_else(|| DEFAULT_JWT_ALGORITHM.to_string()),
        )?;

        let jwt_expire_minutes = match lookup("JWT_EXPIRE_MINUTES") {
            Some(value) => parse_expire_minutes(&value)?,
            None => DEFAULT_JWT_EXPIRE_MINUTES,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret_key: required("JWT_SECRET_KEY")?,
            jwt_algorithm,
            jwt_expire_minutes,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

/// Only HMAC algorithms are accepted since tokens are signed with a shared secret.
fn parse_algorithm(value: &str) -> Result<Algorithm, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "JWT_ALGORITHM".to_string(),
        reason: reason.to_string(),
    };

    match Algorithm::from_str(value) {
        Ok(algorithm @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(algorithm),
        Ok(_) => Err(invalid("only HS256, HS384 and HS512 are supported")),
        Err(_) => Err(invalid("unknown algorithm")),
    }
}

fn parse_expire_minutes(value: &str) -> Result<i64, ConfigError> {
    match value.parse::<i64>() {
        Ok(minutes) if minutes > 0 => Ok(minutes),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "JWT_EXPIRE_MINUTES".to_string(),
            reason: format!("expected a positive integer, got '{}'", value),
        }),
    }
}
