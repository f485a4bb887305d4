//! Server configuration read from environment variables.

use crate::server::error::config::ConfigError;

/// Age in days after which log entries are deleted when `LOG_RETENTION_DAYS` is unset
pub const DEFAULT_LOG_RETENTION_DAYS: u32 = 30;
/// Telemetry queue size when `TELEMETRY_QUEUE_CAPACITY` is unset
pub const DEFAULT_TELEMETRY_QUEUE_CAPACITY: usize = 1024;

/// Server configuration, see [`Config::from_env`]
pub struct Config {
    /// Database connection string
    pub database_url: String,
    /// Valkey/Redis URL of the session store
    pub valkey_url: String,
    /// Shared secret the auth provider signs access tokens with
    pub auth_jwt_secret: String,
    /// Base URL of the external device directory
    pub device_directory_url: String,
    /// Age in days after which the scheduled sweep deletes log entries
    pub log_retention_days: u32,
    /// Maximum number of telemetry jobs waiting for the worker, at least 1
    pub telemetry_queue_capacity: usize,
}

impl Config {
    /// Reads the configuration from the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable failed to parse, or the telemetry
    ///   queue capacity is 0
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            auth_jwt_secret: required("AUTH_JWT_SECRET")?,
            device_directory_url: required("DEVICE_DIRECTORY_URL")?,
            log_retention_days: optional("LOG_RETENTION_DAYS", DEFAULT_LOG_RETENTION_DAYS)?,
            telemetry_queue_capacity: at_least_one(
                "TELEMETRY_QUEUE_CAPACITY",
                optional("TELEMETRY_QUEUE_CAPACITY", DEFAULT_TELEMETRY_QUEUE_CAPACITY)?,
            )?,
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(value) => parse_value(var, &value),
        Err(_) => Ok(default),
    }
}

fn at_least_one(var: &str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(value)
}

fn parse_value<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::{at_least_one, parse_value};
    use crate::server::error::config::ConfigError;

    #[test]
    fn parses_numeric_value() {
        let days: u32 = parse_value("LOG_RETENTION_DAYS", " 14 ").unwrap();

        assert_eq!(days, 14);
    }

    #[test]
    fn rejects_invalid_value() {
        let result: Result<usize, _> = parse_value("TELEMETRY_QUEUE_CAPACITY", "lots");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "TELEMETRY_QUEUE_CAPACITY"
        ));
    }

    #[test]
    fn rejects_zero_queue_capacity() {
        let capacity: usize = parse_value("TELEMETRY_QUEUE_CAPACITY", "0").unwrap();

        let result = at_least_one("TELEMETRY_QUEUE_CAPACITY", capacity);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, reason })
                if var == "TELEMETRY_QUEUE_CAPACITY" && reason == "must be at least 1"
        ));
    }

    #[test]
    fn keeps_positive_queue_capacity() {
        assert_eq!(at_least_one("TELEMETRY_QUEUE_CAPACITY", 64).unwrap(), 64);
    }
}
