//! Configuration management for the library catalog

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct LoanConfig {
    /// Loan period applied to every issued copy
    pub duration_days: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub loans: LoanConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Environment variables (with prefix LIBRARY_), e.g. LIBRARY_LOANS__DURATION_DAYS
            .add_source(
                Environment::with_prefix("LIBRARY")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.loans.duration()?;
        Ok(config)
    }
}

impl LoanConfig {
    /// Loan period as a duration. Must be a positive number of days.
    pub fn duration(&self) -> Result<chrono::Duration, ConfigError> {
        if self.duration_days <= 0 {
            return Err(ConfigError::Message(format!(
                "loans.duration_days must be positive, got {}",
                self.duration_days
            )));
        }
        chrono::Duration::try_days(self.duration_days).ok_or_else(|| {
            ConfigError::Message(format!(
                "loans.duration_days out of range: {}",
                self.duration_days
            ))
        })
    }
}

impl Default for LoanConfig {
    fn default() -> Self {
        Self { duration_days: 7 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
