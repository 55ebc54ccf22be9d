//! Typed service configuration.
//!
//! Everything comes from `RETENTION_ADVISOR__<SECTION>__<KEY>` environment
//! variables, optionally seeded from a `.env` file:
//!
//! ```text
//! RETENTION_ADVISOR__DATABASE__URL=postgresql://hr@db/workforce
//! RETENTION_ADVISOR__SERVER__LOG_FORMAT=json
//! RETENTION_ADVISOR__ENGINE__HIGH_RISK_THRESHOLD=0.7
//! ```
//!
//! Only `database.url` is required.

mod database;
mod engine;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "RETENTION_ADVISOR";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub database: DatabaseConfig,

    #[serde(default)]
    pub engine: EngineConfig,
}

impl AppConfig {
    /// Reads and validates the configuration.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config: Self = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.engine.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Environment variables are process-global.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "RETENTION_ADVISOR__DATABASE__URL",
        "RETENTION_ADVISOR__SERVER__PORT",
        "RETENTION_ADVISOR__SERVER__LOG_FORMAT",
        "RETENTION_ADVISOR__ENGINE__MAX_RESULTS",
        "RETENTION_ADVISOR__ENGINE__HIGH_RISK_THRESHOLD",
    ];

    fn load_with(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for var in VARS {
            env::remove_var(var);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        for var in VARS {
            env::remove_var(var);
        }
        result
    }

    const DATABASE: (&str, &str) = (
        "RETENTION_ADVISOR__DATABASE__URL",
        "postgresql://hr@localhost/workforce",
    );

    #[test]
    fn only_database_url_is_required() {
        let config = load_with(&[DATABASE]).unwrap();

        assert_eq!(config.database.url, "postgresql://hr@localhost/workforce");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Compact);
        assert_eq!(config.engine.max_results, 5);
        assert_eq!(config.engine.max_results_limit, 20);
        assert!((config.engine.high_risk_threshold - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn nested_keys_override_defaults() {
        let config = load_with(&[
            DATABASE,
            ("RETENTION_ADVISOR__SERVER__PORT", "3000"),
            ("RETENTION_ADVISOR__SERVER__LOG_FORMAT", "json"),
            ("RETENTION_ADVISOR__ENGINE__MAX_RESULTS", "3"),
            ("RETENTION_ADVISOR__ENGINE__HIGH_RISK_THRESHOLD", "0.8"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.engine.max_results, 3);
        assert!((config.engine.high_risk_threshold - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_database_url_fails() {
        assert!(matches!(load_with(&[]), Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn out_of_range_threshold_fails_validation() {
        let result = load_with(&[
            DATABASE,
            ("RETENTION_ADVISOR__ENGINE__HIGH_RISK_THRESHOLD", "1.5"),
        ]);
        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(
                ValidationError::InvalidHighRiskThreshold
            ))
        ));
    }
}
