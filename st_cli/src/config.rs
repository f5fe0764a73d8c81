//! CLI configuration management.
//!
//! Merges the `--db-url` override with the environment and validates the
//! pool settings before a connection is attempted.

use swiss_tournament::db::DatabaseConfig;

/// Configuration for a single CLI invocation
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Database configuration
    pub database: DatabaseConfig,
    /// Print machine-readable JSON instead of tables
    pub json: bool,
}

impl CliConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `database_url_override` - Optional database URL override (from CLI args)
    /// * `json` - Whether output should be JSON
    pub fn from_env(database_url_override: Option<String>, json: bool) -> Self {
        let mut database = DatabaseConfig::from_env();
        if let Some(url) = database_url_override {
            database = database.with_database_url(url);
        }

        Self { database, json }
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.database_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: "DATABASE_URL".to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Invalid {
                var: "DB_MIN_CONNECTIONS".to_string(),
                reason: format!(
                    "Must not exceed max connections ({})",
                    self.database.max_connections
                ),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(database: DatabaseConfig) -> CliConfig {
        CliConfig {
            database,
            json: false,
        }
    }

    #[test]
    fn test_override_replaces_url() {
        let config = CliConfig::from_env(Some("postgres://elsewhere/tournament".to_string()), true);
        assert_eq!(config.database.database_url, "postgres://elsewhere/tournament");
        assert!(config.json);
    }

    #[test]
    fn test_development_config_is_valid() {
        assert!(config(DatabaseConfig::development()).validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let err = config(DatabaseConfig::development().with_database_url(" "))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn test_min_above_max_rejected() {
        let database = DatabaseConfig {
            min_connections: 10,
            max_connections: 2,
            ..DatabaseConfig::development()
        };

        let err = config(database).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "DB_MIN_CONNECTIONS"));
    }

    #[test]
    fn test_zero_max_rejected() {
        let database = DatabaseConfig {
            min_connections: 0,
            max_connections: 0,
            ..DatabaseConfig::development()
        };

        assert!(config(database).validate().is_err());
    }
}
