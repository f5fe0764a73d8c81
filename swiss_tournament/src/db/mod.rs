//! Database module providing PostgreSQL connection pooling and utilities.
//!
//! This module manages the database connection pool using sqlx, the schema
//! bootstrap, and the repository abstraction the tournament service runs on.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod config;
pub mod repository;

pub use config::DatabaseConfig;
pub use repository::{PgTournamentRepository, TournamentRepository};

/// Table definitions for players and matches
pub const SCHEMA: &str = include_str!("schema.sql");

/// Database connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// # Arguments
    ///
    /// * `config` - Database configuration
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swiss_tournament::db::{Database, DatabaseConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), sqlx::Error> {
    ///     let config = DatabaseConfig::from_env();
    ///     let db = Database::new(&config).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `player` and `matches` tables if they do not exist yet
    pub async fn create_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        log::info!("Tournament schema ready");
        Ok(())
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the database connection pool
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_declares_both_tables() {
        assert!(SCHEMA.contains("CREATE TABLE IF NOT EXISTS player"));
        assert!(SCHEMA.contains("CREATE TABLE IF NOT EXISTS matches"));
    }

    #[tokio::test]
    #[ignore = "Requires database setup"]
    async fn test_database_connection() {
        let config = DatabaseConfig::from_env();

        let db = Database::new(&config)
            .await
            .expect("Failed to connect to database");
        db.health_check().await.expect("Health check failed");
        db.create_schema().await.expect("Schema creation failed");
        // Bootstrap must be repeatable
        db.create_schema().await.expect("Second schema creation failed");
        db.close().await;
    }
}
