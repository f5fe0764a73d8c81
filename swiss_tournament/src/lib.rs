//! # Swiss Tournament
//!
//! Standings and pairings for a Swiss-system tournament backed by PostgreSQL.
//!
//! Players register, matches are reported one at a time, and each round is
//! paired by grouping players with equal win counts. There is no elimination
//! and no persisted round: every pairing is derived from the current
//! standings.
//!
//! ## Core Modules
//!
//! - [`db`]: Connection pool, schema bootstrap and the repository trait
//! - [`tournament`]: The service surface, pairing algorithm and models
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::{Database, DatabaseConfig, PgTournamentRepository};
//! use swiss_tournament::tournament::TournamentManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::from_env()).await?;
//!     db.create_schema().await?;
//!
//!     let repo = PgTournamentRepository::new(db.pool().clone());
//!     let manager = TournamentManager::new(Arc::new(repo));
//!
//!     let alice = manager.register_player("Alice").await?;
//!     let bob = manager.register_player("Bob").await?;
//!     manager.report_match(alice, bob).await?;
//!
//!     for pairing in manager.swiss_pairings().await? {
//!         println!("{} vs {}", pairing.name1, pairing.name2);
//!     }
//!     Ok(())
//! }
//! ```

/// Database pool, configuration and repository abstractions.
pub mod db;

/// Standings, match reporting and Swiss pairing.
pub mod tournament;

pub use tournament::{
    Pairing, PlayerId, RoundPairings, Standing, TournamentError, TournamentManager,
    TournamentResult,
};
