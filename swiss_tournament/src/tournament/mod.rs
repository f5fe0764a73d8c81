//! Tournament module for Swiss-system standings and pairings.
//!
//! This module provides:
//! - Player registration with name sanitization
//! - Transactional match reporting
//! - Standings ordered first place first
//! - Swiss pairing by win-count buckets
//! - Aggregate consistency checks against the match table
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::{Database, PgTournamentRepository};
//! use swiss_tournament::tournament::TournamentManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&Default::default()).await?;
//!     let manager = TournamentManager::new(Arc::new(PgTournamentRepository::new(
//!         db.pool().clone(),
//!     )));
//!
//!     let round = manager.next_round().await?;
//!     println!("{} pairing(s)", round.pairings.len());
//!     if let Some(player) = round.unpaired {
//!         println!("{} sits out", player.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod pairing;
pub mod sanitize;

pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{ConsistencyReport, MatchRecord, Pairing, PlayerId, RoundPairings, Standing};
pub use pairing::pair_standings;
pub use sanitize::clean_name;
