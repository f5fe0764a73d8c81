//! Tournament error types.

use super::models::PlayerId;
use thiserror::Error;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Winner or loser does not exist
    #[error("Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// A match reported with the same player on both sides
    #[error("Player {0} cannot play against themselves")]
    SelfMatch(PlayerId),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TournamentError {
    /// Get a client-safe error message
    ///
    /// Database errors are collapsed so SQL details and connection strings
    /// are not echoed back to whoever submitted the request.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Database(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
