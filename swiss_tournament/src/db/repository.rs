//! Repository trait definitions for testability and dependency injection.
//!
//! The tournament service only talks to the store through
//! [`TournamentRepository`], so tests can swap PostgreSQL for an in-memory
//! implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::tournament::{MatchRecord, PlayerId, Standing, TournamentError, TournamentResult};

/// Trait for player and match storage
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Insert a player with zero wins and zero matches, returning the new ID
    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId>;

    /// Remove every player row, returning how many were removed
    async fn delete_all_players(&self) -> TournamentResult<u64>;

    /// Remove every match row, returning how many were removed
    async fn delete_all_matches(&self) -> TournamentResult<u64>;

    /// Number of registered players
    async fn count_players(&self) -> TournamentResult<i64>;

    /// All players ordered by wins (most first), then by ID
    async fn fetch_standings(&self) -> TournamentResult<Vec<Standing>>;

    /// Find a single player
    async fn fetch_player(&self, id: PlayerId) -> TournamentResult<Option<Standing>>;

    /// All match rows in insertion order
    async fn fetch_matches(&self) -> TournamentResult<Vec<MatchRecord>>;

    /// Insert a match row and bump both players' counters atomically
    ///
    /// Fails with [`TournamentError::SelfMatch`] when both sides are the same
    /// player and with [`TournamentError::PlayerNotFound`] if either player is
    /// missing. Nothing is written in either case.
    async fn record_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> TournamentResult<MatchRecord>;
}

/// Default PostgreSQL implementation of `TournamentRepository`
#[derive(Clone)]
pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn standing_from_row(row: &sqlx::postgres::PgRow) -> Standing {
    Standing {
        id: row.get("id"),
        name: row.get("name"),
        wins: row.get("wins"),
        matches: row.get("matches"),
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn insert_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let row = sqlx::query("INSERT INTO player (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("id"))
    }

    async fn delete_all_players(&self) -> TournamentResult<u64> {
        let result = sqlx::query("DELETE FROM player").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete_all_matches(&self) -> TournamentResult<u64> {
        let result = sqlx::query("DELETE FROM matches").execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn count_players(&self) -> TournamentResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS num FROM player")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("num"))
    }

    async fn fetch_standings(&self) -> TournamentResult<Vec<Standing>> {
        let rows = sqlx::query(
            "SELECT id, name, wins, matches FROM player ORDER BY wins DESC, id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(standing_from_row).collect())
    }

    async fn fetch_player(&self, id: PlayerId) -> TournamentResult<Option<Standing>> {
        let row = sqlx::query("SELECT id, name, wins, matches FROM player WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(standing_from_row))
    }

    async fn fetch_matches(&self) -> TournamentResult<Vec<MatchRecord>> {
        let rows = sqlx::query("SELECT id, winner, loser FROM matches ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| MatchRecord {
                id: row.get("id"),
                winner: row.get("winner"),
                loser: row.get("loser"),
            })
            .collect())
    }

    async fn record_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> TournamentResult<MatchRecord> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }

        // Dropping `tx` without commit rolls every statement back
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query("INSERT INTO matches (winner, loser) VALUES ($1, $2) RETURNING id")
            .bind(winner)
            .bind(loser)
            .fetch_one(&mut *tx)
            .await?;
        let id: i64 = row.get("id");

        let updated = sqlx::query("UPDATE player SET wins = wins + 1 WHERE id = $1")
            .bind(winner)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(TournamentError::PlayerNotFound(winner));
        }

        let updated = sqlx::query("UPDATE player SET matches = matches + 1 WHERE id = $1")
            .bind(loser)
            .execute(&mut *tx)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(TournamentError::PlayerNotFound(loser));
        }

        sqlx::query("UPDATE player SET matches = matches + 1 WHERE id = $1")
            .bind(winner)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(MatchRecord { id, winner, loser })
    }
}
