//! Tournament manager: registration, match reporting, standings and pairings.

use super::{
    errors::{TournamentError, TournamentResult},
    models::{ConsistencyReport, MatchRecord, Pairing, PlayerId, RoundPairings, Standing},
    pairing::pair_standings,
    sanitize::clean_name,
};
use crate::db::TournamentRepository;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// Tournament manager
#[derive(Clone)]
pub struct TournamentManager {
    repo: Arc<dyn TournamentRepository>,
}

impl TournamentManager {
    /// Create a new tournament manager over the given store
    pub fn new(repo: Arc<dyn TournamentRepository>) -> Self {
        Self { repo }
    }

    /// Remove all match records
    pub async fn delete_matches(&self) -> TournamentResult<u64> {
        let removed = self.repo.delete_all_matches().await?;
        info!("Deleted {} match record(s)", removed);
        Ok(removed)
    }

    /// Remove all player records
    ///
    /// Match rows are left alone. Call [`Self::delete_matches`] first unless
    /// orphaned match rows are acceptable.
    pub async fn delete_players(&self) -> TournamentResult<u64> {
        let removed = self.repo.delete_all_players().await?;
        info!("Deleted {} player(s)", removed);
        Ok(removed)
    }

    /// Remove all matches, then all players
    pub async fn reset(&self) -> TournamentResult<()> {
        self.delete_matches().await?;
        self.delete_players().await?;
        Ok(())
    }

    /// Number of players currently registered
    pub async fn count_players(&self) -> TournamentResult<i64> {
        self.repo.count_players().await
    }

    /// Add a player to the tournament
    ///
    /// The name is stripped of markup before storage and need not be unique.
    /// The store assigns the ID.
    ///
    /// # Returns
    ///
    /// * `TournamentResult<PlayerId>` - ID of the new player
    pub async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let name = clean_name(name);
        let id = self.repo.insert_player(&name).await?;
        info!("Registered player {} as {:?}", id, name);
        Ok(id)
    }

    /// Players and their win records, first place first
    ///
    /// Ties on wins are broken by ID, i.e. registration order.
    pub async fn player_standings(&self) -> TournamentResult<Vec<Standing>> {
        self.repo.fetch_standings().await
    }

    /// Standings rendered as a JSON array
    pub async fn standings_json(&self) -> TournamentResult<String> {
        let standings = self.player_standings().await?;
        Ok(serde_json::to_string_pretty(&standings)?)
    }

    /// Look up a single player
    pub async fn player(&self, id: PlayerId) -> TournamentResult<Standing> {
        self.repo
            .fetch_player(id)
            .await?
            .ok_or(TournamentError::PlayerNotFound(id))
    }

    /// All recorded matches, oldest first
    pub async fn matches(&self) -> TournamentResult<Vec<MatchRecord>> {
        self.repo.fetch_matches().await
    }

    /// Record the outcome of a single match
    ///
    /// The match row and the three counter updates are written in one
    /// transaction.
    ///
    /// # Errors
    ///
    /// * `TournamentError::SelfMatch` - `winner` and `loser` are the same player
    /// * `TournamentError::PlayerNotFound` - Either player does not exist
    pub async fn report_match(
        &self,
        winner: PlayerId,
        loser: PlayerId,
    ) -> TournamentResult<MatchRecord> {
        if winner == loser {
            return Err(TournamentError::SelfMatch(winner));
        }

        let record = self.repo.record_match(winner, loser).await?;
        info!(
            "Recorded match {}: {} beat {}",
            record.id, record.winner, record.loser
        );
        Ok(record)
    }

    /// Pairings for the next round
    ///
    /// Each player appears at most once and is matched against a player
    /// with an equal win count where possible. With an odd number of
    /// players the lowest-ranked leftover is not paired; use
    /// [`Self::next_round`] to find out who that is.
    pub async fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        Ok(self.next_round().await?.pairings)
    }

    /// Pairings for the next round along with any unpaired player
    pub async fn next_round(&self) -> TournamentResult<RoundPairings> {
        let standings = self.player_standings().await?;
        let round = pair_standings(&standings);

        debug!("Computed pairings: {:?}", round.pairings);
        if let Some(player) = &round.unpaired {
            warn!(
                "Odd number of players, {} ({}) is left without an opponent",
                player.id, player.name
            );
        }

        Ok(round)
    }

    /// Recompute every player's counters from the match rows
    ///
    /// Stored counters can drift from the match table if rows were edited
    /// outside this service or players were cleared while matches remained.
    pub async fn check_consistency(&self) -> TournamentResult<ConsistencyReport> {
        let standings = self.player_standings().await?;
        let matches = self.matches().await?;

        // (wins, matches) per player as implied by the match table
        let mut tallies: HashMap<PlayerId, (i32, i32)> =
            standings.iter().map(|s| (s.id, (0, 0))).collect();
        let mut report = ConsistencyReport::default();

        for record in &matches {
            let known = tallies.contains_key(&record.winner) && tallies.contains_key(&record.loser);
            if !known {
                report.orphaned_matches += 1;
            }
            if let Some(tally) = tallies.get_mut(&record.winner) {
                tally.0 += 1;
                tally.1 += 1;
            }
            if let Some(tally) = tallies.get_mut(&record.loser) {
                tally.1 += 1;
            }
        }

        report.mismatched = standings
            .iter()
            .filter(|s| tallies.get(&s.id) != Some(&(s.wins, s.matches)))
            .map(|s| s.id)
            .collect();

        if !report.is_consistent() {
            warn!(
                "Inconsistent standings: {} mismatched player(s), {} orphaned match(es)",
                report.mismatched.len(),
                report.orphaned_matches
            );
        }

        Ok(report)
    }
}
