//! Tournament data models for standings and pairings.

use serde::{Deserialize, Serialize};

/// Player ID type (assigned by the store)
pub type PlayerId = i64;

/// One row of the standings table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player ID
    pub id: PlayerId,
    /// Sanitized display name
    pub name: String,
    /// Matches won
    pub wins: i32,
    /// Matches played
    pub matches: i32,
}

impl Standing {
    /// Matches played but not won
    pub fn losses(&self) -> i32 {
        self.matches - self.wins
    }
}

/// A single pairing for the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl From<(&Standing, &Standing)> for Pairing {
    fn from((first, second): (&Standing, &Standing)) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }
}

/// A completed match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Match ID
    pub id: i64,
    /// Winning player
    pub winner: PlayerId,
    /// Losing player
    pub loser: PlayerId,
}

/// Pairings for a round together with the player left without an opponent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairings {
    /// Pairs in standings order, strongest bucket first
    pub pairings: Vec<Pairing>,
    /// Lowest-ranked leftover when the player count is odd
    pub unpaired: Option<Standing>,
}

/// Result of recomputing the aggregate counters from match rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Players whose stored wins or matches disagree with the match rows
    pub mismatched: Vec<PlayerId>,
    /// Match rows referencing a player that no longer exists
    pub orphaned_matches: usize,
}

impl ConsistencyReport {
    /// True when every counter matches and no match row is orphaned
    pub fn is_consistent(&self) -> bool {
        self.mismatched.is_empty() && self.orphaned_matches == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(id: PlayerId, name: &str, wins: i32, matches: i32) -> Standing {
        Standing {
            id,
            name: name.to_string(),
            wins,
            matches,
        }
    }

    #[test]
    fn test_losses() {
        assert_eq!(standing(1, "Alice", 2, 5).losses(), 3);
        assert_eq!(standing(2, "Bob", 0, 0).losses(), 0);
    }

    #[test]
    fn test_pairing_from_standings() {
        let a = standing(7, "Alice", 1, 1);
        let b = standing(9, "Bob", 1, 1);
        let pairing = Pairing::from((&a, &b));

        assert_eq!(pairing.id1, 7);
        assert_eq!(pairing.name1, "Alice");
        assert_eq!(pairing.id2, 9);
        assert_eq!(pairing.name2, "Bob");
    }

    #[test]
    fn test_empty_report_is_consistent() {
        assert!(ConsistencyReport::default().is_consistent());

        let report = ConsistencyReport {
            mismatched: vec![3],
            orphaned_matches: 0,
        };
        assert!(!report.is_consistent());
    }

    #[test]
    fn test_standing_serializes_as_object() {
        let json = serde_json::to_value(standing(1, "Alice", 2, 3)).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["wins"], 2);
        assert_eq!(json["matches"], 3);
    }
}
