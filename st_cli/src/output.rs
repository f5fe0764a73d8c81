//! Plain-text rendering for standings and pairings.

use std::fmt::Write;
use swiss_tournament::tournament::{ConsistencyReport, RoundPairings, Standing};

/// Render standings as an aligned table, first place first
pub fn standings_table(standings: &[Standing]) -> String {
    let name_width = standings
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:>6}  {:<name_width$}  {:>4}  {:>6}  {:>7}",
        "Rank", "ID", "Name", "Wins", "Losses", "Matches"
    );
    for (rank, standing) in standings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}  {:>6}  {:<name_width$}  {:>4}  {:>6}  {:>7}",
            rank + 1,
            standing.id,
            standing.name,
            standing.wins,
            standing.losses(),
            standing.matches
        );
    }
    out
}

/// Render one line per pairing, plus the player sitting out if any
pub fn round_lines(round: &RoundPairings) -> String {
    let mut out = String::new();
    for (table, pairing) in round.pairings.iter().enumerate() {
        let _ = writeln!(
            out,
            "Table {}: {} ({}) vs {} ({})",
            table + 1,
            pairing.name1,
            pairing.id1,
            pairing.name2,
            pairing.id2
        );
    }
    if let Some(player) = &round.unpaired {
        let _ = writeln!(out, "Unpaired: {} ({})", player.name, player.id);
    }
    out
}

/// Summarise a consistency check
pub fn consistency_summary(report: &ConsistencyReport) -> String {
    if report.is_consistent() {
        return "Standings are consistent with the match table\n".to_string();
    }

    let mut out = String::new();
    if !report.mismatched.is_empty() {
        let ids: Vec<String> = report.mismatched.iter().map(|id| id.to_string()).collect();
        let _ = writeln!(out, "Counters out of date for player(s): {}", ids.join(", "));
    }
    if report.orphaned_matches > 0 {
        let _ = writeln!(
            out,
            "{} match row(s) reference deleted players",
            report.orphaned_matches
        );
    }
    out
}
