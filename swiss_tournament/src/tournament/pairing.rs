//! Swiss pairing over a standings snapshot.
//!
//! Players are grouped into buckets by exact win count. Buckets are walked
//! from the highest win count down, and each bucket is paired off in the
//! order its players appear in the standings. When a bucket has an odd
//! number of players, its last player is carried to the front of the next
//! lower bucket and paired there. Whoever is still left after the lowest
//! bucket sits the round out.

use super::models::{Pairing, RoundPairings, Standing};
use std::collections::BTreeMap;

/// Pair players for the next round
///
/// The result only depends on the order and content of `standings`, so the
/// same snapshot always yields the same pairings.
pub fn pair_standings(standings: &[Standing]) -> RoundPairings {
    let mut pairings = Vec::with_capacity(standings.len() / 2);
    let mut carried: Option<&Standing> = None;

    for (_, bucket) in buckets_by_wins(standings).into_iter().rev() {
        let queue: Vec<&Standing> = carried.take().into_iter().chain(bucket).collect();

        let mut pairs = queue.chunks_exact(2);
        for pair in pairs.by_ref() {
            pairings.push(Pairing::from((pair[0], pair[1])));
        }
        carried = pairs.remainder().first().copied();
    }

    RoundPairings {
        pairings,
        unpaired: carried.cloned(),
    }
}

/// Group standings by exact win count, keeping the input order inside each group
fn buckets_by_wins(standings: &[Standing]) -> BTreeMap<i32, Vec<&Standing>> {
    let mut buckets: BTreeMap<i32, Vec<&Standing>> = BTreeMap::new();
    for standing in standings {
        buckets.entry(standing.wins).or_default().push(standing);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tournament::PlayerId;

    fn field(wins: &[i32]) -> Vec<Standing> {
        wins.iter()
            .enumerate()
            .map(|(i, &w)| Standing {
                id: i as PlayerId + 1,
                name: format!("P{}", i + 1),
                wins: w,
                matches: 3,
            })
            .collect()
    }

    fn ids(round: &RoundPairings) -> Vec<(PlayerId, PlayerId)> {
        round.pairings.iter().map(|p| (p.id1, p.id2)).collect()
    }

    #[test]
    fn test_empty_field() {
        let round = pair_standings(&[]);
        assert!(round.pairings.is_empty());
        assert!(round.unpaired.is_none());
    }

    #[test]
    fn test_single_player_sits_out() {
        let round = pair_standings(&field(&[2]));
        assert!(round.pairings.is_empty());
        assert_eq!(round.unpaired.map(|s| s.id), Some(1));
    }

    #[test]
    fn test_four_players_two_buckets() {
        // Retrieval order as PostgreSQL returns it: wins descending
        let standings = field(&[1, 1, 0, 0]);
        let round = pair_standings(&standings);

        assert_eq!(ids(&round), vec![(1, 2), (3, 4)]);
        assert!(round.unpaired.is_none());
    }

    #[test]
    fn test_bucket_order_ignores_input_interleaving() {
        // Wins [0, 0, 1, 1] in ascending retrieval order still pair within buckets
        let standings = field(&[0, 0, 1, 1]);
        let round = pair_standings(&standings);

        assert_eq!(ids(&round), vec![(3, 4), (1, 2)]);
        for pairing in &round.pairings {
            let w1 = standings.iter().find(|s| s.id == pairing.id1).unwrap().wins;
            let w2 = standings.iter().find(|s| s.id == pairing.id2).unwrap().wins;
            assert_eq!(w1, w2);
        }
    }

    #[test]
    fn test_odd_bucket_carries_down() {
        // Three players on 2 wins, one on 1 win
        let round = pair_standings(&field(&[2, 2, 2, 1]));

        assert_eq!(ids(&round), vec![(1, 2), (3, 4)]);
        assert!(round.unpaired.is_none());
    }

    #[test]
    fn test_carry_skips_empty_win_counts() {
        // Nobody on 2 wins, so the leftover on 3 drops straight to 1
        let round = pair_standings(&field(&[3, 1, 3, 3]));

        assert_eq!(ids(&round), vec![(1, 3), (4, 2)]);
    }

    #[test]
    fn test_odd_total_leaves_lowest_unpaired() {
        let round = pair_standings(&field(&[1, 1, 0, 0, 0]));

        assert_eq!(ids(&round), vec![(1, 2), (3, 4)]);
        assert_eq!(round.unpaired.map(|s| s.id), Some(5));
    }

    #[test]
    fn test_carried_player_can_end_up_unpaired() {
        let round = pair_standings(&field(&[2, 1, 1]));

        // Player 1 is carried into the 1-win bucket and pairs with player 2
        assert_eq!(ids(&round), vec![(1, 2)]);
        assert_eq!(round.unpaired.map(|s| s.id), Some(3));
    }

    #[test]
    fn test_deterministic() {
        let standings = field(&[0, 3, 1, 1, 2, 0, 3]);
        assert_eq!(pair_standings(&standings), pair_standings(&standings));
    }
}
