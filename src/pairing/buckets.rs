use crate::database::models::{Pairing, Standing};

const WINNERS_BUCKET: i32 = 1;
const NEWCOMERS_BUCKET: i32 = 0;

/// Outcome of splitting standings into next-round matchups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PairingPlan {
    pub pairings: Vec<Pairing>,
    /// Odd player out of the leftover bucket; no byes are assigned.
    pub unpaired: Vec<Standing>,
    /// Players whose win total falls outside the one-win and zero-win buckets.
    pub excluded: Vec<Standing>,
}

/// Pair one-win players with zero-win players position by position.
///
/// Both buckets keep the order of `standings`. Whoever is left in the larger
/// bucket is paired with their neighbour in that bucket.
pub fn pair_standings(standings: &[Standing]) -> PairingPlan {
    let (winners, newcomers, excluded) = split_buckets(standings);

    let mut pairings: Vec<Pairing> = winners
        .iter()
        .zip(newcomers.iter())
        .map(|(first, second)| Pairing::between(first, second))
        .collect();

    let crossed = pairings.len();
    let leftover = if winners.len() > newcomers.len() {
        &winners[crossed..]
    } else {
        &newcomers[crossed..]
    };
    let unpaired = pair_within_bucket(leftover, &mut pairings);

    PairingPlan {
        pairings,
        unpaired,
        excluded,
    }
}

fn split_buckets(standings: &[Standing]) -> (Vec<Standing>, Vec<Standing>, Vec<Standing>) {
    let mut winners = Vec::new();
    let mut newcomers = Vec::new();
    let mut excluded = Vec::new();

    for standing in standings {
        match standing.wins {
            WINNERS_BUCKET => winners.push(standing.clone()),
            NEWCOMERS_BUCKET => newcomers.push(standing.clone()),
            _ => excluded.push(standing.clone()),
        }
    }

    (winners, newcomers, excluded)
}

fn pair_within_bucket(bucket: &[Standing], pairings: &mut Vec<Pairing>) -> Vec<Standing> {
    let mut chunks = bucket.chunks_exact(2);
    for pair in chunks.by_ref() {
        pairings.push(Pairing::between(&pair[0], &pair[1]));
    }
    chunks.remainder().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standing(player_id: i32, wins: i32, matches: i32) -> Standing {
        Standing {
            player_id,
            player_name: format!("Player {player_id}"),
            wins,
            matches,
        }
    }

    fn ids(pairings: &[Pairing]) -> Vec<(i32, i32)> {
        pairings.iter().map(|p| (p.player_id1, p.player_id2)).collect()
    }

    #[test]
    fn test_first_round_pairs_neighbours() {
        let standings: Vec<_> = (1..=4).map(|id| standing(id, 0, 0)).collect();

        let plan = pair_standings(&standings);

        assert_eq!(ids(&plan.pairings), vec![(1, 2), (3, 4)]);
        assert!(plan.unpaired.is_empty());
        assert!(plan.excluded.is_empty());
    }

    #[test]
    fn test_winners_meet_distinct_newcomers() {
        let standings = vec![
            standing(1, 1, 1),
            standing(3, 1, 1),
            standing(2, 0, 1),
            standing(4, 0, 1),
        ];

        let plan = pair_standings(&standings);

        assert_eq!(ids(&plan.pairings), vec![(1, 2), (3, 4)]);
    }

    #[test]
    fn test_uneven_buckets_pair_leftovers() {
        let standings = vec![
            standing(1, 1, 1),
            standing(2, 0, 1),
            standing(3, 0, 0),
            standing(4, 0, 0),
            standing(5, 0, 0),
        ];

        let plan = pair_standings(&standings);

        assert_eq!(ids(&plan.pairings), vec![(1, 2), (3, 4)]);
        assert_eq!(plan.unpaired, vec![standing(5, 0, 0)]);
    }

    #[test]
    fn test_higher_win_totals_are_excluded() {
        let standings = vec![standing(1, 2, 2), standing(2, 1, 2), standing(3, 0, 2)];

        let plan = pair_standings(&standings);

        assert_eq!(ids(&plan.pairings), vec![(2, 3)]);
        assert_eq!(plan.excluded, vec![standing(1, 2, 2)]);
    }

    #[test]
    fn test_every_player_appears_at_most_once() {
        let standings: Vec<_> = (1..=7)
            .map(|id| standing(id, if id % 3 == 0 { 1 } else { 0 }, 1))
            .collect();

        let plan = pair_standings(&standings);

        let mut seen: Vec<i32> = plan
            .pairings
            .iter()
            .flat_map(|p| [p.player_id1, p.player_id2])
            .chain(plan.unpaired.iter().map(|s| s.player_id))
            .collect();
        seen.sort();
        assert_eq!(seen, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_standings() {
        assert_eq!(pair_standings(&[]), PairingPlan::default());
    }
}
