//! Side-pot layering.
//!
//! A hand where one or more players go all-in splits the pot into layers:
//! every chip contributed up to the smallest all-in amount is contested by
//! everyone who put in at least that much, the next layer up is contested
//! only by those who put in more, and so on. A folded player's chips still
//! count toward every layer's amount but never make them eligible to win
//! one.

use crate::{Chips, SeatId};
use std::collections::HashMap;

/// One layer of the pot: an amount, and the seats that can win it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Pot {
    pub amount: Chips,
    pub eligible: Vec<SeatId>,
}

/// Splits total contributions into side pots.
///
/// `contributions` maps every seat that put chips in this hand (folded or
/// not) to the total it has contributed so far. `folded` names the seats
/// that cannot win any pot. Adjacent layers with identical eligibility
/// are merged, so a hand with no all-ins always yields exactly one pot.
pub fn compute_side_pots(
    contributions: &HashMap<SeatId, Chips>,
    folded: &std::collections::HashSet<SeatId>,
) -> Vec<Pot> {
    let mut levels: Vec<u32> = contributions
        .values()
        .map(|c| c.0)
        .filter(|&n| n > 0)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<Pot> = Vec::new();
    let mut floor = 0u32;
    for &level in &levels {
        let slice = level - floor;
        if slice == 0 {
            floor = level;
            continue;
        }
        let contributors: Vec<&SeatId> = contributions
            .iter()
            .filter(|(_, c)| c.0 >= level)
            .map(|(seat, _)| seat)
            .collect();
        let amount = Chips(slice * contributors.len() as u32);
        let mut eligible: Vec<SeatId> = contributors
            .into_iter()
            .filter(|seat| !folded.contains(*seat))
            .cloned()
            .collect();
        eligible.sort_unstable();
        match pots.last_mut() {
            Some(prev) if prev.eligible == eligible => prev.amount += amount,
            _ => pots.push(Pot { amount, eligible }),
        }
        floor = level;
    }
    pots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contrib(pairs: &[(&str, u32)]) -> HashMap<SeatId, Chips> {
        pairs
            .iter()
            .map(|(seat, amount)| (seat.to_string(), Chips(*amount)))
            .collect()
    }

    #[test]
    fn two_players_equal_all_in_makes_one_pot() {
        let c = contrib(&[("a", 100), ("b", 100)]);
        let pots = compute_side_pots(&c, &Default::default());
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amount, Chips(200));
        assert_eq!(pots[0].eligible, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn three_players_staggered_all_in_makes_three_layers() {
        let c = contrib(&[("a", 100), ("b", 200), ("c", 300)]);
        let pots = compute_side_pots(&c, &Default::default());
        assert_eq!(pots.len(), 3);
        assert_eq!(pots[0].amount, Chips(300));
        assert_eq!(pots[0].eligible, vec!["a", "b", "c"]);
        assert_eq!(pots[1].amount, Chips(200));
        assert_eq!(pots[1].eligible, vec!["b", "c"]);
        assert_eq!(pots[2].amount, Chips(100));
        assert_eq!(pots[2].eligible, vec!["c"]);
    }

    #[test]
    fn four_players_two_pairs_of_equal_all_ins_merges_adjacent_layers() {
        let c = contrib(&[("a", 100), ("b", 100), ("c", 300), ("d", 300)]);
        let pots = compute_side_pots(&c, &Default::default());
        assert_eq!(pots.len(), 2);
        assert_eq!(pots[0].amount, Chips(400));
        assert_eq!(pots[0].eligible, vec!["a", "b", "c", "d"]);
        assert_eq!(pots[1].amount, Chips(400));
        assert_eq!(pots[1].eligible, vec!["c", "d"]);
    }

    #[test]
    fn folded_player_contributes_chips_but_is_never_eligible() {
        let c = contrib(&[("a", 100), ("b", 100), ("c", 100)]);
        let folded: std::collections::HashSet<SeatId> = ["b".to_string()].into_iter().collect();
        let pots = compute_side_pots(&c, &folded);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].amount, Chips(300));
        assert_eq!(pots[0].eligible, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn everyone_folded_but_one_gives_a_single_uncontested_pot() {
        let c = contrib(&[("a", 50), ("b", 50)]);
        let folded: std::collections::HashSet<SeatId> = ["b".to_string()].into_iter().collect();
        let pots = compute_side_pots(&c, &folded);
        assert_eq!(pots.len(), 1);
        assert_eq!(pots[0].eligible, vec!["a".to_string()]);
        assert_eq!(pots[0].amount, Chips(100));
    }

    #[test]
    fn no_pot_is_ever_zero() {
        let c = contrib(&[("a", 50), ("b", 200), ("c", 200), ("d", 500)]);
        let pots = compute_side_pots(&c, &Default::default());
        assert!(pots.iter().all(|p| p.amount.0 > 0));
        let total_contrib: u32 = c.values().map(|v| v.0).sum();
        let total_pots: u32 = pots.iter().map(|p| p.amount.0).sum();
        assert_eq!(total_pots, total_contrib);
    }
}
