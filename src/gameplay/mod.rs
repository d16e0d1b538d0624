pub mod action;
pub mod engine;
pub mod error;
pub mod hand_state;
pub mod phase;
pub mod seat;
pub mod settlement;

pub use action::Action;
pub use error::HandError;
pub use hand_state::HandState;
pub use phase::Phase;
pub use seat::{Seat, Status};
pub use settlement::Settlement;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chips;

    fn seats(n: usize, chips: Chips) -> Vec<Seat> {
        (0..n)
            .map(|i| {
                let mut seat = Seat::new(format!("seat-{i}"), format!("Player {i}"), chips);
                seat.status = Status::Active;
                seat
            })
            .collect()
    }

    #[test]
    fn heads_up_blinds_and_first_actor() {
        let state = HandState::start(seats(2, Chips(1000)), 0, Chips(5), Chips(10)).unwrap();
        assert_eq!(state.seats[0].round_contributed, Chips(5));
        assert_eq!(state.seats[1].round_contributed, Chips(10));
        assert_eq!(state.to_act, Some(0));
        assert_eq!(state.current_bet, Chips(10));
    }

    #[test]
    fn three_handed_blinds_and_first_actor() {
        let state = HandState::start(seats(3, Chips(1000)), 0, Chips(5), Chips(10)).unwrap();
        assert_eq!(state.seats[1].round_contributed, Chips(5));
        assert_eq!(state.seats[2].round_contributed, Chips(10));
        assert_eq!(state.to_act, Some(0));
    }

    #[test]
    fn folding_down_to_one_seat_ends_the_hand_without_showdown() {
        let mut state = HandState::start(seats(3, Chips(1000)), 0, Chips(5), Chips(10)).unwrap();
        state.apply("seat-0", Action::Fold).unwrap();
        state.apply("seat-1", Action::Fold).unwrap();
        assert_eq!(state.phase, Phase::Showdown);
        let settlements = state.resolve();
        let winner = settlements.iter().find(|s| s.seat == "seat-2").unwrap();
        assert_eq!(winner.reward, Chips(15));
        assert!(winner.strength.is_none());
    }

    #[test]
    fn short_stack_call_is_promoted_to_all_in() {
        let mut seats = seats(2, Chips(1000));
        seats[0].chips = Chips(7);
        let mut state = HandState::start(seats, 0, Chips(5), Chips(10)).unwrap();
        // seat-0 posted a 5-chip small blind out of a 7-chip stack, leaving 2.
        assert_eq!(state.seats[0].chips, Chips(2));
        state
            .apply("seat-0", Action::Call { amount: Chips(5) })
            .unwrap();
        assert_eq!(state.seats[0].chips, Chips(0));
        assert_eq!(state.seats[0].status, Status::AllIn);
    }

    #[test]
    fn under_min_all_in_raise_does_not_reopen_action() {
        let mut seats = seats(3, Chips(1000));
        seats[0].chips = Chips(15);
        let mut state = HandState::start(seats, 0, Chips(5), Chips(10)).unwrap();
        // seat-0 (dealer, UTG in 3-handed) shoves for less than a full raise.
        state.apply("seat-0", Action::AllIn { amount: Chips(15) }).unwrap();
        assert_eq!(state.min_raise, Chips(10), "min raise unchanged by a sub-minimum shove");
        // seat-1 already posted the small blind and must only call the extra 10,
        // not re-face a reopened raise.
        assert!(state
            .legal_actions()
            .iter()
            .any(|a| matches!(a, Action::Call { amount } if *amount == Chips(10))));
    }

    #[test]
    fn side_pot_excludes_folded_contributions_from_eligibility() {
        let mut seats = seats(3, Chips(100));
        seats[2].chips = Chips(30);
        let mut state = HandState::start(seats, 0, Chips(5), Chips(10)).unwrap();
        state
            .apply("seat-0", Action::Call { amount: Chips(10) })
            .unwrap();
        state
            .apply("seat-1", Action::Raise { amount: Chips(20) })
            .unwrap();
        state
            .apply("seat-2", Action::AllIn { amount: Chips(20) })
            .unwrap();
        state.apply("seat-0", Action::Fold).unwrap();
        // seat-1 raised to a round total of 20 and now owes the extra 10
        // to match seat-2's all-in bump to a round total of 30.
        state
            .apply("seat-1", Action::Call { amount: Chips(10) })
            .unwrap();

        let settlements = state.resolve();
        let total: Chips = settlements.iter().map(|s| s.reward).sum();
        assert_eq!(total, Chips(70), "every committed chip is awarded to someone");
        let folded = settlements.iter().find(|s| s.seat == "seat-0").unwrap();
        assert_eq!(folded.reward, Chips(0), "a folded seat is never eligible for any pot");
    }
}
