use super::phase::Phase;
use super::seat::Seat;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::Chips;

/// The full state of one hand in progress: who's holding what, whose turn
/// it is, and how much is on the table. Owned exclusively by the room that
/// deals it; every mutation goes through [`super::engine`]'s methods so
/// the betting-round invariants never get out of sync with each other.
#[derive(Debug, Clone)]
pub struct HandState {
    pub seats: Vec<Seat>,
    pub board: Board,
    pub deck: Deck,
    pub phase: Phase,
    pub dealer: usize,
    pub to_act: Option<usize>,
    pub current_bet: Chips,
    pub min_raise: Chips,
    pub last_aggressor: Option<usize>,
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl HandState {
    pub fn seat(&self, id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }

    pub fn seat_index(&self, id: &str) -> Option<usize> {
        self.seats.iter().position(|s| s.id == id)
    }

    pub fn seats_in_hand(&self) -> impl Iterator<Item = &Seat> {
        self.seats.iter().filter(|s| s.is_in_hand())
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// The hand has played out to showdown (or folded out to one seat)
    /// but [`super::engine::HandState::resolve`] hasn't run yet — the
    /// room still owes it a settlement before the hand can be put to bed.
    pub fn needs_resolution(&self) -> bool {
        self.phase == Phase::Showdown
    }

    /// total chips committed by everyone this hand; equals the sum of all
    /// eventual side pots.
    pub fn total_pot(&self) -> Chips {
        self.seats.iter().map(|s| s.hand_contributed).sum()
    }
}
