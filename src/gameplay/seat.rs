use crate::cards::hole::Hole;
use crate::{Chips, SeatId};
use std::fmt::{Display, Formatter, Result};

/// A seat's standing within the current hand. `SittingOut` is a seat
/// waiting for the next hand to be dealt in — freshly joined, or between
/// hands — while `Out` is a seat eliminated by a zero stack; both hold no
/// cards and are skipped until (or unless) a hand deals them back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Status {
    Active,
    Folded,
    AllIn,
    SittingOut,
    Out,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Status::Active => write!(f, "active"),
            Status::Folded => write!(f, "folded"),
            Status::AllIn => write!(f, "all-in"),
            Status::SittingOut => write!(f, "sitting out"),
            Status::Out => write!(f, "out"),
        }
    }
}

/// One occupant of a table, tracked across hands. Per-hand bookkeeping
/// (`round_contributed`, `hand_contributed`, `acted_this_round`) is reset
/// by the engine at the start of each street or hand.
#[derive(Debug, Clone)]
pub struct Seat {
    pub id: SeatId,
    pub display_name: String,
    pub chips: Chips,
    pub hole: Option<Hole>,
    pub status: Status,
    pub round_contributed: Chips,
    pub hand_contributed: Chips,
    pub acted_this_round: bool,
}

impl Seat {
    pub fn new(id: SeatId, display_name: String, chips: Chips) -> Seat {
        Seat {
            id,
            display_name,
            chips,
            hole: None,
            status: Status::SittingOut,
            round_contributed: Chips::ZERO,
            hand_contributed: Chips::ZERO,
            acted_this_round: false,
        }
    }

    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, Status::Active | Status::AllIn)
    }

    pub fn can_act(&self) -> bool {
        self.status == Status::Active && self.chips > Chips::ZERO
    }

    /// chips still owed to match the round's current bet.
    pub fn to_call(&self, current_bet: Chips) -> Chips {
        current_bet.saturating_sub(self.round_contributed)
    }

    /// moves `amount` from the seat's stack into its contributions,
    /// marking the seat all-in if it emptied its stack.
    pub fn commit(&mut self, amount: Chips) {
        debug_assert!(amount <= self.chips, "cannot commit more than the stack");
        self.chips -= amount;
        self.round_contributed += amount;
        self.hand_contributed += amount;
        if self.chips == Chips::ZERO && self.status == Status::Active {
            self.status = Status::AllIn;
        }
    }

    pub fn reset_for_new_round(&mut self) {
        self.round_contributed = Chips::ZERO;
        self.acted_this_round = false;
    }

    pub fn reset_for_new_hand(&mut self) {
        self.hole = None;
        self.round_contributed = Chips::ZERO;
        self.hand_contributed = Chips::ZERO;
        self.acted_this_round = false;
        if self.status != Status::SittingOut {
            self.status = if self.chips > Chips::ZERO {
                Status::Active
            } else {
                Status::Out
            };
        }
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{:<10}{:<10}{:>7}  {}",
            self.display_name, self.status, self.chips, self.id
        )
    }
}
