use crate::cards::strength::Strength;
use crate::{Chips, SeatId};

/// One seat's outcome at the end of a hand.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Settlement {
    pub seat: SeatId,
    pub reward: Chips,
    pub risked: Chips,
    pub strength: Option<Strength>,
}

impl Settlement {
    pub fn pnl(&self) -> i64 {
        self.reward.0 as i64 - self.risked.0 as i64
    }
}

impl std::fmt::Display for Settlement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<10}{:>+6}", self.seat, self.pnl())
    }
}
