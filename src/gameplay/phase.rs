/// A street of a hand. `Complete` means settlements have been computed and
/// the hand is only waiting on the room to deal the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::PreFlop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River => Phase::Showdown,
            Phase::Showdown => Phase::Complete,
            Phase::Complete => Phase::Complete,
        }
    }

    pub fn cards_to_deal(self) -> usize {
        match self {
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
            _ => 0,
        }
    }
}
