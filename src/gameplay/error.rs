use crate::SeatId;
use thiserror::Error;

/// Rejections the hand engine raises for a single proposed action. These
/// never panic and never corrupt `HandState` — the caller's move is simply
/// refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("it is not {0}'s turn to act")]
    NotYourTurn(SeatId),
    #[error("{seat} cannot {action}: {reason}")]
    IllegalAction {
        seat: SeatId,
        action: String,
        reason: String,
    },
    #[error("the hand is already complete")]
    HandComplete,
    #[error("at least two seats are required to start a hand")]
    NotEnoughSeats,
}
