use crate::gameplay::HandError;
use crate::SeatId;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum RoomError {
    #[error("room is full")]
    RoomFull,
    #[error("seat {0} is already taken")]
    SeatTaken(SeatId),
    #[error("no such seat: {0}")]
    UnknownSeat(SeatId),
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("not enough seated players to start a hand")]
    NotEnoughPlayers,
    #[error(transparent)]
    Hand(#[from] HandError),
}
