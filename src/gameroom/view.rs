use crate::cards::board::Board;
use crate::cards::hole::Hole;
use crate::gameplay::{HandState, Phase, Seat, Status};
use crate::{Chips, SeatId};

/// One seat as a viewer is allowed to see it: hole cards are present only
/// for the viewer's own seat, or for any seat revealed at showdown.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SeatView {
    pub seat: SeatId,
    pub display_name: String,
    pub chips: Chips,
    pub status: Status,
    pub round_contributed: Chips,
    pub hole: Option<Hole>,
}

/// A redacted snapshot of the table, materialized fresh for each viewer so
/// a socket never has to trust the client not to peek at someone else's
/// hole cards.
#[derive(Debug, Clone, serde::Serialize)]
pub struct GameView {
    pub phase: Phase,
    pub board: Board,
    pub pot: Chips,
    pub current_bet: Chips,
    pub to_act: Option<SeatId>,
    pub dealer: Option<SeatId>,
    pub seats: Vec<SeatView>,
}

impl GameView {
    pub fn of(state: &HandState, viewer: Option<&str>) -> GameView {
        let reveal_all = state.phase == Phase::Showdown || state.phase == Phase::Complete;
        let seats = state
            .seats
            .iter()
            .map(|seat| seat_view(seat, viewer, reveal_all))
            .collect();
        GameView {
            phase: state.phase,
            board: state.board.clone(),
            pot: state.total_pot(),
            current_bet: state.current_bet,
            to_act: state.to_act.map(|i| state.seats[i].id.clone()),
            dealer: state.seats.get(state.dealer).map(|s| s.id.clone()),
            seats,
        }
    }
}

fn seat_view(seat: &Seat, viewer: Option<&str>, reveal_all: bool) -> SeatView {
    let is_viewer = viewer.is_some_and(|v| v == seat.id);
    let reveal = is_viewer || (reveal_all && seat.status != Status::Folded);
    SeatView {
        seat: seat.id.clone(),
        display_name: seat.display_name.clone(),
        chips: seat.chips,
        status: seat.status,
        round_contributed: seat.round_contributed,
        hole: if reveal { seat.hole } else { None },
    }
}
