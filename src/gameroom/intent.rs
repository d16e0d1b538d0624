use super::error::RoomError;
use super::event::ViewerEvent;
use super::view::GameView;
use crate::gameplay::Action;
use crate::SeatId;
use tokio::sync::{mpsc, oneshot};

/// One request delivered to a room's task over its single inbound queue.
/// Requests that need an answer carry a `oneshot` reply channel — the
/// room is the only writer of its own state, so every read goes through
/// this queue too rather than a shared lock.
pub enum RoomIntent {
    Join {
        display_name: String,
        outbound: mpsc::UnboundedSender<ViewerEvent>,
        reply: oneshot::Sender<Result<SeatId, RoomError>>,
    },
    /// Re-attaches a new outbound channel to a seat that's still seated
    /// but lost its connection, e.g. a dropped socket mid-hand.
    Rejoin {
        seat: SeatId,
        outbound: mpsc::UnboundedSender<ViewerEvent>,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },
    Leave {
        seat: SeatId,
    },
    Start {
        reply: oneshot::Sender<Result<(), RoomError>>,
    },
    Act {
        seat: SeatId,
        action: Action,
        reply: oneshot::Sender<Result<(), RoomError>>,
    },
    View {
        viewer: Option<SeatId>,
        reply: oneshot::Sender<GameView>,
    },
}
