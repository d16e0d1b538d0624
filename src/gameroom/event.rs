use super::view::GameView;
use crate::gameplay::{Action, Settlement};
use crate::{Chips, SeatId};

/// Broadcast from a room to every connected client. The room doesn't know
/// or care how these get to a socket; the message router takes care of
/// that and of per-viewer hole-card redaction via [`GameView::of`].
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RoomEvent {
    PlayerJoined { seat: SeatId, display_name: String },
    PlayerLeft { seat: SeatId },
    HandStarted,
    StateUpdated,
    ActionTaken { seat: SeatId, action: Action },
    ActionRequired { seat: SeatId, legal: Vec<Action>, deadline_secs: u64 },
    HandComplete { settlements: Vec<Settlement> },
    /// Emitted when a hand ends with fewer than two seats still holding
    /// chips. `standings` ranks every seat that was ever dealt in by
    /// final chip count, descending.
    GameOver { winner: Option<SeatId>, standings: Vec<(SeatId, Chips)> },
    Error { message: String },
}

/// The event a single connection actually receives: the broadcast plus,
/// for state-carrying variants, that viewer's own redacted [`GameView`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct ViewerEvent {
    #[serde(flatten)]
    pub event: RoomEvent,
    pub view: Option<GameView>,
}
