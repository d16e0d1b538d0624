use crate::gameplay::Action;
use crate::gameroom::{RoomConfig, ViewerEvent};
use crate::registry::RoomSummary;
use crate::{Chips, RoomId, SeatId};

/// Everything a connected client can ask of the server. One WebSocket
/// carries one client's messages for the lifetime of its connection; a
/// client joins a room by seat id returned from [`ClientMessage::JoinRoom`].
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    CreateRoom {
        room_name: String,
        display_name: String,
        #[serde(default)]
        starting_chips: Option<Chips>,
        #[serde(default)]
        small_blind: Option<Chips>,
        #[serde(default)]
        big_blind: Option<Chips>,
        #[serde(default)]
        max_seats: Option<usize>,
    },
    JoinRoom {
        room: RoomId,
        display_name: String,
    },
    /// Re-attaches to a seat this connection already holds, after a
    /// dropped socket. Best-effort: fails if the seat was removed by an
    /// explicit `leave-room` in the meantime.
    Rejoin {
        room: RoomId,
        seat: SeatId,
    },
    LeaveRoom {
        room: RoomId,
        seat: SeatId,
    },
    StartGame {
        room: RoomId,
    },
    PlayerAction {
        room: RoomId,
        seat: SeatId,
        action: Action,
    },
    ListRooms,
}

impl ClientMessage {
    /// Builds table rules from a `create-room` request, filling in
    /// whatever the client left unset from the process defaults.
    pub fn room_config(&self, defaults: RoomConfig) -> RoomConfig {
        match self {
            ClientMessage::CreateRoom {
                starting_chips,
                small_blind,
                big_blind,
                max_seats,
                ..
            } => RoomConfig {
                starting_chips: starting_chips.unwrap_or(defaults.starting_chips),
                small_blind: small_blind.unwrap_or(defaults.small_blind),
                big_blind: big_blind.unwrap_or(defaults.big_blind),
                max_seats: max_seats.unwrap_or(defaults.max_seats),
                ..defaults
            },
            _ => defaults,
        }
    }
}

/// Everything the server can say back to one connection.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    RoomCreated { room: RoomId, seat: SeatId },
    RoomsList { rooms: Vec<RoomSummary> },
    RoomJoined { room: RoomId, seat: SeatId },
    Rejoined { room: RoomId, seat: SeatId },
    RoomLeft { room: RoomId },
    Event(ViewerEvent),
    Error { message: String },
}

impl From<ViewerEvent> for ServerMessage {
    fn from(event: ViewerEvent) -> Self {
        ServerMessage::Event(event)
    }
}
