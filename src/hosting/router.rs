use crate::gameroom::{RoomConfig, ViewerEvent};
use crate::registry::Registry;
use crate::transport::wire::{ClientMessage, ServerMessage};
use crate::RoomId;
use actix_ws::{Message, MessageStream, Session};
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Translates one WebSocket connection's inbound [`ClientMessage`]s into
/// [`Registry`] and room calls, and forwards every outbound room event —
/// its own replies plus whatever the room it's watching broadcasts — back
/// over the socket as a [`ServerMessage`]. A connection watches at most
/// one room at a time; joining a second implicitly leaves the first,
/// since the wire protocol's `leave-room`/`player-action` messages name
/// the room rather than this router tracking a list. `rejoin` re-attaches
/// this connection's outbound channel to a seat left over from a dropped
/// socket, best-effort, without re-seating or touching chip counts.
pub struct Router {
    registry: Arc<Registry>,
    defaults: RoomConfig,
}

impl Router {
    pub fn new(registry: Arc<Registry>, defaults: RoomConfig) -> Self {
        Self { registry, defaults }
    }

    /// Drives one connection until the socket closes or goes silent.
    /// Never suspends the room it's bridging: this loop is the only thing
    /// that awaits, per the single-writer discipline each [`crate::gameroom::Room`]
    /// keeps on its own task.
    pub async fn drive(&self, mut session: Session, mut stream: MessageStream) {
        let (events_tx, mut events_rx) = mpsc::unbounded_channel();
        let mut watching: Option<RoomId> = None;

        loop {
            tokio::select! {
                biased;
                incoming = stream.next() => {
                    let Some(incoming) = incoming else { break };
                    match incoming {
                        Ok(Message::Text(text)) => {
                            if let Some(reply) = self.handle(&text, &mut watching, events_tx.clone()).await {
                                if self.send(&mut session, &reply).await.is_err() {
                                    break;
                                }
                            }
                        }
                        Ok(Message::Close(_)) | Err(_) => break,
                        Ok(Message::Ping(bytes)) => {
                            if session.pong(&bytes).await.is_err() {
                                break;
                            }
                        }
                        _ => continue,
                    }
                }
                event = events_rx.recv() => {
                    let Some(event) = event else { continue };
                    if self.send(&mut session, &ServerMessage::from(event)).await.is_err() {
                        break;
                    }
                }
            }
        }

        if let Some(room) = watching {
            self.leave_seat_unknown(&room).await;
        }
    }

    /// Returns `None` when the room's own broadcast (delivered separately
    /// through `events_rx`) already tells the sender everything it needs —
    /// a successful `start-game` or `player-action` shows up as
    /// `hand-started`/`action-required`/state updates, so echoing a bare
    /// ack back would be redundant. Errors and the request/response
    /// intents (create/join/leave/list) always get a direct reply.
    async fn handle(
        &self,
        text: &str,
        watching: &mut Option<RoomId>,
        events_tx: mpsc::UnboundedSender<ViewerEvent>,
    ) -> Option<ServerMessage> {
        let message: ClientMessage = match serde_json::from_str(text) {
            Ok(m) => m,
            Err(e) => return Some(ServerMessage::Error { message: format!("malformed message: {e}") }),
        };
        let config = message.room_config(self.defaults);

        Some(match message {
            ClientMessage::CreateRoom { room_name, display_name, .. } => {
                let room = self.registry.create(room_name, config).await;
                let Some(handle) = self.registry.get(&room).await else {
                    return Some(ServerMessage::Error { message: "room vanished before it could be joined".into() });
                };
                match handle.join(display_name, events_tx).await {
                    Ok(seat) => {
                        *watching = Some(room.clone());
                        ServerMessage::RoomCreated { room, seat }
                    }
                    Err(e) => ServerMessage::Error { message: e.to_string() },
                }
            }
            ClientMessage::JoinRoom { room, display_name } => {
                let Some(handle) = self.registry.get(&room).await else {
                    return Some(ServerMessage::Error { message: format!("no such room: {room}") });
                };
                match handle.join(display_name, events_tx).await {
                    Ok(seat) => {
                        *watching = Some(room.clone());
                        ServerMessage::RoomJoined { room, seat }
                    }
                    Err(e) => ServerMessage::Error { message: e.to_string() },
                }
            }
            ClientMessage::Rejoin { room, seat } => {
                let Some(handle) = self.registry.get(&room).await else {
                    return Some(ServerMessage::Error { message: format!("no such room: {room}") });
                };
                match handle.rejoin(seat.clone(), events_tx).await {
                    Ok(()) => {
                        *watching = Some(room.clone());
                        ServerMessage::Rejoined { room, seat }
                    }
                    Err(e) => ServerMessage::Error { message: e.to_string() },
                }
            }
            ClientMessage::LeaveRoom { room, seat } => {
                let Some(handle) = self.registry.get(&room).await else {
                    return Some(ServerMessage::Error { message: format!("no such room: {room}") });
                };
                handle.leave(seat);
                if watching.as_deref() == Some(room.as_str()) {
                    *watching = None;
                }
                if handle.is_empty().await {
                    self.registry.dissolve(&room).await;
                }
                ServerMessage::RoomLeft { room }
            }
            ClientMessage::StartGame { room } => {
                let Some(handle) = self.registry.get(&room).await else {
                    return Some(ServerMessage::Error { message: format!("no such room: {room}") });
                };
                match handle.start().await {
                    Ok(()) => return None,
                    Err(e) => ServerMessage::Error { message: e.to_string() },
                }
            }
            ClientMessage::PlayerAction { room, seat, action } => {
                let Some(handle) = self.registry.get(&room).await else {
                    return Some(ServerMessage::Error { message: format!("no such room: {room}") });
                };
                match handle.act(seat, action).await {
                    Ok(()) => return None,
                    Err(e) => ServerMessage::Error { message: e.to_string() },
                }
            }
            ClientMessage::ListRooms => ServerMessage::RoomsList { rooms: self.registry.list().await },
        })
    }

    /// Best-effort cleanup on an ungraceful disconnect: the seat id isn't
    /// known to the socket layer, only to the client messages it sent, so
    /// the room's own `leave` handling (forced fold, `away` flagging) is
    /// what actually protects the hand; this only reaps an emptied room.
    async fn leave_seat_unknown(&self, room: &RoomId) {
        if let Some(handle) = self.registry.get(room).await {
            if handle.is_empty().await {
                self.registry.dissolve(room).await;
            }
        }
    }

    async fn send(&self, session: &mut Session, message: &ServerMessage) -> Result<(), ()> {
        let text = serde_json::to_string(message).map_err(|_| ())?;
        session.text(text).await.map_err(|_| ())
    }
}
