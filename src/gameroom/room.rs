use super::channel::Channel;
use super::config::RoomConfig;
use super::error::RoomError;
use super::event::{RoomEvent, ViewerEvent};
use super::intent::RoomIntent;
use super::view::GameView;
use crate::gameplay::{Action, HandState, Seat, Status};
use crate::{Chips, RoomId, SeatId};
use std::collections::HashMap;
use tokio::sync::mpsc;

/// The single writer for one table. Every mutation — a join, a leave, a
/// player action, a timer firing — flows through [`Room::run`]'s select
/// loop, so the state driving a hand is never touched from two places at
/// once. The hand engine inside never suspends; only this loop awaits.
pub struct Room {
    id: RoomId,
    config: RoomConfig,
    seats: Vec<Seat>,
    hand: Option<HandState>,
    dealer: usize,
    subscribers: HashMap<SeatId, mpsc::UnboundedSender<ViewerEvent>>,
    intents: Channel<RoomIntent>,
}

/// The handle a room's owner keeps after spawning it; every other
/// component only ever talks to a room through this.
#[derive(Clone)]
pub struct RoomHandle {
    pub id: RoomId,
    /// Set once at creation; cheap enough to keep directly on the handle
    /// rather than round-tripping through the room's task for every
    /// `get-rooms` request.
    pub name: String,
    intents: mpsc::UnboundedSender<RoomIntent>,
}

impl RoomHandle {
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub async fn join(
        &self,
        display_name: String,
        outbound: mpsc::UnboundedSender<ViewerEvent>,
    ) -> Result<SeatId, RoomError> {
        let (reply, rx) = tokio::sync::oneshot::channel();
        self.send(RoomIntent::Join {
            display_name,
            outbound,
            reply,
        })?;
        rx.await.map_err(|_| RoomError::RoomFull)?
    }

    /// Best-effort reconnection: succeeds only if `seat` is still seated
    /// at this table, regardless of whether its old connection ever sent
    /// an explicit `leave`.
    pub async fn rejoin(
        &self,
        seat: SeatId,
        outbound: mpsc::UnboundedSender<ViewerEvent>,
    ) -> Result<(), RoomError> {
        let (reply, rx) = tokio::sync::oneshot::channel();
        self.send(RoomIntent::Rejoin {
            seat,
            outbound,
            reply,
        })?;
        rx.await.map_err(|_| RoomError::UnknownSeat(String::new()))?
    }

    pub fn leave(&self, seat: SeatId) {
        let _ = self.intents.send(RoomIntent::Leave { seat });
    }

    pub async fn start(&self) -> Result<(), RoomError> {
        let (reply, rx) = tokio::sync::oneshot::channel();
        self.send(RoomIntent::Start { reply })?;
        rx.await.map_err(|_| RoomError::NotEnoughPlayers)?
    }

    pub async fn act(&self, seat: SeatId, action: Action) -> Result<(), RoomError> {
        let (reply, rx) = tokio::sync::oneshot::channel();
        self.send(RoomIntent::Act {
            seat,
            action,
            reply,
        })?;
        rx.await.map_err(|_| RoomError::UnknownSeat(String::new()))?
    }

    pub async fn view(&self, viewer: Option<SeatId>) -> Option<GameView> {
        let (reply, rx) = tokio::sync::oneshot::channel();
        self.send(RoomIntent::View { viewer, reply }).ok()?;
        rx.await.ok()
    }

    /// Whether every seat has left. The registry polls this after a
    /// `leave` rather than the room pushing it, since the room has no
    /// reference back to the registry that owns its handle.
    pub async fn is_empty(&self) -> bool {
        self.view(None).await.is_none_or(|v| v.seats.is_empty())
    }

    fn send(&self, intent: RoomIntent) -> Result<(), RoomError> {
        self.intents
            .send(intent)
            .map_err(|_| RoomError::UnknownSeat("room closed".into()))
    }
}

impl Room {
    pub fn spawn(id: RoomId, name: String, config: RoomConfig) -> RoomHandle {
        let channel = Channel::default();
        let handle = RoomHandle {
            id: id.clone(),
            name,
            intents: channel.sender(),
        };
        let room = Room {
            id,
            config,
            seats: Vec::new(),
            hand: None,
            dealer: 0,
            subscribers: HashMap::new(),
            intents: channel,
        };
        tokio::spawn(room.run());
        handle
    }

    pub async fn run(mut self) {
        loop {
            let waiting_on = self
                .hand
                .as_ref()
                .filter(|h| !h.is_complete() && !h.needs_resolution())
                .and_then(|h| h.to_act)
                .map(|i| self.hand.as_ref().unwrap().seats[i].id.clone());

            tokio::select! {
                biased;
                intent = self.intents.receiver().recv() => {
                    match intent {
                        Some(intent) => self.handle(intent),
                        None => return,
                    }
                }
                _ = tokio::time::sleep(self.config.turn_timeout), if waiting_on.is_some() => {
                    let seat = waiting_on.expect("guarded by is_some");
                    self.on_timeout(&seat);
                }
                _ = tokio::time::sleep(self.config.interhand_delay), if self.hand_is_complete() => {
                    self.finish_hand();
                    self.try_start_hand();
                }
            }
        }
    }

    fn hand_is_complete(&self) -> bool {
        self.hand.as_ref().is_some_and(|h| h.is_complete())
    }

    /// The hand has reached showdown (or folded out to one seat) and is
    /// waiting on [`HandState::resolve`], not on any further action.
    fn hand_needs_resolution(&self) -> bool {
        self.hand.as_ref().is_some_and(|h| h.needs_resolution())
    }

    fn handle(&mut self, intent: RoomIntent) {
        match intent {
            RoomIntent::Join {
                display_name,
                outbound,
                reply,
            } => {
                let result = self.join(display_name, outbound);
                let _ = reply.send(result);
            }
            RoomIntent::Rejoin {
                seat,
                outbound,
                reply,
            } => {
                let result = self.rejoin(seat, outbound);
                let _ = reply.send(result);
            }
            RoomIntent::Leave { seat } => self.leave(&seat),
            RoomIntent::Start { reply } => {
                let result = self.try_start_hand();
                let _ = reply.send(result);
            }
            RoomIntent::Act {
                seat,
                action,
                reply,
            } => {
                let result = self.act(&seat, action);
                let _ = reply.send(result);
            }
            RoomIntent::View { viewer, reply } => {
                let view = self.hand.as_ref().map(|h| GameView::of(h, viewer.as_deref()));
                let _ = reply.send(view.unwrap_or_else(|| self.lobby_view()));
            }
        }
    }

    fn lobby_view(&self) -> GameView {
        use crate::gameplay::Phase;
        GameView {
            phase: Phase::Complete,
            board: crate::cards::board::Board::empty(),
            pot: Chips::ZERO,
            current_bet: Chips::ZERO,
            to_act: None,
            dealer: None,
            seats: self
                .seats
                .iter()
                .map(|s| super::view::SeatView {
                    seat: s.id.clone(),
                    display_name: s.display_name.clone(),
                    chips: s.chips,
                    status: s.status,
                    round_contributed: Chips::ZERO,
                    hole: None,
                })
                .collect(),
        }
    }

    fn join(
        &mut self,
        display_name: String,
        outbound: mpsc::UnboundedSender<ViewerEvent>,
    ) -> Result<SeatId, RoomError> {
        if self.seats.len() >= self.config.max_seats {
            return Err(RoomError::RoomFull);
        }
        let seat_id = crate::registry::random_id(8);
        let mut seat = Seat::new(seat_id.clone(), display_name.clone(), self.config.starting_chips);
        seat.status = if self.hand.is_some() {
            Status::SittingOut
        } else {
            Status::Active
        };
        self.seats.push(seat);
        self.subscribers.insert(seat_id.clone(), outbound);
        self.broadcast(RoomEvent::PlayerJoined {
            seat: seat_id.clone(),
            display_name,
        });
        Ok(seat_id)
    }

    fn rejoin(&mut self, seat_id: SeatId, outbound: mpsc::UnboundedSender<ViewerEvent>) -> Result<(), RoomError> {
        if !self.seats.iter().any(|s| s.id == seat_id) {
            return Err(RoomError::UnknownSeat(seat_id));
        }
        self.subscribers.insert(seat_id, outbound);
        Ok(())
    }

    fn leave(&mut self, seat_id: &str) {
        self.subscribers.remove(seat_id);
        if let Some(hand) = self.hand.as_mut() {
            if let Some(seat) = hand.seats.iter_mut().find(|s| s.id == seat_id) {
                if seat.status == Status::Active {
                    seat.status = Status::Folded;
                }
            }
        }
        self.seats.retain(|s| s.id != seat_id);
        self.broadcast(RoomEvent::PlayerLeft {
            seat: seat_id.to_string(),
        });
    }

    fn try_start_hand(&mut self) -> Result<(), RoomError> {
        if self.hand.is_some() && !self.hand_is_complete() {
            return Err(RoomError::HandInProgress);
        }
        let eligible = self
            .seats
            .iter()
            .filter(|s| s.status != Status::SittingOut && s.chips > Chips::ZERO)
            .count();
        if eligible < 2 {
            return Err(RoomError::NotEnoughPlayers);
        }
        for seat in self.seats.iter_mut() {
            seat.status = if seat.chips > Chips::ZERO {
                Status::Active
            } else {
                Status::Out
            };
        }
        self.dealer = (self.dealer + 1) % self.seats.len();
        let state = HandState::start(
            self.seats.clone(),
            self.dealer,
            self.config.small_blind,
            self.config.big_blind,
        )?;
        self.hand = Some(state);
        self.broadcast(RoomEvent::HandStarted);
        self.broadcast_views();
        self.prompt_to_act();
        Ok(())
    }

    fn act(&mut self, seat_id: &str, action: Action) -> Result<(), RoomError> {
        let hand = self.hand.as_mut().ok_or_else(|| RoomError::UnknownSeat(seat_id.to_string()))?;
        hand.apply(seat_id, action)?;
        self.broadcast(RoomEvent::ActionTaken {
            seat: seat_id.to_string(),
            action,
        });
        self.broadcast_views();
        if self.hand_needs_resolution() {
            self.finish_hand_keep_result();
        } else {
            self.prompt_to_act();
        }
        Ok(())
    }

    fn on_timeout(&mut self, seat_id: &str) {
        let Some(hand) = self.hand.as_mut() else {
            return;
        };
        let legal = hand.legal_actions();
        let action = if legal.contains(&Action::Check) {
            Action::Check
        } else {
            Action::Fold
        };
        log::info!("seat {seat_id} timed out, auto-{action}");
        let _ = self.act(seat_id, action);
    }

    fn finish_hand_keep_result(&mut self) {
        if let Some(hand) = self.hand.as_mut() {
            let settlements = hand.resolve();
            // `hand.seats` already reflects every blind/bet debited this
            // hand; `self.seats` is the pre-hand snapshot `try_start_hand`
            // dealt from, so it has to be resynced before rewards are
            // added back, or a loser's stake never actually leaves it.
            for seat in self.seats.iter_mut() {
                if let Some(post_hand) = hand.seats.iter().find(|s| s.id == seat.id) {
                    seat.chips = post_hand.chips;
                }
                if let Some(s) = settlements.iter().find(|s| s.seat == seat.id) {
                    seat.chips += s.reward;
                }
            }
            self.broadcast(RoomEvent::HandComplete { settlements });
            self.broadcast_views();
        }
    }

    fn finish_hand(&mut self) {
        self.hand = None;
        let still_playing = self.seats.iter().filter(|s| s.chips > Chips::ZERO).count();
        if still_playing < 2 {
            // §4.E: every seat that didn't win is marked `out` in the
            // final standings.
            for seat in self.seats.iter_mut() {
                if seat.chips == Chips::ZERO {
                    seat.status = Status::Out;
                }
            }
            let winner = self
                .seats
                .iter()
                .find(|s| s.chips > Chips::ZERO)
                .map(|s| s.id.clone());
            let mut standings: Vec<(SeatId, Chips)> =
                self.seats.iter().map(|s| (s.id.clone(), s.chips)).collect();
            standings.sort_by(|a, b| b.1.cmp(&a.1));
            self.broadcast(RoomEvent::GameOver { winner, standings });
        }
    }

    fn prompt_to_act(&self) {
        let Some(hand) = self.hand.as_ref() else {
            return;
        };
        let Some(i) = hand.to_act else {
            return;
        };
        let seat = &hand.seats[i];
        self.broadcast(RoomEvent::ActionRequired {
            seat: seat.id.clone(),
            legal: hand.legal_actions(),
            deadline_secs: self.config.turn_timeout.as_secs(),
        });
    }

    fn broadcast_views(&self) {
        for (seat_id, tx) in &self.subscribers {
            let view = self.hand.as_ref().map(|h| GameView::of(h, Some(seat_id)));
            if let Some(view) = view {
                let event = ViewerEvent {
                    event: RoomEvent::StateUpdated,
                    view: Some(view),
                };
                if tx.send(event).is_err() {
                    log::warn!("room {}: dropped update for disconnected seat {seat_id}", self.id);
                }
            }
        }
    }

    fn broadcast(&self, event: RoomEvent) {
        for (seat_id, tx) in &self.subscribers {
            let sent = tx.send(ViewerEvent {
                event: event.clone(),
                view: None,
            });
            if sent.is_err() {
                log::warn!("room {}: failed to notify seat {seat_id}", self.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameroom::RoomConfig;

    fn spawn() -> RoomHandle {
        Room::spawn("room-1".to_string(), "test table".to_string(), RoomConfig::default())
    }

    #[tokio::test]
    async fn join_returns_a_usable_seat() {
        let room = spawn();
        let (tx, _rx) = mpsc::unbounded_channel();
        let seat = room.join("alice".to_string(), tx).await.unwrap();
        let view = room.view(Some(seat.clone())).await.unwrap();
        assert_eq!(view.seats.len(), 1);
        assert_eq!(view.seats[0].seat, seat);
    }

    #[tokio::test]
    async fn rejoin_reattaches_an_existing_seat() {
        let room = spawn();
        let (tx, rx) = mpsc::unbounded_channel();
        let seat = room.join("alice".to_string(), tx).await.unwrap();
        drop(rx);

        let (tx2, _rx2) = mpsc::unbounded_channel();
        room.rejoin(seat.clone(), tx2).await.unwrap();
        let view = room.view(Some(seat)).await.unwrap();
        assert_eq!(view.seats.len(), 1);
    }

    #[tokio::test]
    async fn rejoin_unknown_seat_fails() {
        let room = spawn();
        let (tx, _rx) = mpsc::unbounded_channel();
        let result = room.rejoin("ghost".to_string(), tx).await;
        assert!(matches!(result, Err(RoomError::UnknownSeat(_))));
    }

    #[tokio::test]
    async fn leave_empties_the_room() {
        let room = spawn();
        let (tx, _rx) = mpsc::unbounded_channel();
        let seat = room.join("alice".to_string(), tx).await.unwrap();
        assert!(!room.is_empty().await);
        room.leave(seat);
        assert!(room.is_empty().await);
    }

    #[tokio::test]
    async fn start_requires_two_seated_players() {
        let room = spawn();
        let (tx, _rx) = mpsc::unbounded_channel();
        room.join("alice".to_string(), tx).await.unwrap();
        assert!(matches!(room.start().await, Err(RoomError::NotEnoughPlayers)));
    }
}
