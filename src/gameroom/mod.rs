//! The room controller: owns one table's seats and, when a hand is in
//! progress, drives the hand engine in [`crate::gameplay`] from a single
//! task so state is never mutated from two places at once.

pub mod channel;
pub mod config;
pub mod error;
pub mod event;
pub mod intent;
pub mod room;
pub mod view;

pub use channel::Channel;
pub use config::RoomConfig;
pub use error::RoomError;
pub use event::{RoomEvent, ViewerEvent};
pub use intent::RoomIntent;
pub use room::{Room, RoomHandle};
pub use view::{GameView, SeatView};
