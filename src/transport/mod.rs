//! The wire protocol: the tagged-union messages a connection exchanges
//! with the core, independent of the transport carrying them. Nothing
//! below this module knows about `actix-ws` or any other socket type.

pub mod wire;

pub use wire::{ClientMessage, ServerMessage};
