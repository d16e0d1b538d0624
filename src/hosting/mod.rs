//! The message router: bridges one WebSocket connection to the
//! [`crate::registry::Registry`], and the `actix-web` server that accepts
//! those connections. Everything above this module only ever sees
//! [`crate::transport::wire`] messages and [`crate::gameroom`] handles —
//! no socket type leaks past here.

pub mod router;
pub mod server;

pub use router::Router;
pub use server::Server;
