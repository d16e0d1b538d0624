//! holdem-server binary
//!
//! Boots the authoritative poker core behind a single WebSocket endpoint.
//! Every room lives only as long as the process; there is no persistence
//! and no configuration beyond the listening port and the table defaults
//! a `create-room` request can override.

use clap::Parser;
use holdem_core::hosting::server::{Args, Server};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let level = args.log_level.parse().unwrap_or(log::LevelFilter::Info);
    holdem_core::init(level);
    Server::run(args).await
}
