use super::Router;
use crate::gameroom::RoomConfig;
use crate::registry::Registry;
use crate::Chips;
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

/// Process-wide defaults a room falls back on for whatever a `create-room`
/// request leaves unset. Only the listening port is a protocol concern;
/// everything else here is an operational knob.
#[derive(Debug, Parser)]
#[command(name = "holdem-server", about = "authoritative core for a multi-room No-Limit Hold'em service")]
pub struct Args {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    /// Overrides `BIND_ADDR`; falls back to `0.0.0.0:<port>` if neither is set.
    #[arg(long)]
    pub bind: Option<String>,
    #[arg(long, default_value = "info")]
    pub log_level: String,
    #[arg(long, default_value_t = 1000)]
    pub starting_chips: u32,
    #[arg(long, default_value_t = 10)]
    pub small_blind: u32,
    #[arg(long, default_value_t = 20)]
    pub big_blind: u32,
    #[arg(long, default_value_t = 6)]
    pub max_seats: usize,
    #[arg(long, default_value_t = 30)]
    pub turn_secs: u64,
    #[arg(long, default_value_t = 6)]
    pub interhand_secs: u64,
}

impl From<&Args> for RoomConfig {
    fn from(args: &Args) -> RoomConfig {
        RoomConfig {
            starting_chips: Chips(args.starting_chips),
            small_blind: Chips(args.small_blind),
            big_blind: Chips(args.big_blind),
            max_seats: args.max_seats,
            turn_timeout: Duration::from_secs(args.turn_secs),
            interhand_delay: Duration::from_secs(args.interhand_secs),
        }
    }
}

struct AppState {
    router: Router,
}

pub struct Server;

impl Server {
    pub async fn run(args: Args) -> std::io::Result<()> {
        let defaults = RoomConfig::from(&args);
        let registry = Arc::new(Registry::default());
        let state = web::Data::new(AppState {
            router: Router::new(registry, defaults),
        });
        let bind = args
            .bind
            .clone()
            .or_else(|| std::env::var("BIND_ADDR").ok())
            .unwrap_or_else(|| format!("0.0.0.0:{}", args.port));
        log::info!("starting holdem-server on {bind}");
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(Cors::default().allow_any_origin().allow_any_method().allow_any_header())
                .app_data(state.clone())
                .route("/ws", web::get().to(connect))
        })
        .bind(bind)?
        .run()
        .await
    }
}

async fn connect(state: web::Data<AppState>, req: HttpRequest, body: web::Payload) -> impl Responder {
    match actix_ws::handle(&req, body) {
        Ok((response, session, stream)) => {
            actix_web::rt::spawn(async move { state.router.drive(session, stream).await });
            response.map_into_left_body()
        }
        Err(e) => HttpResponse::InternalServerError()
            .body(e.to_string())
            .map_into_right_body(),
    }
}
