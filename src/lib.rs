pub mod cards;
pub mod gameplay;
pub mod gameroom;
pub mod hosting;
pub mod pot;
pub mod registry;
pub mod transport;

use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Chip count. Unsigned and wide: a stack, a pot, or a contribution can
/// never go negative, and a real account balance needs more range than a
/// 16-bit normalized stack size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Chips(pub u32);

impl Chips {
    pub const ZERO: Chips = Chips(0);

    pub fn saturating_sub(self, rhs: Chips) -> Chips {
        Chips(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Chips {
    type Output = Chips;
    fn add(self, rhs: Chips) -> Chips {
        Chips(self.0 + rhs.0)
    }
}
impl AddAssign for Chips {
    fn add_assign(&mut self, rhs: Chips) {
        self.0 += rhs.0;
    }
}
impl Sub for Chips {
    type Output = Chips;
    fn sub(self, rhs: Chips) -> Chips {
        Chips(self.0 - rhs.0)
    }
}
impl SubAssign for Chips {
    fn sub_assign(&mut self, rhs: Chips) {
        self.0 -= rhs.0;
    }
}
impl std::iter::Sum for Chips {
    fn sum<I: Iterator<Item = Chips>>(iter: I) -> Self {
        iter.fold(Chips::ZERO, Add::add)
    }
}
impl std::fmt::Display for Chips {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl From<u32> for Chips {
    fn from(n: u32) -> Self {
        Chips(n)
    }
}

/// Identifies a seat for the lifetime of a table. Generated by the
/// [`registry`] module as a short alphanumeric string.
pub type SeatId = String;
/// Identifies a room for the lifetime of the process.
pub type RoomId = String;

/// Initializes process-wide logging: a colored terminal sink at the
/// configured level plus a debug-level file sink under `logs/`. Also arms
/// a ctrl-c watcher that exits the process, since the server otherwise
/// runs forever.
pub fn init(level: log::LevelFilter) {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        log::warn!("received ctrl-c, shutting down");
        std::process::exit(0);
    });
    std::fs::create_dir_all("logs").ok();
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves forward")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
