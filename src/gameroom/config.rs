use crate::Chips;

/// Per-room table rules, set when the room is created and fixed for its
/// lifetime.
#[derive(Debug, Clone, Copy)]
pub struct RoomConfig {
    pub starting_chips: Chips,
    pub small_blind: Chips,
    pub big_blind: Chips,
    pub max_seats: usize,
    pub turn_timeout: std::time::Duration,
    pub interhand_delay: std::time::Duration,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            starting_chips: Chips(1000),
            small_blind: Chips(10),
            big_blind: Chips(20),
            max_seats: 6,
            turn_timeout: std::time::Duration::from_secs(30),
            interhand_delay: std::time::Duration::from_secs(6),
        }
    }
}
