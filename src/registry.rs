use crate::gameroom::{Room, RoomConfig, RoomHandle};
use crate::RoomId;
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::RwLock;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// A fresh lowercase-alphanumeric id of the given length, regenerated on
/// collision by the caller.
pub fn random_id(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// One room's public listing: enough to populate a lobby without
/// exposing anything about the hand in progress.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RoomSummary {
    pub room: RoomId,
    pub name: String,
}

/// Tracks every open room by id. Rooms are created on first join and
/// reaped once their seats empty out between hands; the registry itself
/// never touches a room's internal state, only its handle.
pub struct Registry {
    rooms: RwLock<HashMap<RoomId, RoomHandle>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            rooms: RwLock::new(HashMap::new()),
        }
    }
}

impl Registry {
    /// Opens a new room with the given display name and table rules and
    /// returns its id.
    pub async fn create(&self, name: String, config: RoomConfig) -> RoomId {
        let mut rooms = self.rooms.write().await;
        let id = loop {
            let candidate = random_id(7);
            if !rooms.contains_key(&candidate) {
                break candidate;
            }
        };
        let handle = Room::spawn(id.clone(), name, config);
        rooms.insert(id.clone(), handle);
        log::info!("opened room {id}");
        id
    }

    pub async fn get(&self, id: &str) -> Option<RoomHandle> {
        self.rooms.read().await.get(id).cloned()
    }

    /// Summaries for every open room, for a `get-rooms` request.
    pub async fn list(&self) -> Vec<RoomSummary> {
        self.rooms
            .read()
            .await
            .values()
            .map(|h| RoomSummary { room: h.id.clone(), name: h.name.clone() })
            .collect()
    }

    /// Drops a room's handle. A room with no remaining subscribers is
    /// otherwise harmless to keep around, so this is only called when a
    /// room reports itself empty, not eagerly on every leave.
    pub async fn dissolve(&self, id: &str) {
        if self.rooms.write().await.remove(id).is_some() {
            log::info!("closed room {id}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_id_has_requested_length_and_alphabet() {
        let id = random_id(7);
        assert_eq!(id.len(), 7);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let registry = Registry::default();
        let id = registry.create("friday night".to_string(), RoomConfig::default()).await;
        assert!(registry.get(&id).await.is_some());
        let rooms = registry.list().await;
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room, id);
        assert_eq!(rooms[0].name, "friday night");
    }

    #[tokio::test]
    async fn dissolve_removes_room() {
        let registry = Registry::default();
        let id = registry.create("table".to_string(), RoomConfig::default()).await;
        registry.dissolve(&id).await;
        assert!(registry.get(&id).await.is_none());
    }
}
