//! UseCase: ルーム一覧取得

use crate::{domain::RoomSnapshot, infrastructure::repository::InMemorySessionStore};

/// ルーム一覧取得のユースケース
pub struct GetRoomsUseCase {
    store: InMemorySessionStore,
}

impl GetRoomsUseCase {
    pub fn new(store: InMemorySessionStore) -> Self {
        Self { store }
    }

    /// code 順に並べた全 Room のスナップショット
    pub async fn execute(&self) -> Vec<RoomSnapshot> {
        let registry = self.store.lock().await;
        let mut rooms: Vec<RoomSnapshot> = registry.rooms().map(|room| room.snapshot()).collect();
        rooms.sort_by(|a, b| a.code.cmp(&b.code));
        rooms
    }
}
