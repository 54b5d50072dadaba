//! UseCase: ルーム詳細取得

use crate::{
    domain::{RoomCode, RoomSnapshot},
    infrastructure::repository::InMemorySessionStore,
};

use super::error::GetRoomDetailError;

/// ルーム詳細取得のユースケース
pub struct GetRoomDetailUseCase {
    store: InMemorySessionStore,
}

impl GetRoomDetailUseCase {
    pub fn new(store: InMemorySessionStore) -> Self {
        Self { store }
    }

    /// code として不正な文字列も「存在しない」として扱う
    pub async fn execute(&self, code: String) -> Result<RoomSnapshot, GetRoomDetailError> {
        let code = RoomCode::new(code).map_err(|_| GetRoomDetailError::RoomNotFound)?;
        let registry = self.store.lock().await;
        registry
            .room(&code)
            .map(|room| room.snapshot())
            .ok_or(GetRoomDetailError::RoomNotFound)
    }
}
