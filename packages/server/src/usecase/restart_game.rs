//! UseCase: ゲームのリスタート
//!
//! どのフェーズからでも lobby に戻し、タイマーを停止して `game-restarted` を送ります。

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, MessagePusher, RoomCode, RoomError},
    infrastructure::repository::InMemorySessionStore,
};

use super::dispatch::deliver;

/// リスタートのユースケース
pub struct RestartGameUseCase {
    store: InMemorySessionStore,
    message_pusher: Arc<dyn MessagePusher>,
}

impl RestartGameUseCase {
    pub fn new(store: InMemorySessionStore, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            store,
            message_pusher,
        }
    }

    pub async fn execute(&self, requester: ConnectionId, code: RoomCode) -> Result<(), RoomError> {
        let mut registry = self.store.lock().await;
        let deliveries = registry.restart(&requester, &code)?;
        deliver(self.message_pusher.as_ref(), deliveries).await;

        tracing::info!("Game restarted in room '{}'", code);
        Ok(())
    }
}
