//! UseCase: 投票
//!
//! 全員の投票が揃ったら集計して `game-ended` を送り、Room を lobby に戻します。

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, MessagePusher, RoomCode, RoomError},
    infrastructure::repository::InMemorySessionStore,
};

use super::dispatch::deliver;

/// 投票のユースケース
pub struct SubmitVoteUseCase {
    store: InMemorySessionStore,
    message_pusher: Arc<dyn MessagePusher>,
}

impl SubmitVoteUseCase {
    pub fn new(store: InMemorySessionStore, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            store,
            message_pusher,
        }
    }

    pub async fn execute(
        &self,
        voter: ConnectionId,
        code: RoomCode,
        target: ConnectionId,
    ) -> Result<(), RoomError> {
        let mut registry = self.store.lock().await;
        let deliveries = registry.submit_vote(&voter, &code, target)?;
        deliver(self.message_pusher.as_ref(), deliveries).await;
        Ok(())
    }
}
