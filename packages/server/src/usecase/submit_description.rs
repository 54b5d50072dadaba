//! UseCase: 説明文の提出

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, Description, MessagePusher, RoomCode, RoomError},
    infrastructure::repository::InMemorySessionStore,
};

use super::dispatch::deliver;

/// 説明文提出のユースケース
pub struct SubmitDescriptionUseCase {
    store: InMemorySessionStore,
    message_pusher: Arc<dyn MessagePusher>,
}

impl SubmitDescriptionUseCase {
    pub fn new(store: InMemorySessionStore, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            store,
            message_pusher,
        }
    }

    /// 説明文を記録して `description-submitted` を Room の全員に送る
    pub async fn execute(
        &self,
        requester: ConnectionId,
        code: RoomCode,
        description: Description,
    ) -> Result<(), RoomError> {
        let mut registry = self.store.lock().await;
        let deliveries = registry.submit_description(&requester, &code, description)?;
        deliver(self.message_pusher.as_ref(), deliveries).await;
        Ok(())
    }
}
