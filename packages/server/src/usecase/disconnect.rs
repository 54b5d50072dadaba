//! UseCase: 切断処理
//!
//! Room からプレイヤーを削除し、残ったプレイヤーに通知します。
//! Room に参加していなかった接続でも、MessagePusher からの登録解除は必ず行います。

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, MessagePusher, RoomError},
    infrastructure::repository::InMemorySessionStore,
};

use super::dispatch::deliver;

/// 切断のユースケース
pub struct DisconnectUseCase {
    store: InMemorySessionStore,
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectUseCase {
    pub fn new(store: InMemorySessionStore, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            store,
            message_pusher,
        }
    }

    /// 切断を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Room から削除した（空になった Room は削除済み）
    /// * `Err(RoomError::NotInRoom)` - どの Room にも参加していなかった
    pub async fn execute(&self, connection_id: ConnectionId) -> Result<(), RoomError> {
        let result = {
            let mut registry = self.store.lock().await;
            match registry.disconnect(&connection_id) {
                Ok(deliveries) => {
                    deliver(self.message_pusher.as_ref(), deliveries).await;
                    Ok(())
                }
                Err(e) => Err(e),
            }
        };

        self.message_pusher.unregister_client(&connection_id).await;
        result
    }
}
