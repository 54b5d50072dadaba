//! UseCase: Room への参加
//!
//! 未知の code なら Room を作成します。満員の場合は本人にだけ `room-full` を送ります。

use std::sync::Arc;

use impostor_shared::time::now_millis;

use crate::{
    domain::{
        ConnectionId, Delivery, MessagePusher, PlayerName, RoomCode, RoomError, RoomEvent,
        Timestamp,
    },
    infrastructure::repository::InMemorySessionStore,
};

use super::dispatch::deliver;

/// Room 参加のユースケース
pub struct JoinRoomUseCase {
    store: InMemorySessionStore,
    message_pusher: Arc<dyn MessagePusher>,
}

impl JoinRoomUseCase {
    pub fn new(store: InMemorySessionStore, message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self {
            store,
            message_pusher,
        }
    }

    /// 参加を実行
    ///
    /// # Returns
    ///
    /// * `Ok(())` - 参加成功（`room-update` を Room の全員に送信済み）
    /// * `Err(RoomError::RoomFull)` - 満員（`room-full` を本人に送信済み）
    /// * `Err(RoomError)` - その他の理由で無視した
    pub async fn execute(
        &self,
        connection_id: ConnectionId,
        code: RoomCode,
        name: PlayerName,
    ) -> Result<(), RoomError> {
        let mut registry = self.store.lock().await;
        let joined_at = Timestamp::new(now_millis());

        match registry.join(connection_id.clone(), code, name, joined_at) {
            Ok(deliveries) => {
                deliver(self.message_pusher.as_ref(), deliveries).await;
                Ok(())
            }
            Err(e @ RoomError::RoomFull(_)) => {
                deliver(
                    self.message_pusher.as_ref(),
                    vec![Delivery::to(connection_id, RoomEvent::RoomFull)],
                )
                .await;
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}
