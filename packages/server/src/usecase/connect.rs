//! UseCase: 接続処理
//!
//! WebSocket 接続ごとに ConnectionId を採番し、送信チャンネルを MessagePusher に登録して
//! 本人に `connected` を送ります。Room への参加は `join-room` で行います。

use std::sync::Arc;

use crate::domain::{ConnectionId, Delivery, MessagePusher, PusherChannel, RoomEvent};

use super::dispatch::deliver;

/// 接続のユースケース
pub struct ConnectUseCase {
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
}

impl ConnectUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 接続を登録し、採番した ConnectionId を返す
    pub async fn execute(&self, sender: PusherChannel) -> ConnectionId {
        let connection_id = ConnectionId::generate();
        self.message_pusher
            .register_client(connection_id.clone(), sender)
            .await;

        deliver(
            self.message_pusher.as_ref(),
            vec![Delivery::to(
                connection_id.clone(),
                RoomEvent::Connected {
                    connection_id: connection_id.clone(),
                },
            )],
        )
        .await;
        tracing::info!("Client '{}' connected", connection_id);

        connection_id
    }
}
