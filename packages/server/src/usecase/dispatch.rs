//! `Delivery` を JSON にシリアライズして MessagePusher に渡す
//!
//! 呼び出し側は RoomRegistry のロックを保持したまま呼び出すこと
//! （同じ Room への通知の順序が処理順と一致する）。

use crate::{
    domain::{Delivery, MessagePusher},
    infrastructure::dto::websocket::ServerMessage,
};

/// 送信失敗はログ出力のみで、呼び出し元には返さない
pub(crate) async fn deliver(message_pusher: &dyn MessagePusher, deliveries: Vec<Delivery>) {
    for Delivery { recipients, event } in deliveries {
        let message = ServerMessage::from(event);
        let json = match serde_json::to_string(&message) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize {:?}: {}", message, e);
                continue;
            }
        };

        let result = if recipients.len() == 1 {
            message_pusher.push_to(&recipients[0], &json).await
        } else {
            message_pusher.broadcast(recipients, &json).await
        };
        if let Err(e) = result {
            tracing::warn!("Failed to deliver message: {}", e);
        }
    }
}
