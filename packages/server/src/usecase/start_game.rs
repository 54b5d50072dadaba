//! UseCase: ゲーム開始
//!
//! 単語ペアとインポスターを選び、ラウンドタイマーを起動して、
//! 各プレイヤーに個別の `game-started` を送ります（インポスターには単語を送らない）。

use std::sync::Arc;

use crate::{
    domain::{ConnectionId, Dealer, MessagePusher, RoomCode, RoomError},
    infrastructure::repository::InMemorySessionStore,
};

use super::{dispatch::deliver, round_timer::spawn_round_timer};

/// ゲーム開始のユースケース
pub struct StartGameUseCase {
    store: InMemorySessionStore,
    message_pusher: Arc<dyn MessagePusher>,
    /// Dealer（単語ペアとインポスター選出の抽象化）
    dealer: Arc<dyn Dealer>,
}

impl StartGameUseCase {
    pub fn new(
        store: InMemorySessionStore,
        message_pusher: Arc<dyn MessagePusher>,
        dealer: Arc<dyn Dealer>,
    ) -> Self {
        Self {
            store,
            message_pusher,
            dealer,
        }
    }

    /// ゲーム開始を実行
    ///
    /// Room が存在しない、要求者が参加者でない、2 人未満の場合は何も送らずに `Err` を返す。
    /// 既にラウンド中であれば、タイマーごと新しいラウンドに置き換える。
    pub async fn execute(&self, requester: ConnectionId, code: RoomCode) -> Result<(), RoomError> {
        let mut registry = self.store.lock().await;
        let deliveries =
            registry.start_game(&requester, &code, self.dealer.as_ref(), |timer_id| {
                spawn_round_timer(
                    self.store.clone(),
                    self.message_pusher.clone(),
                    code.clone(),
                    timer_id,
                )
            })?;
        deliver(self.message_pusher.as_ref(), deliveries).await;

        tracing::info!("Game started in room '{}'", code);
        Ok(())
    }
}
