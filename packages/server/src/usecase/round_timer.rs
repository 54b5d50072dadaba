//! ラウンドタイマーのタスク
//!
//! `tick_interval` ごとに RoomRegistry をロックして `tick` を呼び、結果を送信します。
//! 最初の tick は開始から 1 周期後です。タスクは Room が持つ `RoundTimer` を
//! drop / cancel すると中断され、`tick` が `keep_running == false` を返すと自ら終了します。

use std::sync::Arc;

use tokio::time::{Instant, interval_at};

use crate::{
    domain::{MessagePusher, RoomCode, RoundTimer, TickOutcome, TimerId},
    infrastructure::repository::InMemorySessionStore,
};

use super::dispatch::deliver;

pub(crate) fn spawn_round_timer(
    store: InMemorySessionStore,
    message_pusher: Arc<dyn MessagePusher>,
    code: RoomCode,
    timer_id: TimerId,
) -> RoundTimer {
    let period = store.settings().tick_interval;
    let handle = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;

            let mut registry = store.lock().await;
            let TickOutcome {
                deliveries,
                keep_running,
            } = registry.tick(&code, timer_id);
            deliver(message_pusher.as_ref(), deliveries).await;
            drop(registry);

            if !keep_running {
                break;
            }
        }
        tracing::debug!(
            "Round timer {} for room '{}' stopped",
            timer_id.value(),
            code
        );
    });

    RoundTimer::new(timer_id, handle.abort_handle())
}
