//! Room が所有するラウンドタイマーのハンドル
//!
//! タイマー本体（1 秒ごとの tick タスク）は UseCase 層が起動します。
//! Room はそのハンドルだけを保持し、ハンドルが drop されるとタスクは abort されます。
//! そのため Room を削除したときにタイマーが残ることはありません。

use tokio::task::AbortHandle;

/// Round timer identifier
///
/// tick が自分のタイマーの tick かどうかを判定するために使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Handle to a running round timer task
#[derive(Debug)]
pub struct RoundTimer {
    id: TimerId,
    handle: Option<AbortHandle>,
}

impl RoundTimer {
    pub fn new(id: TimerId, handle: AbortHandle) -> Self {
        Self {
            id,
            handle: Some(handle),
        }
    }

    /// タスクを持たないハンドル（tick を手動で進めるテスト用）
    #[cfg(test)]
    pub(crate) fn detached(id: TimerId) -> Self {
        Self { id, handle: None }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    /// タイマータスクを停止する
    pub fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// タスクを abort せずにハンドルを手放す
    ///
    /// タイマータスク自身が満了を処理したときに使う。自分自身を abort すると
    /// 満了時の通知を送り終える前にタスクが止まってしまう。
    pub fn release(mut self) {
        self.handle = None;
    }
}

impl Drop for RoundTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
