//! InMemory Session Store 実装
//!
//! 全ての Room と接続の索引（`RoomRegistry`）を 1 つの `Mutex` で保持します。
//!
//! UseCase はロックを取得したまま「状態の変更」と「通知の送信」を行います。
//! これにより、同じ Room への操作（タイマーの tick を含む）は到着順に 1 つずつ処理され、
//! クライアントから見える通知の順序も処理順と一致します。

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::domain::{GameSettings, RoomRegistry};

/// インメモリ Session Store
///
/// `Clone` は同じ `RoomRegistry` を共有するハンドルを作るだけです。
#[derive(Clone)]
pub struct InMemorySessionStore {
    registry: Arc<Mutex<RoomRegistry>>,
    settings: GameSettings,
}

impl InMemorySessionStore {
    /// 新しい InMemorySessionStore を作成
    pub fn new(settings: GameSettings) -> Self {
        Self {
            registry: Arc::new(Mutex::new(RoomRegistry::new(settings))),
            settings,
        }
    }

    /// RoomRegistry を排他的にロックする
    pub async fn lock(&self) -> MutexGuard<'_, RoomRegistry> {
        self.registry.lock().await
    }

    /// ロックを取らずに設定値を参照する
    pub fn settings(&self) -> GameSettings {
        self.settings
    }
}
