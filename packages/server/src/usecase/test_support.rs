//! UseCase のテスト用ヘルパー

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    domain::{
        ConnectionId, GameSettings, MessagePusher, MockDealer, PlayerName, RoomCode, WordPair,
    },
    infrastructure::{
        dto::websocket::ServerMessage, message_pusher::WebSocketMessagePusher,
        repository::InMemorySessionStore,
    },
};

pub(crate) fn id(value: &str) -> ConnectionId {
    ConnectionId::new(value.to_string()).unwrap()
}

pub(crate) fn code(value: &str) -> RoomCode {
    RoomCode::new(value.to_string()).unwrap()
}

pub(crate) fn name(value: &str) -> PlayerName {
    PlayerName::new(value.to_string()).unwrap()
}

/// 常に elephant / rhinoceros を選び、`impostor_index` 番目をインポスターにする
pub(crate) fn fixed_dealer(impostor_index: usize) -> Arc<MockDealer> {
    let mut dealer = MockDealer::new();
    dealer
        .expect_word_pair()
        .return_const(WordPair::new("elephant", "rhinoceros"));
    dealer.expect_impostor_index().return_const(impostor_index);
    Arc::new(dealer)
}

/// 本物の Store と WebSocketMessagePusher を使うテスト環境
pub(crate) struct Harness {
    pub store: InMemorySessionStore,
    pub pusher: Arc<WebSocketMessagePusher>,
}

impl Harness {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            store: InMemorySessionStore::new(settings),
            pusher: Arc::new(WebSocketMessagePusher::new()),
        }
    }

    pub fn message_pusher(&self) -> Arc<dyn MessagePusher> {
        self.pusher.clone()
    }

    /// クライアントを pusher に登録し、受信側を返す
    pub async fn client(&self, value: &str) -> (ConnectionId, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.pusher.register_client(id(value), tx).await;
        (id(value), rx)
    }
}

/// 受信済みのメッセージを全て取り出す
pub(crate) fn drain(rx: &mut mpsc::UnboundedReceiver<String>) -> Vec<ServerMessage> {
    let mut messages = Vec::new();
    while let Ok(json) = rx.try_recv() {
        messages.push(serde_json::from_str(&json).unwrap());
    }
    messages
}
