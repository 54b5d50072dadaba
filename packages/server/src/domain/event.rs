//! Outbound room events
//!
//! `RoomRegistry` の各操作は、送信すべきイベントとその宛先（`Delivery`）を返します。
//! JSON への変換は Infrastructure 層の DTO が担当します。

use std::collections::HashMap;

use super::{ConnectionId, Description, GamePhase, Player, RoundResult, Vote};

/// Event sent from the server to clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// 接続直後に本人にだけ送る（自分の ID を知らせる）
    Connected { connection_id: ConnectionId },
    RoomUpdate {
        players: Vec<Player>,
        phase: GamePhase,
    },
    RoomFull,
    /// プレイヤーごとに内容が異なる
    GameStarted {
        players: Vec<Player>,
        is_impostor: bool,
        current_word: Option<String>,
        phase: GamePhase,
        current_player: usize,
    },
    TimerUpdate { time_left: u32 },
    DescriptionSubmitted {
        descriptions: HashMap<ConnectionId, Description>,
        current_player: usize,
        phase: GamePhase,
    },
    VoteSubmitted { votes: Vec<Vote> },
    GameStateChange {
        phase: GamePhase,
        descriptions: HashMap<ConnectionId, Description>,
    },
    GameEnded(RoundResult),
    PlayerDisconnected { players: Vec<Player> },
    GameRestarted,
}

/// An event together with its recipients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub recipients: Vec<ConnectionId>,
    pub event: RoomEvent,
}

impl Delivery {
    /// 部屋の全員（`recipients`）に同じイベントを送る
    pub fn broadcast(recipients: Vec<ConnectionId>, event: RoomEvent) -> Self {
        Self { recipients, event }
    }

    /// 1 つの接続にだけ送る
    pub fn to(recipient: ConnectionId, event: RoomEvent) -> Self {
        Self {
            recipients: vec![recipient],
            event,
        }
    }
}
