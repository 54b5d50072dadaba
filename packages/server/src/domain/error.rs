//! ドメイン層のエラー定義
//!
//! クライアントへは `room-full` 以外のエラーを通知しません（fail-silent）。
//! これらのエラーはサーバー内部でログ出力のためにのみ使われます。

use thiserror::Error;

use super::entity::GamePhase;

/// Value object の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("room code must not contain whitespace")]
    RoomCodeWhitespace,
}

/// Room の状態遷移で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    #[error("room '{0}' does not exist")]
    RoomNotFound(String),

    #[error("room '{0}' is full")]
    RoomFull(String),

    #[error("at least {required} players are required (currently {actual})")]
    NotEnoughPlayers { required: usize, actual: usize },

    #[error("connection '{0}' has already joined a room")]
    AlreadyInRoom(String),

    #[error("connection '{0}' is not a player of this room")]
    NotInRoom(String),

    #[error("action requires the {expected} phase (currently {actual})")]
    WrongPhase {
        expected: GamePhase,
        actual: GamePhase,
    },

    #[error("player '{0}' is not in this room")]
    UnknownPlayer(String),
}

/// メッセージ送信エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    #[error("failed to push message: {0}")]
    PushFailed(String),
}
