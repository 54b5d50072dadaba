//! Domain layer
//!
//! ゲームのルール（Room の状態遷移）と、外部への依存を抽象化する trait を定義します。

pub mod dealer;
pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod registry;
pub mod round_timer;
pub mod value_object;

#[cfg(test)]
pub use dealer::MockDealer;
pub use dealer::{Dealer, WordPair};
pub use entity::{
    GamePhase, MIN_PLAYERS_TO_START, Player, ROOM_CAPACITY, Room, RoomSnapshot, RoundResult,
    TickResult, Vote, tally,
};
pub use error::{MessagePushError, RoomError, ValueObjectError};
pub use event::{Delivery, RoomEvent};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use registry::{DEFAULT_ROUND_SECONDS, GameSettings, RoomRegistry, TickOutcome};
pub use round_timer::{RoundTimer, TimerId};
pub use value_object::{
    ConnectionId, DESCRIPTION_MAX_LEN, Description, PLAYER_NAME_MAX_LEN, PlayerName,
    ROOM_CODE_MAX_LEN, RoomCode, Timestamp,
};
