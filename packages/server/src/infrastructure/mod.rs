//! Infrastructure layer
//!
//! ドメイン層の trait（`MessagePusher`, `Dealer`）の具体的な実装と、
//! セッション状態の保存先、ワイヤフォーマット（DTO）を提供します。

pub mod dealer;
pub mod dto;
pub mod message_pusher;
pub mod repository;
