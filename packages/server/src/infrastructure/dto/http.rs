//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

use super::websocket::GameStateDto;

/// `GET /api/rooms` の 1 要素
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub code: String,
    /// プレイヤー名（参加順）
    pub players: Vec<String>,
    pub game_state: GameStateDto,
    /// RFC 3339
    pub created_at: String,
}

/// `GET /api/rooms/{code}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDetailDto {
    pub code: String,
    pub players: Vec<PlayerDetailDto>,
    pub game_state: GameStateDto,
    pub time_left: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetailDto {
    pub id: String,
    pub name: String,
    pub joined_at: String,
}
