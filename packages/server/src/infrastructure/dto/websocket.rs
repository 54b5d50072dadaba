//! WebSocket event DTOs.
//!
//! Every frame is a JSON text message of the form
//! `{"event": "<kebab-case name>", "data": {<camelCase fields>}}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Player as seen by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDto {
    pub id: String,
    pub name: String,
}

/// Game phase as seen by clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStateDto {
    Lobby,
    Describing,
    Voting,
}

/// Events sent by clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    JoinRoom {
        room_code: String,
        player_name: String,
    },
    StartGame {
        room_code: String,
    },
    SubmitDescription {
        room_code: String,
        description: String,
    },
    SubmitVote {
        room_code: String,
        voted_player_id: String,
    },
    RestartGame {
        room_code: String,
    },
}

/// Events sent by the server
///
/// `descriptions` and `votes` are keyed by player id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    Connected {
        connection_id: String,
    },
    RoomUpdate {
        players: Vec<PlayerDto>,
        game_state: GameStateDto,
    },
    RoomFull {},
    GameStarted {
        players: Vec<PlayerDto>,
        is_impostor: bool,
        current_word: Option<String>,
        game_state: GameStateDto,
        current_player: usize,
    },
    TimerUpdate {
        time_left: u32,
    },
    DescriptionSubmitted {
        descriptions: BTreeMap<String, String>,
        current_player: usize,
        game_state: GameStateDto,
    },
    VoteSubmitted {
        votes: BTreeMap<String, String>,
    },
    GameStateChange {
        game_state: GameStateDto,
        descriptions: BTreeMap<String, String>,
    },
    GameEnded {
        impostor: PlayerDto,
        votes: BTreeMap<String, String>,
        impostor_caught: bool,
        descriptions: BTreeMap<String, String>,
        secret_word: String,
        impostor_word: String,
    },
    PlayerDisconnected {
        players: Vec<PlayerDto>,
    },
    GameRestarted {},
}
