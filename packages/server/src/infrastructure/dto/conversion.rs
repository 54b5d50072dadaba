//! Conversion logic between DTOs and domain entities.

use std::collections::{BTreeMap, HashMap};

use impostor_shared::time::timestamp_to_rfc3339;

use crate::domain::{
    ConnectionId, Description, GamePhase, Player, RoomEvent, RoomSnapshot, RoundResult, Vote,
};
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<&Player> for dto::PlayerDto {
    fn from(model: &Player) -> Self {
        Self {
            id: model.id.to_string(),
            name: model.name.as_str().to_string(),
        }
    }
}

impl From<GamePhase> for dto::GameStateDto {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Lobby => Self::Lobby,
            GamePhase::Describing => Self::Describing,
            GamePhase::Voting => Self::Voting,
        }
    }
}

fn players(models: &[Player]) -> Vec<dto::PlayerDto> {
    models.iter().map(dto::PlayerDto::from).collect()
}

fn descriptions(models: &HashMap<ConnectionId, Description>) -> BTreeMap<String, String> {
    models
        .iter()
        .map(|(id, description)| (id.to_string(), description.as_str().to_string()))
        .collect()
}

fn votes(models: &[Vote]) -> BTreeMap<String, String> {
    models
        .iter()
        .map(|vote| (vote.voter.to_string(), vote.target.to_string()))
        .collect()
}

impl From<RoundResult> for dto::ServerMessage {
    fn from(result: RoundResult) -> Self {
        Self::GameEnded {
            impostor: (&result.impostor).into(),
            votes: votes(&result.votes),
            impostor_caught: result.impostor_caught,
            descriptions: descriptions(&result.descriptions),
            secret_word: result.words.word,
            impostor_word: result.words.impostor_word,
        }
    }
}

impl From<RoomEvent> for dto::ServerMessage {
    fn from(event: RoomEvent) -> Self {
        match event {
            RoomEvent::Connected { connection_id } => Self::Connected {
                connection_id: connection_id.into_string(),
            },
            RoomEvent::RoomUpdate { players: p, phase } => Self::RoomUpdate {
                players: players(&p),
                game_state: phase.into(),
            },
            RoomEvent::RoomFull => Self::RoomFull {},
            RoomEvent::GameStarted {
                players: p,
                is_impostor,
                current_word,
                phase,
                current_player,
            } => Self::GameStarted {
                players: players(&p),
                is_impostor,
                current_word,
                game_state: phase.into(),
                current_player,
            },
            RoomEvent::TimerUpdate { time_left } => Self::TimerUpdate { time_left },
            RoomEvent::DescriptionSubmitted {
                descriptions: d,
                current_player,
                phase,
            } => Self::DescriptionSubmitted {
                descriptions: descriptions(&d),
                current_player,
                game_state: phase.into(),
            },
            RoomEvent::VoteSubmitted { votes: v } => Self::VoteSubmitted { votes: votes(&v) },
            RoomEvent::GameStateChange {
                phase,
                descriptions: d,
            } => Self::GameStateChange {
                game_state: phase.into(),
                descriptions: descriptions(&d),
            },
            RoomEvent::GameEnded(result) => result.into(),
            RoomEvent::PlayerDisconnected { players: p } => Self::PlayerDisconnected {
                players: players(&p),
            },
            RoomEvent::GameRestarted => Self::GameRestarted {},
        }
    }
}

impl From<&RoomSnapshot> for http::RoomSummaryDto {
    fn from(room: &RoomSnapshot) -> Self {
        Self {
            code: room.code.to_string(),
            players: room
                .players
                .iter()
                .map(|p| p.name.as_str().to_string())
                .collect(),
            game_state: room.phase.into(),
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}

impl From<&RoomSnapshot> for http::RoomDetailDto {
    fn from(room: &RoomSnapshot) -> Self {
        Self {
            code: room.code.to_string(),
            players: room
                .players
                .iter()
                .map(|p| http::PlayerDetailDto {
                    id: p.id.to_string(),
                    name: p.name.as_str().to_string(),
                    joined_at: timestamp_to_rfc3339(p.joined_at.value()),
                })
                .collect(),
            game_state: room.phase.into(),
            time_left: room.time_left,
            created_at: timestamp_to_rfc3339(room.created_at.value()),
        }
    }
}
