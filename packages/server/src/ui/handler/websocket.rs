//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::{
    domain::{ConnectionId, Description, PlayerName, RoomCode, RoomError, ValueObjectError},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
};

/// Why an inbound event was dropped (logged only, never sent to the client)
#[derive(Debug, Error)]
enum InboundError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValueObjectError),

    #[error("rejected: {0}")]
    Rejected(#[from] RoomError),
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// This handles the outbound flow: every event the use cases push for this
/// connection ends up in `rx` and is written to the socket in order.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this client to receive messages
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state.connect_usecase.execute(tx).await;

    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let connection_id_clone = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error from '{}': {}", connection_id_clone, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!(
                        "Received text from '{}': {}",
                        connection_id_clone,
                        text.as_str()
                    );
                    handle_text(&state_clone, &connection_id_clone, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", connection_id_clone);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    match state.disconnect_usecase.execute(connection_id.clone()).await {
        Ok(()) => tracing::info!("Client '{}' left its room", connection_id),
        Err(e) => tracing::debug!("Client '{}' disconnected: {}", connection_id, e),
    }
}

async fn handle_text(state: &AppState, connection_id: &ConnectionId, text: &str) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!(
                "Failed to parse message from '{}' as a client event: {}",
                connection_id,
                e
            );
            return;
        }
    };

    if let Err(e) = dispatch(state, connection_id.clone(), message).await {
        tracing::debug!("Ignored event from '{}': {}", connection_id, e);
    }
}

/// Convert the DTO (String) into domain models and run the matching use case
async fn dispatch(
    state: &AppState,
    connection_id: ConnectionId,
    message: ClientMessage,
) -> Result<(), InboundError> {
    match message {
        ClientMessage::JoinRoom {
            room_code,
            player_name,
        } => {
            state
                .join_room_usecase
                .execute(
                    connection_id,
                    RoomCode::try_from(room_code)?,
                    PlayerName::try_from(player_name)?,
                )
                .await?
        }
        ClientMessage::StartGame { room_code } => {
            state
                .start_game_usecase
                .execute(connection_id, RoomCode::try_from(room_code)?)
                .await?
        }
        ClientMessage::SubmitDescription {
            room_code,
            description,
        } => {
            state
                .submit_description_usecase
                .execute(
                    connection_id,
                    RoomCode::try_from(room_code)?,
                    Description::try_from(description)?,
                )
                .await?
        }
        ClientMessage::SubmitVote {
            room_code,
            voted_player_id,
        } => {
            state
                .submit_vote_usecase
                .execute(
                    connection_id,
                    RoomCode::try_from(room_code)?,
                    ConnectionId::try_from(voted_player_id)?,
                )
                .await?
        }
        ClientMessage::RestartGame { room_code } => {
            state
                .restart_game_usecase
                .execute(connection_id, RoomCode::try_from(room_code)?)
                .await?
        }
    }
    Ok(())
}
