//! Data Transfer Objects (DTOs) for the game server.
//!
//! DTOs are organized by protocol:
//! - `websocket`: WebSocket event DTOs (`{"event": ..., "data": ...}`)
//! - `http`: HTTP API response DTOs

pub mod conversion;
pub mod http;
pub mod websocket;
