//! Room server for a two-player "guess the impostor" party game.
//!
//! Clients connect over WebSocket, join a room by code, and play rounds of
//! describe-then-vote. A small read-only HTTP API lists the rooms.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
