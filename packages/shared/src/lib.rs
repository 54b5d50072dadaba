//! Shared utilities for the impostor game workspace.

pub mod logger;
pub mod time;
