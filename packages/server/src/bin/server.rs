//! Impostor game room server.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin impostor-server
//! cargo run --bin impostor-server -- --host 127.0.0.1 --port 3001 --round-seconds 120
//! ```

use std::{sync::Arc, time::Duration};

use clap::Parser;
use impostor_server::{
    domain::{DEFAULT_ROUND_SECONDS, GameSettings},
    infrastructure::{
        dealer::StaticWordList, message_pusher::WebSocketMessagePusher,
        repository::InMemorySessionStore,
    },
    ui::{AppState, Server},
};
use impostor_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "impostor-server")]
#[command(about = "Room server for the impostor party game", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Length of the describing phase in seconds
    #[arg(long, env = "ROUND_SECONDS", default_value_t = DEFAULT_ROUND_SECONDS)]
    round_seconds: u32,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Session store
    // 2. MessagePusher / Dealer
    // 3. UseCases (AppState)
    // 4. Server
    let settings = GameSettings {
        round_seconds: args.round_seconds,
        tick_interval: Duration::from_secs(1),
    };
    let store = InMemorySessionStore::new(settings);
    let message_pusher = Arc::new(WebSocketMessagePusher::new());
    let dealer = Arc::new(StaticWordList::new());
    let state = AppState::new(store, message_pusher, dealer);

    tracing::info!("Round length: {} seconds", settings.round_seconds);
    if let Err(e) = Server::new(state).run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
