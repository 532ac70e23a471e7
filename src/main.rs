//! GhostGPT - Telegram storefront bot
//!
//! Menu-driven store for GhostGPT plans with crypto payment addresses.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `database` - SQLite storage for first-seen users
//! - `cache` - In-process caching with Moka
//! - `store` - Catalog, captions, keyboards and menu routing
//! - `bot` - Core bot functionality (with Throttle for API rate limiting)
//! - `plugins` - Command and callback handlers
//! - `utils` - Utility functions

mod bot;
mod cache;
mod config;
mod database;
mod plugins;
mod store;
mod utils;

use std::sync::Arc;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bot::AppState;
use config::Config;
use database::{Database, UserRepo};
use plugins::Command;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ghostgpt=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting GhostGPT bot...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");
    info!("Bot mode: {:?}", config.bot_mode);
    info!("Wallets configured: {}", config.wallets.configured());

    match config.owner_id {
        Some(id) => info!("Bot owner: {}", id),
        None => info!("No owner ID configured (OWNER_ID is empty)"),
    }

    let db = Database::open(&config.db_path)?;
    let users = Arc::new(UserRepo::new(db));

    // Throttle keeps us inside Telegram's rate limits:
    // 30 messages per second globally, 1 per second per chat.
    let bot = Bot::new(&config.bot_token).throttle(Limits::default());
    info!("Bot initialized with rate limiting (Throttle)");

    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!("Failed to register bot commands: {}", e);
    }

    let state = AppState::new(&config, users);
    let dispatcher = bot::build_dispatcher(bot.clone(), state);

    bot::run(&config, dispatcher, bot).await
}
