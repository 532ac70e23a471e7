//! Message dispatcher setup.
//!
//! Builds the dispatcher with the command handlers and the menu callback handler.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use teloxide::adaptors::Throttle;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::User;
use tracing::trace;

use crate::config::Config;
use crate::database::{StoredUser, UserRepo};
use crate::plugins;
use crate::store::StoreInfo;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Dispatcher type shared by the polling and webhook runners.
pub type BotDispatcher = Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// User repository for first-seen tracking.
    pub users: Arc<UserRepo>,

    /// Support contact and wallet addresses shown in the menus.
    pub store: Arc<StoreInfo>,

    /// Photo sent with the home screen.
    pub banner_path: Arc<PathBuf>,

    /// Owner user ID (may run /stats).
    pub owner_id: Option<u64>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: &Config, users: Arc<UserRepo>) -> Self {
        let store = StoreInfo {
            support_contact: config.owner_username.clone(),
            wallets: config.wallets.clone(),
        };

        Self {
            users,
            store: Arc::new(store),
            banner_path: Arc::new(config.banner_path.clone()),
            owner_id: config.owner_id,
        }
    }

    /// Check if a user is the bot owner.
    pub fn is_owner(&self, user_id: u64) -> bool {
        self.owner_id == Some(user_id)
    }

    /// Record a Telegram user in the background if not stored yet.
    pub fn track(&self, user: &User) {
        if user.is_bot {
            return;
        }
        let stored = StoredUser::from_telegram(user, Utc::now());
        Arc::clone(&self.users).record_background(stored);
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(bot: ThrottledBot, state: AppState) -> BotDispatcher {
    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        // Update kinds the schema has no branch for (edits, channel posts, ...).
        .default_handler(|upd| async move {
            trace!("Ignoring update {}", upd.id.0);
        })
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
fn schema() -> UpdateHandler<anyhow::Error> {
    // Message handlers: user tracking first, then commands. Anything else
    // (plain chat, unknown commands) ends here quietly.
    let message_handler = Update::filter_message()
        .inspect_async(track_user)
        .branch(plugins::command_handler())
        .branch(dptree::endpoint(ignore_message));

    let callback_handler = plugins::callback_handler();

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}

async fn ignore_message(msg: Message) -> anyhow::Result<()> {
    trace!("No handler for message {} in chat {}", msg.id.0, msg.chat.id);
    Ok(())
}

/// Track user from message (runs before all handlers).
async fn track_user(msg: Message, state: AppState) {
    if let Some(user) = msg.from.as_ref() {
        state.track(user);
    }
}
