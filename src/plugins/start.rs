//! /start command plugin.
//!
//! Records the user and sends the storefront home screen.

use chrono::Utc;
use teloxide::prelude::*;
use teloxide::types::{InputFile, ParseMode};
use tracing::warn;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::database::StoredUser;
use crate::store::Screen;

/// Handle the /start command.
pub async fn start_handler(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let chat_id = msg.chat.id;

    // Store before replying so a brand-new user is on record even if the send fails.
    if let Some(user) = msg.from.as_ref().filter(|u| !u.is_bot) {
        let stored = StoredUser::from_telegram(user, Utc::now());
        if let Err(e) = state.users.run(move |r| r.record_first_seen(&stored)).await {
            warn!("Failed to record user {} on /start: {}", user.id, e);
        }
    }

    let screen = Screen::home();
    let banner = state.banner_path.as_path();

    if banner.exists() {
        bot.send_photo(chat_id, InputFile::file(banner))
            .caption(screen.caption)
            .parse_mode(ParseMode::Html)
            .reply_markup(screen.keyboard)
            .await?;
    } else {
        warn!("Banner {} missing, sending text menu", banner.display());
        bot.send_message(chat_id, screen.caption)
            .parse_mode(ParseMode::Html)
            .reply_markup(screen.keyboard)
            .await?;
    }

    Ok(())
}
