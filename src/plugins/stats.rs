//! /stats command plugin (owner only).

use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};
use tracing::debug;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::utils::{format_username, html_escape};

const RECENT_USERS: usize = 5;

/// Handle the /stats command - user totals for the owner.
pub async fn stats_command(
    bot: ThrottledBot,
    msg: Message,
    state: AppState,
) -> anyhow::Result<()> {
    let Some(user_id) = msg.from.as_ref().map(|u| u.id.0) else {
        return Ok(());
    };
    if !state.is_owner(user_id) {
        debug!("Ignoring /stats from non-owner {}", user_id);
        return Ok(());
    }

    let (total, recent) = state
        .users
        .run(|r| Ok((r.count()?, r.latest(RECENT_USERS)?)))
        .await?;

    let mut text = format!("📊 <b>Users:</b> <code>{}</code>", total);
    if !recent.is_empty() {
        text.push_str("\n\n<b>Newest:</b>");
        for user in &recent {
            let name = format_username(user.username.as_deref(), user.user_id);
            let seen = user
                .created_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| "unknown date".to_string());
            text.push_str(&format!("\n• {} <i>{}</i>", html_escape(&name), seen));
        }
    }

    bot.send_message(msg.chat.id, text)
        .parse_mode(ParseMode::Html)
        .reply_parameters(ReplyParameters::new(msg.id))
        .await?;

    Ok(())
}
