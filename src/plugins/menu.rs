//! Storefront menu callbacks.
//!
//! Every button press edits the menu message in place with the screen
//! for the pressed button.

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::debug;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::store::{render, MenuAction, Screen};
use crate::utils::is_message_not_modified;

/// Handle menu callback queries.
pub async fn menu_callback(
    bot: ThrottledBot,
    q: CallbackQuery,
    state: AppState,
) -> anyhow::Result<()> {
    // Answer first so the client stops showing the loading spinner.
    bot.answer_callback_query(q.id.clone()).await?;
    state.track(&q.from);

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    let Some(action) = MenuAction::parse(data) else {
        debug!("Ignoring unknown callback data {:?} from {}", data, q.from.id);
        return Ok(());
    };

    // Too old or otherwise inaccessible; nothing to edit.
    let Some(message) = q.message.as_ref().and_then(|m| m.regular_message()) else {
        return Ok(());
    };

    let screen = render(action, &state.store);
    edit_screen(&bot, message, screen).await
}

/// Replace the menu message content with `screen`.
///
/// Photo messages get their caption edited, text messages their text.
/// Pressing the button for the screen already shown is not an error.
async fn edit_screen(bot: &ThrottledBot, message: &Message, screen: Screen) -> anyhow::Result<()> {
    let chat_id = message.chat.id;

    let result = if message.photo().is_some() {
        bot.edit_message_caption(chat_id, message.id)
            .caption(screen.caption)
            .parse_mode(ParseMode::Html)
            .reply_markup(screen.keyboard)
            .await
            .map(|_| ())
    } else {
        bot.edit_message_text(chat_id, message.id, screen.caption)
            .parse_mode(ParseMode::Html)
            .reply_markup(screen.keyboard)
            .await
            .map(|_| ())
    };

    match result {
        Err(e) if is_message_not_modified(&e) => {
            debug!("Menu message {} already up to date", message.id.0);
            Ok(())
        }
        other => Ok(other?),
    }
}
