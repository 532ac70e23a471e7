//! Utility functions.
//!
//! Collection of helper functions used across the bot.

use teloxide::{ApiError, RequestError};

/// Escape text for Telegram HTML parse mode.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Format a username for display.
///
/// If the user has a username, returns @username.
/// Otherwise, returns `#<user_id>`.
pub fn format_username(username: Option<&str>, user_id: u64) -> String {
    match username {
        Some(u) => format!("@{}", u),
        None => format!("#{}", user_id),
    }
}

/// Whether an edit failed only because the content is unchanged.
///
/// Telegram rejects edits that would leave a message identical, which
/// happens when the same button is pressed twice.
pub fn is_message_not_modified(err: &RequestError) -> bool {
    matches!(err, RequestError::Api(ApiError::MessageNotModified))
}
