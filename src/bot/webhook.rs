//! Webhook runner.
//!
//! teloxide's axum listener registers the URL with Telegram on start and
//! removes it again on Ctrl+C.

use std::net::SocketAddr;

use anyhow::{bail, Context};
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks::{self, Options};
use tracing::info;
use url::Url;

use super::dispatcher::{BotDispatcher, ThrottledBot};
use crate::config::Config;

const MAX_SECRET_LEN: usize = 256;

/// Telegram only sends back secrets made of `A-Z a-z 0-9 _ -`.
fn valid_secret(secret: &str) -> bool {
    (1..=MAX_SECRET_LEN).contains(&secret.len())
        && secret
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

/// Listener options derived from the webhook settings in `config`.
fn webhook_options(config: &Config) -> anyhow::Result<Options> {
    let raw_url = config
        .webhook_url
        .as_deref()
        .context("WEBHOOK_URL must be set when using webhook mode")?;
    let url = Url::parse(raw_url).with_context(|| format!("Invalid WEBHOOK_URL {raw_url:?}"))?;

    let address = SocketAddr::from(([0, 0, 0, 0], config.webhook_port));
    let options = Options::new(address, url);

    match &config.webhook_secret {
        Some(secret) if !valid_secret(secret) => {
            bail!("WEBHOOK_SECRET must be 1-256 characters of A-Z, a-z, 0-9, _ or -")
        }
        Some(secret) => Ok(options.secret_token(secret.clone())),
        None => Ok(options),
    }
}

/// Serve updates through a webhook until shutdown.
pub async fn start_webhook(
    config: &Config,
    mut dispatcher: BotDispatcher,
    bot: ThrottledBot,
) -> anyhow::Result<()> {
    let options = webhook_options(config)?;
    info!(
        "🔗 Webhook {} on {} (secret: {})",
        options.url,
        options.address,
        if options.secret_token.is_some() { "set" } else { "generated" }
    );

    let listener = webhooks::axum(bot.inner().clone(), options)
        .await
        .context("Failed to register webhook with Telegram")?;

    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("Error from webhook listener"),
        )
        .await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &[(&str, &str)]) -> Config {
        let mut vars = vec![
            ("TELEGRAM_BOT_TOKEN", "1:t"),
            ("BOT_MODE", "webhook"),
            ("WEBHOOK_URL", "https://bot.example.com/tg/hook"),
        ];
        vars.extend_from_slice(pairs);
        Config::from_lookup(|key| {
            vars.iter()
                .rev()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap()
    }

    #[test]
    fn test_options_from_config() {
        let options = webhook_options(&config(&[("WEBHOOK_PORT", "9443")])).unwrap();

        assert_eq!(options.address.port(), 9443);
        assert_eq!(options.url.as_str(), "https://bot.example.com/tg/hook");
        assert_eq!(options.path, "/tg/hook");
        assert_eq!(options.secret_token, None);
    }

    #[test]
    fn test_secret_is_passed_through() {
        let options = webhook_options(&config(&[("WEBHOOK_SECRET", "s3cret_Token-1")])).unwrap();
        assert_eq!(options.secret_token.as_deref(), Some("s3cret_Token-1"));
    }

    #[test]
    fn test_bad_secret_is_an_error() {
        assert!(webhook_options(&config(&[("WEBHOOK_SECRET", "has space")])).is_err());
        assert!(webhook_options(&config(&[("WEBHOOK_SECRET", "ümlaut")])).is_err());
        assert!(!valid_secret(&"a".repeat(257)));
        assert!(valid_secret(&"a".repeat(256)));
    }

    #[test]
    fn test_bad_url_is_an_error() {
        assert!(webhook_options(&config(&[("WEBHOOK_URL", "not a url")])).is_err());
    }
}
