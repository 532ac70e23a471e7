//! Configuration module for the GhostGPT bot.
//!
//! Loads configuration from environment variables (after `.env` is applied).

use std::env;
use std::path::PathBuf;

use thiserror::Error;

use crate::store::{Network, Wallets};

const DEFAULT_OWNER_USERNAME: &str = "@GhostGptDev";
const DEFAULT_DB_PATH: &str = "bot.db";
const DEFAULT_BANNER_PATH: &str = "banner.jpg";
const DEFAULT_WEBHOOK_PORT: u16 = 8443;

/// Bot running mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BotMode {
    #[default]
    Polling,
    Webhook,
}

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TELEGRAM_BOT_TOKEN must be set")]
    MissingToken,

    #[error("WEBHOOK_URL must be set when BOT_MODE is webhook")]
    MissingWebhookUrl,

    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub bot_mode: BotMode,
    pub webhook_url: Option<String>,
    pub webhook_port: u16,
    pub webhook_secret: Option<String>,

    /// Contact shown on the support screen, always starting with `@`.
    pub owner_username: String,

    /// User allowed to run owner commands such as /stats.
    pub owner_id: Option<u64>,

    // Storefront
    pub banner_path: PathBuf,
    pub wallets: Wallets,

    // SQLite
    pub db_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = var("TELEGRAM_BOT_TOKEN")
            .or_else(|| var("BOT_TOKEN"))
            .ok_or(ConfigError::MissingToken)?;

        let bot_mode = match var("BOT_MODE").map(|m| m.to_lowercase()).as_deref() {
            Some("webhook") => BotMode::Webhook,
            _ => BotMode::Polling,
        };

        let webhook_url = var("WEBHOOK_URL");
        if bot_mode == BotMode::Webhook && webhook_url.is_none() {
            return Err(ConfigError::MissingWebhookUrl);
        }

        let webhook_port = match var("WEBHOOK_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "WEBHOOK_PORT",
                value: raw,
            })?,
            None => DEFAULT_WEBHOOK_PORT,
        };

        let owner_id = var("OWNER_ID")
            .map(|raw| {
                raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                    key: "OWNER_ID",
                    value: raw,
                })
            })
            .transpose()?;

        let owner_username = var("OWNER_USERNAME")
            .map(|u| format!("@{}", u.trim_start_matches('@')))
            .unwrap_or_else(|| DEFAULT_OWNER_USERNAME.to_string());

        let mut wallets = Wallets::default();
        for network in Network::all() {
            if let Some(address) = var(network.env_key()) {
                wallets.set(network, address);
            }
        }

        Ok(Self {
            bot_token,
            bot_mode,
            webhook_url,
            webhook_port,
            webhook_secret: var("WEBHOOK_SECRET"),
            owner_username,
            owner_id,
            banner_path: var("BANNER_PATH")
                .unwrap_or_else(|| DEFAULT_BANNER_PATH.to_string())
                .into(),
            wallets,
            db_path: var("DB_PATH")
                .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("TELEGRAM_BOT_TOKEN", "123:abc")]).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.bot_mode, BotMode::Polling);
        assert_eq!(config.owner_username, "@GhostGptDev");
        assert_eq!(config.owner_id, None);
        assert_eq!(config.db_path, PathBuf::from("bot.db"));
        assert_eq!(config.banner_path, PathBuf::from("banner.jpg"));
        assert_eq!(config.webhook_port, 8443);
        assert!(Network::all().all(|n| config.wallets.address(n).is_none()));
    }

    #[test]
    fn test_missing_token() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingToken)));
        assert!(matches!(
            load(&[("TELEGRAM_BOT_TOKEN", "   ")]),
            Err(ConfigError::MissingToken)
        ));
    }

    #[test]
    fn test_token_alias() {
        let config = load(&[("BOT_TOKEN", "42:xyz")]).unwrap();
        assert_eq!(config.bot_token, "42:xyz");
    }

    #[test]
    fn test_webhook_requires_url() {
        let result = load(&[("TELEGRAM_BOT_TOKEN", "t"), ("BOT_MODE", "Webhook")]);
        assert!(matches!(result, Err(ConfigError::MissingWebhookUrl)));

        let config = load(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("BOT_MODE", "webhook"),
            ("WEBHOOK_URL", "https://example.com/hook"),
            ("WEBHOOK_PORT", "9000"),
        ])
        .unwrap();
        assert_eq!(config.bot_mode, BotMode::Webhook);
        assert_eq!(config.webhook_port, 9000);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_polling() {
        let config = load(&[("TELEGRAM_BOT_TOKEN", "t"), ("BOT_MODE", "carrier-pigeon")]).unwrap();
        assert_eq!(config.bot_mode, BotMode::Polling);
    }

    #[test]
    fn test_invalid_numbers() {
        let result = load(&[("TELEGRAM_BOT_TOKEN", "t"), ("OWNER_ID", "me")]);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "OWNER_ID", .. })
        ));

        let result = load(&[("TELEGRAM_BOT_TOKEN", "t"), ("WEBHOOK_PORT", "99999")]);
        assert!(matches!(
            result,
            Err(ConfigError::Invalid { key: "WEBHOOK_PORT", .. })
        ));
    }

    #[test]
    fn test_owner_and_wallets() {
        let config = load(&[
            ("TELEGRAM_BOT_TOKEN", "t"),
            ("OWNER_ID", "8087130352"),
            ("OWNER_USERNAME", "support_desk"),
            ("CRYPTO_WALLET_BTC", " bc1qexample "),
            ("CRYPTO_WALLET_ETH", ""),
        ])
        .unwrap();

        assert_eq!(config.owner_id, Some(8087130352));
        assert_eq!(config.owner_username, "@support_desk");
        assert_eq!(config.wallets.address(Network::Btc), Some("bc1qexample"));
        assert_eq!(config.wallets.address(Network::Eth), None);
    }
}
