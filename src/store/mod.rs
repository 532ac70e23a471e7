//! Storefront domain: catalog, captions, keyboards and menu routing.
//!
//! Nothing here talks to Telegram; handlers in `plugins` render a
//! [`Screen`] and send or edit it.

mod catalog;
mod captions;
mod keyboards;
mod menu;
mod wallets;

pub use catalog::{Network, Plan};
pub use menu::{render, MenuAction, Screen, StoreInfo};
pub use wallets::Wallets;
