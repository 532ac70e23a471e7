//! In-process caches (Moka) that sit in front of SQLite so hot paths,
//! like every incoming message, skip the database when the answer is known.

mod config;
mod typed;

pub use config::{CacheConfig, Expiry};
pub use typed::TypedCache;
