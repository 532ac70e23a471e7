//! Database models.

pub mod user;

pub use user::{parse_timestamp, StoredUser};
