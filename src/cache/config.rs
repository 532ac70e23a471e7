//! Cache sizing and expiry.

use std::time::Duration;

/// When entries leave the cache besides capacity eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Never expire on time.
    Never,
    /// Expire a fixed time after insertion.
    AfterWrite(Duration),
    /// Expire after going unread for this long.
    AfterIdle(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    pub max_capacity: u64,
    pub expiry: Expiry,
}

impl CacheConfig {
    /// Users already in the `users` table. A stored row never changes, so
    /// entries only need to leave once a user goes quiet.
    pub fn seen_users() -> Self {
        Self {
            max_capacity: 50_000,
            expiry: Expiry::AfterIdle(Duration::from_secs(6 * 3600)),
        }
    }
}
