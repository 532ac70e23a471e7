//! User repository with cache-first architecture.
//!
//! Records each Telegram user once, on first contact. An in-process cache
//! remembers who is already stored so repeat messages skip SQLite.

use std::sync::Arc;

use rusqlite::types::ValueRef;
use rusqlite::{params, OptionalExtension, Row};
use tokio::task::{self, JoinHandle};
use tracing::{debug, warn};

use crate::cache::{CacheConfig, TypedCache};
use super::error::DbResult;
use super::models::{parse_timestamp, StoredUser};
use super::Database;

/// Repository for the `users` table.
pub struct UserRepo {
    db: Database,
    cache_by_id: TypedCache<u64, StoredUser>,
}

impl UserRepo {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            cache_by_id: TypedCache::new("users_by_id", CacheConfig::seen_users()),
        }
    }

    /// Store the user unless a row for the id already exists.
    ///
    /// Returns `true` when a new row was written. The first row wins: a later
    /// username change is not persisted.
    pub fn record_first_seen(&self, user: &StoredUser) -> DbResult<bool> {
        if self.cache_by_id.contains(&user.user_id) {
            return Ok(false);
        }

        let conn = self.db.connection()?;
        let inserted = conn.execute(
            "INSERT OR IGNORE INTO users (user_id, username, created_at) VALUES (?1, ?2, ?3)",
            params![user.user_id as i64, user.username, user.created_at_text()],
        )? == 1;
        drop(conn);

        if inserted {
            debug!("Recorded new user {} (@{:?})", user.user_id, user.username);
            self.cache_by_id.insert(user.user_id, user.clone());
        } else if let Some(existing) = self.load(user.user_id)? {
            self.cache_by_id.insert(existing.user_id, existing);
        }

        Ok(inserted)
    }

    /// Record a user in background (non-blocking).
    ///
    /// Failures are logged, never returned. The handle only matters to
    /// callers that need to wait for the write.
    pub fn record_background(self: Arc<Self>, user: StoredUser) -> JoinHandle<()> {
        tokio::spawn(async move {
            let user_id = user.user_id;
            match task::spawn_blocking(move || self.record_first_seen(&user)).await {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => warn!("Failed to record user {}: {}", user_id, e),
                Err(e) => warn!("User recording task for {} failed: {}", user_id, e),
            }
        })
    }

    /// Get user by ID.
    pub fn get(&self, user_id: u64) -> DbResult<Option<StoredUser>> {
        if let Some(user) = self.cache_by_id.get(&user_id) {
            return Ok(Some(user));
        }

        let result = self.load(user_id)?;
        if let Some(user) = &result {
            self.cache_by_id.insert(user_id, user.clone());
        }
        Ok(result)
    }

    /// Total number of stored users.
    pub fn count(&self) -> DbResult<u64> {
        let conn = self.db.connection()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
        Ok(count.max(0) as u64)
    }

    /// Most recently seen users, newest first.
    pub fn latest(&self, limit: usize) -> DbResult<Vec<StoredUser>> {
        let conn = self.db.connection()?;
        let mut stmt = conn.prepare(
            "SELECT user_id, username, created_at FROM users
             ORDER BY created_at DESC, user_id DESC LIMIT ?1",
        )?;
        let users = stmt
            .query_map([limit as i64], read_user)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }

    /// Run a blocking repository call off the async runtime.
    pub async fn run<T, F>(self: &Arc<Self>, f: F) -> DbResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&UserRepo) -> DbResult<T> + Send + 'static,
    {
        let repo = Arc::clone(self);
        task::spawn_blocking(move || f(&repo)).await?
    }

    fn load(&self, user_id: u64) -> DbResult<Option<StoredUser>> {
        let conn = self.db.connection()?;
        let user = conn
            .query_row(
                "SELECT user_id, username, created_at FROM users WHERE user_id = ?1",
                [user_id as i64],
                read_user,
            )
            .optional()?;
        Ok(user)
    }
}

fn read_user(row: &Row<'_>) -> rusqlite::Result<StoredUser> {
    let user_id = row.get::<_, i64>(0)? as u64;

    // A bad timestamp on one row must not hide the rest of the table.
    let created_at = match row.get_ref(2)? {
        ValueRef::Null => None,
        ValueRef::Text(raw) => {
            let parsed = std::str::from_utf8(raw)
                .ok()
                .and_then(|text| parse_timestamp(text).ok());
            if parsed.is_none() {
                warn!("Unreadable created_at for user {}", user_id);
            }
            parsed
        }
        other => {
            warn!("created_at for user {} has type {}", user_id, other.data_type());
            None
        }
    };

    Ok(StoredUser {
        user_id,
        username: row.get(1)?,
        created_at,
    })
}
