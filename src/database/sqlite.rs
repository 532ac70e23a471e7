//! SQLite database wrapper.

use std::path::Path;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use super::error::DbResult;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY,
        username TEXT,
        created_at TEXT
    );
";

/// Database wrapper around a pooled SQLite file.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open (or create) the database file and make sure the schema exists.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or the schema cannot be applied.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref();
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(4).build(manager)?;

        let conn = pool.get()?;
        conn.execute_batch(SCHEMA)?;

        info!("SQLite database ready at {}", path.display());

        Ok(Self { pool })
    }

    /// Get a connection from the pool.
    /// The connection goes back to the pool when dropped.
    pub fn connection(&self) -> DbResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
