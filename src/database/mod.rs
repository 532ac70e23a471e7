//! Database module exports.

mod error;
mod models;
mod sqlite;
mod users;

pub use models::StoredUser;
pub use sqlite::Database;
pub use users::UserRepo;
