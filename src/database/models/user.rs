//! Stored user row.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use teloxide::types::User;

/// Naive ISO-8601 layout written by earlier deployments of the bot.
const LEGACY_TIMESTAMP: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Fractional digits kept in the `created_at` column.
const STORED_SUBSEC_DIGITS: u16 = 6;

/// A user as recorded the first time they talked to the bot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredUser {
    /// Telegram user ID.
    pub user_id: u64,
    /// Username without @, as it was on first contact.
    pub username: Option<String>,
    /// When the user was first seen (UTC). `None` for rows whose
    /// `created_at` is NULL or unreadable.
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredUser {
    /// Build a row for `user`. `seen_at` is cut to the precision the
    /// table stores, so the value matches what a later read returns.
    pub fn from_telegram(user: &User, seen_at: DateTime<Utc>) -> Self {
        Self::new(user.id.0, user.username.clone(), seen_at)
    }

    pub fn new(user_id: u64, username: Option<String>, seen_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            username,
            created_at: Some(seen_at.trunc_subsecs(STORED_SUBSEC_DIGITS)),
        }
    }

    /// `created_at` in the form stored in the `users` table.
    pub fn created_at_text(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Micros, true))
    }
}

/// Parse a `created_at` column value.
///
/// Accepts RFC 3339 and the naive legacy layout (read as UTC).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(ts) => Ok(ts.with_timezone(&Utc)),
        Err(_) => NaiveDateTime::parse_from_str(raw, LEGACY_TIMESTAMP).map(|n| n.and_utc()),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_parse_rfc3339() {
        let ts = parse_timestamp("2025-03-01T10:20:30.123456Z").unwrap();
        assert_eq!(ts.timestamp(), 1740824430);
        assert_eq!(ts.timestamp_subsec_micros(), 123456);

        let offset = parse_timestamp("2025-03-01T12:20:30+02:00").unwrap();
        assert_eq!(offset, Utc.with_ymd_and_hms(2025, 3, 1, 10, 20, 30).unwrap());
    }

    #[test]
    fn test_parse_legacy_naive() {
        let ts = parse_timestamp("2025-03-01T10:20:30.654321").unwrap();
        assert_eq!(ts.timestamp(), 1740824430);
        assert_eq!(ts.timestamp_subsec_micros(), 654321);

        let whole = parse_timestamp("2025-03-01T10:20:30").unwrap();
        assert_eq!(whole, Utc.with_ymd_and_hms(2025, 3, 1, 10, 20, 30).unwrap());
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn test_new_keeps_stored_precision() {
        let seen = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap()
            + Duration::nanoseconds(123_456_789);
        let user = StoredUser::new(7, None, seen);

        let text = user.created_at_text().unwrap();
        assert_eq!(text, "2024-12-31T23:59:59.123456Z");
        assert_eq!(Some(parse_timestamp(&text).unwrap()), user.created_at);
    }
}
