/// Data models for database entities
///
/// Timestamps live in the database as fixed-width RFC 3339 strings and are
/// parsed on demand.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::FromRow;

/// Calendar-day format used for `date` and the folder name prefix
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Represents a tracked scratch folder
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct FolderRecord {
    pub id: i64,
    pub path: String,
    pub name: String,
    pub date: String,       // YYYY-MM-DD
    pub created_at: String, // RFC 3339, UTC, microseconds
    pub times_opened: i64,
    pub last_opened: String, // RFC 3339, UTC, microseconds
}

impl FolderRecord {
    /// Parsed `last_opened`, or `None` if the stored value is malformed
    pub fn last_opened_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.last_opened)
    }

    /// Usage values after one more selection at `now`
    ///
    /// `last_opened` never moves backwards, even if the clock did.
    pub fn next_usage(&self, now: DateTime<Utc>) -> (i64, DateTime<Utc>) {
        let last_opened = match self.last_opened_at() {
            Some(previous) if previous > now => previous,
            _ => now,
        };
        (self.times_opened + 1, last_opened)
    }
}

/// Input for inserting a freshly created folder
#[derive(Debug, Clone)]
pub struct NewFolder {
    pub path: String,
    pub name: String,
    pub date: String,
    pub created_at: DateTime<Utc>,
}

impl NewFolder {
    pub fn new(path: String, name: String, now: DateTime<Utc>) -> Self {
        Self {
            path,
            name,
            date: format_date(now),
            created_at: now,
        }
    }
}

/// Lossless, lexically sortable timestamp string
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Creation day in local time, the way it appears in folder names
pub fn format_date(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&chrono::Local).format(DATE_FORMAT).to_string()
}
