//! Domain entities - the core business objects.

mod post;
mod user;

use chrono::{DateTime, SecondsFormat, Utc};

pub use post::{KEEP_IMAGE_SENTINEL, Post};
pub use user::{DEFAULT_STATUS, User};

/// Canonical textual form of a timestamp: `2024-01-31T09:15:00.000Z`.
pub fn iso8601(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
