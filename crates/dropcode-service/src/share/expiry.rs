//! Time-to-live policy.

use chrono::{DateTime, Duration, Utc};

/// Fixed lifetime of every entry.
pub const TTL_HOURS: i64 = 24;

/// Answers whether an entry is still live.
///
/// Liveness depends only on elapsed wall-clock time since creation. Reads do
/// not extend it and nothing shortens it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryPolicy {
    ttl: Duration,
}

impl ExpiryPolicy {
    /// The standard 24-hour policy.
    pub fn new() -> Self {
        Self {
            ttl: Duration::hours(TTL_HOURS),
        }
    }

    /// The time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// When an entry created at `created_at` expires.
    pub fn expires_at(&self, created_at: DateTime<Utc>) -> DateTime<Utc> {
        created_at + self.ttl
    }

    /// `true` once strictly more than the TTL has elapsed.
    pub fn is_expired(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - created_at > self.ttl
    }
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self::new()
    }
}
