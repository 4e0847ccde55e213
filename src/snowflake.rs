//! Snowflake identifier helpers.
//!
//! Platform identifiers embed a millisecond creation timestamp in their upper
//! bits, offset from the platform epoch (2015-01-01T00:00:00Z).

use chrono::{DateTime, Utc};

/// Platform epoch in Unix milliseconds.
pub const PLATFORM_EPOCH_MS: i64 = 1_420_070_400_000;

const TIMESTAMP_SHIFT: u32 = 22;

/// Returns the creation time of a snowflake in Unix milliseconds.
#[must_use]
pub fn timestamp_ms(id: u64) -> i64 {
    i64::try_from(id >> TIMESTAMP_SHIFT).unwrap_or_default() + PLATFORM_EPOCH_MS
}

/// Returns the creation time of a snowflake.
#[must_use]
pub fn created_at(id: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp_ms(id)).unwrap_or_default()
}
