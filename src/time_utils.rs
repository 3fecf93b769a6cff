// SPDX-License-Identifier: MIT

//! Shared helpers for timestamps and identifier generation.

use chrono::{SecondsFormat, Utc};
use std::sync::atomic::{AtomicU64, Ordering};

/// Current UTC time as an RFC3339 string with a `Z` suffix.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Today's calendar date as a `YYYY-MM-DD` prefix for log matching.
///
/// Daily aggregation is a string-prefix match against stored ISO dates,
/// not a timezone-aware comparison.
pub fn today_prefix() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Generate a record identifier from the current time.
///
/// Millisecond timestamp plus a process-local sequence suffix so that
/// rapid successive creates (e.g. the exercises of one workout) stay
/// distinct.
pub fn new_id() -> String {
    static SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = SEQ.fetch_add(1, Ordering::Relaxed) % 1000;
    format!("{}{:03}", Utc::now().timestamp_millis(), seq)
}
