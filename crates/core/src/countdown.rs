//! Event countdown calculation.
//!
//! The remaining time is an exact decomposition of the millisecond
//! difference between the target instant and now: each larger unit's
//! remainder feeds the next smaller unit, and every field holds at zero
//! once the target has passed.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Interval at which clients (and the SSE stream) recompute the countdown.
pub const TICK_INTERVAL_MS: u64 = 1_000;

/// Days/hours/minutes/seconds left until the target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    /// Break a non-negative millisecond difference into units.
    pub fn from_millis(diff_ms: i64) -> Self {
        let diff_ms = diff_ms.max(0);
        Self {
            days: diff_ms / MS_PER_DAY,
            hours: (diff_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (diff_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (diff_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Total milliseconds represented by the four fields.
    pub fn total_millis(&self) -> i64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Compute the time remaining from `now` until `target`.
pub fn time_remaining(target: Timestamp, now: Timestamp) -> TimeRemaining {
    TimeRemaining::from_millis((target - now).num_milliseconds())
}

/// Point-in-time view of the countdown, as served to the landing page.
#[derive(Debug, Clone, Serialize)]
pub struct CountdownSnapshot {
    pub target: Timestamp,
    pub now: Timestamp,
    pub remaining: TimeRemaining,
    pub elapsed: bool,
}

impl CountdownSnapshot {
    pub fn at(target: Timestamp, now: Timestamp) -> Self {
        Self {
            target,
            now,
            remaining: time_remaining(target, now),
            elapsed: now >= target,
        }
    }
}

/// Parse the configured target instant.
///
/// Accepts RFC 3339 (`2026-05-06T16:00:00+07:00`) or a naive
/// `YYYY-MM-DDTHH:MM:SS`, which is read as UTC.
pub fn parse_target_instant(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| CoreError::Validation(format!("Invalid target instant '{raw}': {e}")))
}
