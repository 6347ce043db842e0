//! Pagination defaults and clamping for public listings.

/// Default page size for the public guestbook.
pub const DEFAULT_GUESTBOOK_LIMIT: i64 = 50;

/// Largest page the public guestbook will serve.
pub const MAX_GUESTBOOK_LIMIT: i64 = 200;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
