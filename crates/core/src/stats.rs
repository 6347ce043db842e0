//! Headline numbers shown above the admin moderation tables.

use std::collections::HashSet;

use chrono::Duration;
use serde::Serialize;

use crate::rsvp::Attendance;
use crate::types::Timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RsvpSummary {
    pub total: usize,
    pub attending: usize,
    pub not_attending: usize,
    /// Headcount of attending parties: each respondent plus their guests.
    pub total_guests: i64,
}

/// Summarize `(attendance, guest_count)` pairs.
pub fn summarize_rsvps<I>(responses: I) -> RsvpSummary
where
    I: IntoIterator<Item = (Attendance, i32)>,
{
    responses
        .into_iter()
        .fold(RsvpSummary::default(), |mut acc, (attendance, guests)| {
            acc.total += 1;
            match attendance {
                Attendance::Attending => {
                    acc.attending += 1;
                    acc.total_guests += i64::from(guests.max(0)) + 1;
                }
                Attendance::NotAttending => acc.not_attending += 1,
            }
            acc
        })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GuestbookSummary {
    pub total: usize,
    /// Messages created within the last 24 hours.
    pub last_24h: usize,
    /// Distinct author names, compared case-insensitively.
    pub unique_authors: usize,
}

/// Summarize `(author_name, created_at)` pairs relative to `now`.
pub fn summarize_guestbook<'a, I>(messages: I, now: Timestamp) -> GuestbookSummary
where
    I: IntoIterator<Item = (&'a str, Timestamp)>,
{
    let cutoff = now - Duration::hours(24);
    let mut authors = HashSet::new();
    let mut summary = GuestbookSummary::default();

    for (name, created_at) in messages {
        summary.total += 1;
        if created_at > cutoff {
            summary.last_24h += 1;
        }
        authors.insert(name.trim().to_lowercase());
    }

    summary.unique_authors = authors.len();
    summary
}
