//! Kind-dispatched access to the guest-submitted record tables.
//!
//! Handlers that operate on "a record of some kind" (admin listing, export,
//! delete) go through [`RecordGateway`] rather than matching on the kind
//! themselves.

use serde::Serialize;
use sqlx::PgPool;
use wedsite_core::guestbook::NewGuestbookMessage;
use wedsite_core::record_kind::{RecordKind, SortDirection};
use wedsite_core::rsvp::NewRsvpResponse;
use wedsite_core::types::RecordId;

use crate::models::guestbook_message::GuestbookMessage;
use crate::models::rsvp_response::RsvpResponse;
use crate::repositories::{GuestbookMessageRepo, RsvpResponseRepo};

/// A validated record ready to insert.
#[derive(Debug, Clone)]
pub enum NewRecord {
    Rsvp(NewRsvpResponse),
    Guestbook(NewGuestbookMessage),
}

impl NewRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            NewRecord::Rsvp(_) => RecordKind::RsvpResponses,
            NewRecord::Guestbook(_) => RecordKind::GuestbookMessages,
        }
    }
}

/// All rows of one kind, in the requested order. Serializes as a bare array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecordSet {
    Rsvp(Vec<RsvpResponse>),
    Guestbook(Vec<GuestbookMessage>),
}

impl RecordSet {
    pub fn kind(&self) -> RecordKind {
        match self {
            RecordSet::Rsvp(_) => RecordKind::RsvpResponses,
            RecordSet::Guestbook(_) => RecordKind::GuestbookMessages,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordSet::Rsvp(rows) => rows.len(),
            RecordSet::Guestbook(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_rsvp(self) -> Option<Vec<RsvpResponse>> {
        match self {
            RecordSet::Rsvp(rows) => Some(rows),
            RecordSet::Guestbook(_) => None,
        }
    }

    pub fn into_guestbook(self) -> Option<Vec<GuestbookMessage>> {
        match self {
            RecordSet::Guestbook(rows) => Some(rows),
            RecordSet::Rsvp(_) => None,
        }
    }
}

pub struct RecordGateway;

impl RecordGateway {
    /// Insert a record and return its generated id.
    pub async fn insert(pool: &PgPool, record: &NewRecord) -> Result<RecordId, sqlx::Error> {
        let id = match record {
            NewRecord::Rsvp(input) => RsvpResponseRepo::create(pool, input).await?.id,
            NewRecord::Guestbook(input) => GuestbookMessageRepo::create(pool, input).await?.id,
        };
        tracing::debug!(kind = %record.kind(), %id, "Record inserted");
        Ok(id)
    }

    /// Every row of `kind`, ordered by `order_column` then `id`.
    pub async fn select(
        pool: &PgPool,
        kind: RecordKind,
        order_column: &'static str,
        direction: SortDirection,
    ) -> Result<RecordSet, sqlx::Error> {
        Ok(match kind {
            RecordKind::RsvpResponses => {
                RecordSet::Rsvp(RsvpResponseRepo::list(pool, order_column, direction).await?)
            }
            RecordKind::GuestbookMessages => RecordSet::Guestbook(
                GuestbookMessageRepo::list(pool, order_column, direction).await?,
            ),
        })
    }

    /// Delete one row. Returns `false` when no row had that id.
    pub async fn delete(pool: &PgPool, kind: RecordKind, id: RecordId) -> Result<bool, sqlx::Error> {
        match kind {
            RecordKind::RsvpResponses => RsvpResponseRepo::delete(pool, id).await,
            RecordKind::GuestbookMessages => GuestbookMessageRepo::delete(pool, id).await,
        }
    }
}
