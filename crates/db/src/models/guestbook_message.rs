//! Guestbook message rows.

use serde::Serialize;
use sqlx::FromRow;
use wedsite_core::export::{format_export_timestamp, CsvRecord};
use wedsite_core::listing::Searchable;
use wedsite_core::types::{RecordId, Timestamp};

/// A row from the `guestbook_messages` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct GuestbookMessage {
    pub id: RecordId,
    pub name: String,
    pub message: String,
    pub created_at: Timestamp,
}

impl Searchable for GuestbookMessage {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.message.as_str()]
    }
}

impl CsvRecord for GuestbookMessage {
    fn csv_header() -> &'static [&'static str] {
        &["Name", "Message", "Date"]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.message.clone(),
            format_export_timestamp(&self.created_at),
        ]
    }
}
