//! RSVP response rows.

use serde::Serialize;
use sqlx::FromRow;
use wedsite_core::export::{format_export_timestamp, CsvRecord};
use wedsite_core::listing::Searchable;
use wedsite_core::rsvp::Attendance;
use wedsite_core::types::{RecordId, Timestamp};

/// A row from the `rsvp_responses` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct RsvpResponse {
    pub id: RecordId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub attendance: String,
    pub guest_count: i32,
    pub dietary_restrictions: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

impl RsvpResponse {
    /// Parsed attendance. The table's CHECK constraint keeps this `Some`.
    pub fn attendance(&self) -> Option<Attendance> {
        Attendance::parse(&self.attendance)
    }
}

impl Searchable for RsvpResponse {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.full_name.as_str(), self.email.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(self.attendance.as_str())
    }
}

impl CsvRecord for RsvpResponse {
    fn csv_header() -> &'static [&'static str] {
        &[
            "Name",
            "Email",
            "Phone",
            "Attendance",
            "Guest Count",
            "Dietary Restrictions",
            "Message",
            "Date",
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.attendance.clone(),
            self.guest_count.to_string(),
            self.dietary_restrictions.clone().unwrap_or_default(),
            self.message.clone().unwrap_or_default(),
            format_export_timestamp(&self.created_at),
        ]
    }
}
