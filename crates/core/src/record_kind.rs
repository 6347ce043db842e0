//! The two kinds of guest-submitted records and their ordering options.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which persisted entity type an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    RsvpResponses,
    GuestbookMessages,
}

impl RecordKind {
    pub const ALL: [RecordKind; 2] = [RecordKind::RsvpResponses, RecordKind::GuestbookMessages];

    /// Backing table name; also the path segment used by admin routes.
    pub fn table_name(&self) -> &'static str {
        match self {
            RecordKind::RsvpResponses => "rsvp_responses",
            RecordKind::GuestbookMessages => "guestbook_messages",
        }
    }

    /// Entity name used in not-found errors and logs.
    pub fn entity_name(&self) -> &'static str {
        match self {
            RecordKind::RsvpResponses => "RsvpResponse",
            RecordKind::GuestbookMessages => "GuestbookMessage",
        }
    }

    /// Prefix of exported file names.
    pub fn export_slug(&self) -> &'static str {
        match self {
            RecordKind::RsvpResponses => "rsvp-responses",
            RecordKind::GuestbookMessages => "guestbook-messages",
        }
    }

    /// Columns a listing may be ordered by.
    pub fn sortable_columns(&self) -> &'static [&'static str] {
        match self {
            RecordKind::RsvpResponses => &["created_at", "full_name", "attendance"],
            RecordKind::GuestbookMessages => &["created_at", "name"],
        }
    }

    /// Resolve a requested order column, defaulting to `created_at`.
    pub fn order_column(&self, requested: Option<&str>) -> Result<&'static str, CoreError> {
        let Some(requested) = requested.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(DEFAULT_ORDER_COLUMN);
        };
        self.sortable_columns()
            .iter()
            .find(|c| **c == requested)
            .copied()
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Cannot order {} by '{requested}'. Must be one of: {:?}",
                    self.table_name(),
                    self.sortable_columns()
                ))
            })
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

pub const DEFAULT_ORDER_COLUMN: &str = "created_at";

/// Sort direction for listings. Newest-first is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}
