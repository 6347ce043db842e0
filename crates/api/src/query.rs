//! Shared query parameter types for API handlers.

use serde::Deserialize;
use wedsite_core::listing::ListFilter;
use wedsite_core::record_kind::SortDirection;

/// Generic pagination parameters (`?limit=&offset=`).
///
/// Values are clamped with `clamp_limit` / `clamp_offset` before use.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query parameters for admin record listings and exports
/// (`?q=&category=&order_by=&direction=`).
#[derive(Debug, Default, Deserialize)]
pub struct RecordListParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub order_by: Option<String>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl RecordListParams {
    pub fn filter(&self) -> ListFilter {
        ListFilter::new(self.q.as_deref(), self.category.as_deref())
    }
}
