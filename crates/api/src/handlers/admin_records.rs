//! Handlers for guest record moderation under `/admin/records/{kind}`.
//!
//! All handlers require `moderator` or `admin` via [`RequireModerator`].
//! Listings and exports fetch the full table through [`RecordGateway`] into
//! a request-local [`ListView`], then apply the text/category filter.

use axum::extract::{Path, Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use wedsite_core::error::CoreError;
use wedsite_core::export::{export_filename, to_csv, CsvRecord, CSV_CONTENT_TYPE};
use wedsite_core::listing::{ApplyOutcome, ListFilter, ListView, Searchable};
use wedsite_core::record_kind::RecordKind;
use wedsite_core::stats::{summarize_guestbook, summarize_rsvps, GuestbookSummary, RsvpSummary};
use wedsite_core::types::RecordId;
use wedsite_db::gateway::{RecordGateway, RecordSet};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireModerator;
use crate::query::RecordListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Headline numbers for one record kind.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecordSummary {
    Rsvp(RsvpSummary),
    Guestbook(GuestbookSummary),
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/records/{kind}
///
/// Query: `q`, `category`, `order_by`, `direction`.
pub async fn list_records(
    State(state): State<AppState>,
    RequireModerator(_user): RequireModerator,
    Path(kind): Path<String>,
    Query(params): Query<RecordListParams>,
) -> AppResult<Json<DataResponse<RecordSet>>> {
    let kind = parse_kind(&kind)?;
    let filter = params.filter();

    let records = match kind {
        RecordKind::RsvpResponses => RecordSet::Rsvp(
            matching(fetch_view(&state, kind, &params, RecordSet::into_rsvp).await?, &filter),
        ),
        RecordKind::GuestbookMessages => RecordSet::Guestbook(matching(
            fetch_view(&state, kind, &params, RecordSet::into_guestbook).await?,
            &filter,
        )),
    };

    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/admin/records/{kind}/export
///
/// Same filters as the listing; responds with a CSV attachment named after
/// the kind and today's date.
pub async fn export_records(
    State(state): State<AppState>,
    RequireModerator(user): RequireModerator,
    Path(kind): Path<String>,
    Query(params): Query<RecordListParams>,
) -> AppResult<([(axum::http::HeaderName, String); 2], String)> {
    let kind = parse_kind(&kind)?;
    let filter = params.filter();

    let (csv, rows) = match kind {
        RecordKind::RsvpResponses => {
            render_csv(&fetch_view(&state, kind, &params, RecordSet::into_rsvp).await?, &filter)
        }
        RecordKind::GuestbookMessages => render_csv(
            &fetch_view(&state, kind, &params, RecordSet::into_guestbook).await?,
            &filter,
        ),
    };

    let filename = export_filename(kind, state.clock.now().date_naive());
    tracing::info!(user_id = user.user_id, %kind, rows, %filename, "Records exported");

    Ok((
        [
            (CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}

/// DELETE /api/v1/admin/records/{kind}/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    RequireModerator(user): RequireModerator,
    Path((kind, id)): Path<(String, RecordId)>,
) -> AppResult<StatusCode> {
    let kind = parse_kind(&kind)?;

    let deleted = RecordGateway::delete(&state.pool, kind, id).await?;
    if !deleted {
        return Err(CoreError::not_found(kind.entity_name(), id).into());
    }

    tracing::info!(user_id = user.user_id, %kind, record_id = %id, "Record deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/records/{kind}/summary
pub async fn record_summary(
    State(state): State<AppState>,
    RequireModerator(_user): RequireModerator,
    Path(kind): Path<String>,
) -> AppResult<Json<DataResponse<RecordSummary>>> {
    let kind = parse_kind(&kind)?;
    let params = RecordListParams::default();

    let summary = match kind {
        RecordKind::RsvpResponses => {
            let view = fetch_view(&state, kind, &params, RecordSet::into_rsvp).await?;
            RecordSummary::Rsvp(summarize_rsvps(
                view.records()
                    .iter()
                    .filter_map(|r| r.attendance().map(|a| (a, r.guest_count))),
            ))
        }
        RecordKind::GuestbookMessages => {
            let view = fetch_view(&state, kind, &params, RecordSet::into_guestbook).await?;
            RecordSummary::Guestbook(summarize_guestbook(
                view.records()
                    .iter()
                    .map(|m| (m.name.as_str(), m.created_at)),
                state.clock.now(),
            ))
        }
    };

    Ok(Json(DataResponse { data: summary }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve the `{kind}` path segment. Unknown kinds are a 404.
fn parse_kind(raw: &str) -> AppResult<RecordKind> {
    RecordKind::ALL
        .into_iter()
        .find(|kind| kind.table_name() == raw)
        .ok_or_else(|| CoreError::not_found("RecordKind", raw).into())
}

/// Fetch every record of `kind` into a fresh view.
///
/// The view is owned by this request, so its single ticket is always the
/// latest one and the result is always installed. Stale and closed results
/// only arise when a view outlives several fetches.
async fn fetch_view<T>(
    state: &AppState,
    kind: RecordKind,
    params: &RecordListParams,
    unpack: fn(RecordSet) -> Option<Vec<T>>,
) -> AppResult<ListView<T>> {
    let order_column = kind.order_column(params.order_by.as_deref())?;

    let mut view = ListView::new();
    let ticket = view.begin_fetch();
    let set = RecordGateway::select(&state.pool, kind, order_column, params.direction).await?;
    let records = unpack(set).ok_or_else(|| {
        AppError::InternalError(format!("Gateway returned the wrong record set for {kind}"))
    })?;

    let outcome = view.apply(ticket, records);
    debug_assert_eq!(outcome, ApplyOutcome::Applied);
    Ok(view)
}

fn matching<T: Searchable + Clone>(view: ListView<T>, filter: &ListFilter) -> Vec<T> {
    view.filtered(filter).into_iter().cloned().collect()
}

fn render_csv<T: Searchable + CsvRecord>(view: &ListView<T>, filter: &ListFilter) -> (String, usize) {
    let rows = view.filtered(filter);
    let count = rows.len();
    (to_csv(rows), count)
}
