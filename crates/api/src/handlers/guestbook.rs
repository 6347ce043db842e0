//! Handlers for the public `/guestbook` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use wedsite_core::error::CoreError;
use wedsite_core::guestbook::parse_guestbook_message;
use wedsite_core::pagination::{
    clamp_limit, clamp_offset, DEFAULT_GUESTBOOK_LIMIT, MAX_GUESTBOOK_LIMIT,
};
use wedsite_core::record_kind::RecordKind;
use wedsite_db::gateway::{NewRecord, RecordGateway};
use wedsite_db::models::guestbook_message::GuestbookMessage;
use wedsite_db::repositories::GuestbookMessageRepo;

use crate::error::AppResult;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/guestbook
///
/// Newest messages first, paginated with `?limit=&offset=`.
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<GuestbookMessage>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_GUESTBOOK_LIMIT, MAX_GUESTBOOK_LIMIT);
    let offset = clamp_offset(params.offset);

    let messages = GuestbookMessageRepo::list_recent(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/guestbook
pub async fn post_message(
    State(state): State<AppState>,
    Json(input): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<DataResponse<GuestbookMessage>>)> {
    let message = parse_guestbook_message(&input)?;
    let id = RecordGateway::insert(&state.pool, &NewRecord::Guestbook(message)).await?;

    let stored = GuestbookMessageRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(RecordKind::GuestbookMessages.entity_name(), id))?;

    tracing::info!(message_id = %id, author = %stored.name, "Guestbook message posted");

    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}
