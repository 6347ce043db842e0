//! Handler for public RSVP submission.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{Map, Value};
use wedsite_core::rsvp::parse_rsvp;
use wedsite_core::types::RecordId;
use wedsite_db::gateway::{NewRecord, RecordGateway};

use crate::error::AppResult;
use crate::response::{CreatedId, DataResponse};
use crate::state::AppState;

/// POST /api/v1/rsvp
///
/// Validate the form and store the response. Nothing is written when any
/// field fails validation.
pub async fn submit_rsvp(
    State(state): State<AppState>,
    Json(input): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedId<RecordId>>>)> {
    let rsvp = parse_rsvp(&input)?;
    let attendance = rsvp.attendance;
    let guest_count = rsvp.guest_count;

    let id = RecordGateway::insert(&state.pool, &NewRecord::Rsvp(rsvp)).await?;

    tracing::info!(rsvp_id = %id, %attendance, guest_count, "RSVP submitted");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedId { id },
        }),
    ))
}
