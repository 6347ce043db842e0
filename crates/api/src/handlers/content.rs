//! Handlers for the landing-page content.

use axum::extract::State;
use axum::Json;
use wedsite_core::site_content::{validate_site_content, SiteContentFields};
use wedsite_db::models::site_content::SiteContent;
use wedsite_db::repositories::SiteContentRepo;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/content
///
/// Returns the saved content, or the built-in defaults if none was saved.
pub async fn get_content(State(state): State<AppState>) -> AppResult<Json<DataResponse<SiteContent>>> {
    let content = SiteContentRepo::get(&state.pool)
        .await?
        .unwrap_or_else(SiteContent::defaults);
    Ok(Json(DataResponse { data: content }))
}

/// PUT /api/v1/admin/content
pub async fn update_content(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<SiteContentFields>,
) -> AppResult<Json<DataResponse<SiteContent>>> {
    let fields = validate_site_content(&input)?;
    let saved = SiteContentRepo::upsert(&state.pool, &fields).await?;

    tracing::info!(user_id = admin.user_id, "Site content updated");

    Ok(Json(DataResponse { data: saved }))
}
