//! Bearer-token authentication for console handlers.
//!
//! The token only proves who the caller is. Their role is read from
//! `user_roles` on every request, so role changes apply to tokens that
//! were issued before the change.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use wedsite_core::error::CoreError;
use wedsite_core::roles::DEFAULT_ROLE;
use wedsite_core::types::DbId;
use wedsite_db::repositories::UserRepo;

use crate::auth::jwt::validate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// A console account resolved from the `Authorization: Bearer` header.
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, role = %user.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub email: String,
    /// Current role; `user` when no role row exists.
    pub role: String,
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

fn bearer_token(parts: &Parts) -> AppResult<&str> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid Authorization format. Expected: Bearer <token>"))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = validate_token(bearer_token(parts)?, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        let account = UserRepo::find_with_role(&state.pool, claims.sub)
            .await?
            .ok_or_else(|| unauthorized("User no longer exists"))?;

        Ok(AuthUser {
            user_id: account.id,
            email: account.email,
            role: account.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
        })
    }
}
