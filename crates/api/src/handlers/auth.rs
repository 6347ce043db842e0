//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use wedsite_core::error::CoreError;
use wedsite_core::roles::DEFAULT_ROLE;
use wedsite_core::types::DbId;
use wedsite_db::repositories::{UserRepo, UserRoleRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Unknown email and wrong password are
/// indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, input.email.trim())
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(user_id = user.id, "Failed login attempt");
        return Err(invalid());
    }

    let role = resolve_role(&state, user.id).await?;
    let access_token = generate_access_token(user.id, &role, state.clock.now(), &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, %role, "User logged in");

    Ok(Json(DataResponse {
        data: LoginResponse {
            access_token,
            token_type: "Bearer",
            expires_in: state.config.jwt.expires_in_secs(),
            user: UserInfo {
                id: user.id,
                email: user.email,
                role,
            },
        },
    }))
}

/// GET /api/v1/auth/me
///
/// The caller's account with its current role, which may differ from the
/// role baked into the token if it was changed since login.
pub async fn me(auth_user: AuthUser) -> Json<DataResponse<UserInfo>> {
    Json(DataResponse {
        data: UserInfo {
            id: auth_user.user_id,
            email: auth_user.email,
            role: auth_user.role,
        },
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Assigned role, or the default role when none is assigned.
async fn resolve_role(state: &AppState, user_id: DbId) -> AppResult<String> {
    Ok(UserRoleRepo::find_role(&state.pool, user_id)
        .await?
        .unwrap_or_else(|| DEFAULT_ROLE.to_string()))
}
