//! Handlers for `/admin/users` (console account management).
//!
//! All handlers require the `admin` role via [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use wedsite_core::accounts::parse_new_account;
use wedsite_core::error::CoreError;
use wedsite_core::roles::{is_valid_role, DEFAULT_ROLE, VALID_ROLES};
use wedsite_core::types::{DbId, Timestamp};
use wedsite_db::models::user::{CreateUser, UserWithRole};
use wedsite_db::repositories::{UserRepo, UserRoleRepo};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /admin/users/{id}/role`.
#[derive(Debug, Deserialize)]
pub struct AssignRoleRequest {
    pub role: String,
}

/// A console account as shown in the user table.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    /// Effective role; accounts without an assigned role report the default.
    pub role: String,
    pub created_at: Timestamp,
}

impl From<UserWithRole> for UserResponse {
    fn from(user: UserWithRole) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            created_at: user.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserResponse>>>> {
    let users = UserRepo::list_with_roles(&state.pool).await?;
    Ok(Json(DataResponse {
        data: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// POST /api/v1/admin/users
///
/// Body: `email`, `password` (12+ characters), optional `role`.
/// Duplicate emails are rejected with 409.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<Map<String, Value>>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    let account = parse_new_account(&input)?;

    let password_hash = hash_password(&account.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create_with_role(
        &state.pool,
        &CreateUser {
            email: account.email,
            password_hash,
        },
        &account.role,
    )
    .await?;

    tracing::info!(
        admin_id = admin.user_id,
        user_id = user.id,
        role = %account.role,
        "User created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse {
                id: user.id,
                email: user.email,
                role: account.role,
                created_at: user.created_at,
            },
        }),
    ))
}

/// PUT /api/v1/admin/users/{id}/role
///
/// Replaces any existing role.
pub async fn assign_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<DbId>,
    Json(input): Json<AssignRoleRequest>,
) -> AppResult<Json<DataResponse<UserResponse>>> {
    let role = input.role.trim();
    if !is_valid_role(role) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown role '{role}'. Must be one of: {VALID_ROLES:?}"
        ))));
    }

    let user = UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| CoreError::not_found("User", user_id))?;
    UserRoleRepo::assign(&state.pool, user.id, role).await?;

    tracing::info!(admin_id = admin.user_id, user_id, %role, "Role assigned");

    Ok(Json(DataResponse {
        data: UserResponse {
            id: user.id,
            email: user.email,
            role: role.to_string(),
            created_at: user.created_at,
        },
    }))
}

/// DELETE /api/v1/admin/users/{id}/role
///
/// The account falls back to the default role. Admins cannot remove their
/// own role.
pub async fn remove_role(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(user_id): Path<DbId>,
) -> AppResult<StatusCode> {
    if user_id == admin.user_id {
        return Err(AppError::Core(CoreError::Conflict(
            "Cannot remove your own role".into(),
        )));
    }

    let removed = UserRoleRepo::remove(&state.pool, user_id).await?;
    if !removed {
        return Err(CoreError::not_found("UserRole", user_id).into());
    }

    tracing::info!(admin_id = admin.user_id, user_id, "Role removed");
    Ok(StatusCode::NO_CONTENT)
}
