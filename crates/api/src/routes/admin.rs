//! Route definitions for the `/admin` console.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{admin_records, admin_users, content};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET    /records/{kind}            -> list_records
/// GET    /records/{kind}/export     -> export_records
/// GET    /records/{kind}/summary    -> record_summary
/// DELETE /records/{kind}/{id}       -> delete_record
/// PUT    /content                   -> update_content
/// GET    /users                     -> list_users
/// POST   /users                     -> create_user
/// PUT    /users/{id}/role           -> assign_role
/// DELETE /users/{id}/role           -> remove_role
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/records/{kind}", get(admin_records::list_records))
        .route("/records/{kind}/export", get(admin_records::export_records))
        .route("/records/{kind}/summary", get(admin_records::record_summary))
        .route("/records/{kind}/{id}", delete(admin_records::delete_record))
        .route("/content", put(content::update_content))
        .route(
            "/users",
            get(admin_users::list_users).post(admin_users::create_user),
        )
        .route(
            "/users/{id}/role",
            put(admin_users::assign_role).delete(admin_users::remove_role),
        )
}
