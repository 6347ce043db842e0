pub mod admin;
pub mod auth;
pub mod guests;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /countdown                                  snapshot (public)
/// /countdown/stream                           SSE ticks (public)
/// /rsvp                                       submit (public)
/// /guestbook                                  list, post (public)
/// /content                                    site content (public)
///
/// /auth/login                                 login (public)
/// /auth/me                                    caller identity (requires auth)
///
/// /admin/records/{kind}                       list (moderator)
/// /admin/records/{kind}/export                CSV download (moderator)
/// /admin/records/{kind}/summary               headline numbers (moderator)
/// /admin/records/{kind}/{id}                  delete (moderator)
/// /admin/content                              update site content (admin)
/// /admin/users                                list, create (admin)
/// /admin/users/{id}/role                      assign, remove (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Guest-facing routes.
        .merge(guests::router())
        // Authentication routes.
        .nest("/auth", auth::router())
        // Admin console.
        .nest("/admin", admin::router())
}
