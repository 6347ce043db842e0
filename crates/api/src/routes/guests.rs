//! Public routes used by the landing page.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{content, countdown, guestbook, rsvp};
use crate::state::AppState;

/// ```text
/// GET  /countdown          -> get_countdown
/// GET  /countdown/stream   -> stream_countdown
/// POST /rsvp               -> submit_rsvp
/// GET  /guestbook          -> list_messages
/// POST /guestbook          -> post_message
/// GET  /content            -> get_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/countdown", get(countdown::get_countdown))
        .route("/countdown/stream", get(countdown::stream_countdown))
        .route("/rsvp", post(rsvp::submit_rsvp))
        .route(
            "/guestbook",
            get(guestbook::list_messages).post(guestbook::post_message),
        )
        .route("/content", get(content::get_content))
}
