//! Integration tests for the public countdown endpoints.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use chrono::Duration;
use common::{body_json, body_text, build_test_app_at, event_target, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn snapshot_two_seconds_before_target(pool: PgPool) {
    let now = event_target() - Duration::seconds(2);
    let app = build_test_app_at(pool, now);

    let response = get(app, "/api/v1/countdown").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let remaining = &json["data"]["remaining"];
    assert_eq!(remaining["days"], 0);
    assert_eq!(remaining["hours"], 0);
    assert_eq!(remaining["minutes"], 0);
    assert_eq!(remaining["seconds"], 2);
    assert_eq!(json["data"]["elapsed"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn snapshot_holds_at_zero_after_target(pool: PgPool) {
    let now = event_target() + Duration::days(3);
    let app = build_test_app_at(pool, now);

    let json = body_json(get(app, "/api/v1/countdown").await).await;
    let remaining = &json["data"]["remaining"];
    for field in ["days", "hours", "minutes", "seconds"] {
        assert_eq!(remaining[field], 0, "{field} should be zero");
    }
    assert_eq!(json["data"]["elapsed"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn snapshot_splits_days_and_hours(pool: PgPool) {
    let now = event_target()
        - (Duration::days(10) + Duration::hours(5) + Duration::minutes(30) + Duration::seconds(15));
    let app = build_test_app_at(pool, now);

    let json = body_json(get(app, "/api/v1/countdown").await).await;
    let remaining = &json["data"]["remaining"];
    assert_eq!(remaining["days"], 10);
    assert_eq!(remaining["hours"], 5);
    assert_eq!(remaining["minutes"], 30);
    assert_eq!(remaining["seconds"], 15);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn stream_ends_after_first_zero_tick(pool: PgPool) {
    let app = build_test_app_at(pool, event_target() + Duration::minutes(1));

    let response = get(app, "/api/v1/countdown/stream").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/event-stream"));

    // The stream terminates on its own, so the whole body can be collected.
    let body = body_text(response).await;
    assert_eq!(body.matches("tick").count(), 1, "exactly one event: {body}");
    assert!(body.contains(r#""days":0"#));
    assert!(body.contains(r#""seconds":0"#));
}
