//! Integration tests for the public guestbook.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use serde_json::json;
use sqlx::PgPool;

async fn post(pool: &PgPool, name: &str) -> serde_json::Value {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/guestbook",
        json!({ "name": name, "message": "Congratulations to you both!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn posted_message_is_returned(pool: PgPool) {
    let json = post(&pool, "River Song").await;
    assert_eq!(json["data"]["name"], "River Song");
    assert_eq!(json["data"]["message"], "Congratulations to you both!");
    assert!(json["data"]["id"].is_string());
    assert!(json["data"]["created_at"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_message_is_rejected(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/api/v1/guestbook",
        json!({ "name": "R", "message": "Hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["fields"]["name"].is_array());
    assert!(json["fields"]["message"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_newest_first_and_paginated(pool: PgPool) {
    for name in ["Alpha", "Bravo", "Charlie"] {
        post(&pool, name).await;
        // Keep created_at distinct.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let json = body_json(get(build_test_app(pool.clone()), "/api/v1/guestbook").await).await;
    let names: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Charlie", "Bravo", "Alpha"]);

    let json = body_json(
        get(
            build_test_app(pool),
            "/api/v1/guestbook?limit=1&offset=1",
        )
        .await,
    )
    .await;
    let page = json["data"].as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["name"], "Bravo");
}
