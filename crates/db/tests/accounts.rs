//! Integration tests for users, roles and site content.

use sqlx::PgPool;
use wedsite_core::site_content::SiteContentFields;
use wedsite_db::models::user::CreateUser;
use wedsite_db::repositories::{SiteContentRepo, UserRepo, UserRoleRepo};

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_lookup_by_email_ignores_case(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("admin@example.com")).await.unwrap();
    let found = UserRepo::find_by_email(&pool, "Admin@Example.COM")
        .await
        .unwrap()
        .expect("user should be found");
    assert_eq!(found.id, user.id);
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_violates_unique_constraint(pool: PgPool) {
    UserRepo::create(&pool, &new_user("dup@example.com")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("dup@example.com"))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db) => {
            assert_eq!(db.code().as_deref(), Some("23505"));
            assert_eq!(db.constraint(), Some("uq_users_email"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn assign_replaces_existing_role(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("mod@example.com")).await.unwrap();
    assert_eq!(UserRoleRepo::find_role(&pool, user.id).await.unwrap(), None);

    UserRoleRepo::assign(&pool, user.id, "moderator").await.unwrap();
    UserRoleRepo::assign(&pool, user.id, "admin").await.unwrap();
    assert_eq!(
        UserRoleRepo::find_role(&pool, user.id).await.unwrap().as_deref(),
        Some("admin")
    );

    let listed = UserRepo::list_with_roles(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].role.as_deref(), Some("admin"));

    assert!(UserRoleRepo::remove(&pool, user.id).await.unwrap());
    assert!(!UserRoleRepo::remove(&pool, user.id).await.unwrap());
    let listed = UserRepo::list_with_roles(&pool).await.unwrap();
    assert_eq!(listed[0].role, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_role_is_rejected_by_database(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("x@example.com")).await.unwrap();
    assert!(UserRoleRepo::assign(&pool, user.id, "superuser").await.is_err());
    assert_eq!(UserRoleRepo::find_role(&pool, user.id).await.unwrap(), None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_role_writes_user_and_role(pool: PgPool) {
    let user = UserRepo::create_with_role(&pool, &new_user("amy@example.com"), "moderator")
        .await
        .unwrap();
    let found = UserRepo::find_with_role(&pool, user.id)
        .await
        .unwrap()
        .expect("user should be found");
    assert_eq!(found.email, "amy@example.com");
    assert_eq!(found.role.as_deref(), Some("moderator"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_role_insert_leaves_no_user_behind(pool: PgPool) {
    let result = UserRepo::create_with_role(&pool, &new_user("rory@example.com"), "superuser").await;
    assert!(result.is_err());
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);
    assert!(UserRepo::find_by_email(&pool, "rory@example.com")
        .await
        .unwrap()
        .is_none());

    // The email is still free for a corrected retry.
    UserRepo::create_with_role(&pool, &new_user("rory@example.com"), "user")
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_with_role_reports_missing_role_and_missing_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("clara@example.com")).await.unwrap();
    let found = UserRepo::find_with_role(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(found.role, None);
    assert!(UserRepo::find_with_role(&pool, user.id + 1000).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn site_content_upsert_overwrites_single_row(pool: PgPool) {
    assert!(SiteContentRepo::get(&pool).await.unwrap().is_none());

    let mut fields = SiteContentFields::default();
    fields.hero_title = "Amy & Rory".to_string();
    let saved = SiteContentRepo::upsert(&pool, &fields).await.unwrap();
    assert_eq!(saved.fields.hero_title, "Amy & Rory");
    assert!(saved.updated_at.is_some());

    fields.venue_name = "Leadworth Church".to_string();
    SiteContentRepo::upsert(&pool, &fields).await.unwrap();

    let loaded = SiteContentRepo::get(&pool).await.unwrap().unwrap();
    assert_eq!(loaded.fields, fields);

    let rows: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM website_content")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows.0, 1);
}
