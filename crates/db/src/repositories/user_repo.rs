//! Repository for the `users` table.

use sqlx::PgPool;
use wedsite_core::types::DbId;

use crate::models::user::{CreateUser, User, UserWithRole};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, password_hash, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Insert a user together with its role row. Neither is written if
    /// either insert fails.
    pub async fn create_with_role(
        pool: &PgPool,
        input: &CreateUser,
        role: &str,
    ) -> Result<User, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let query = format!(
            "INSERT INTO users (email, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(&mut *tx)
            .await?;
        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2)")
            .bind(user.id)
            .bind(role)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(user)
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by email, ignoring case.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE lower(email) = lower($1)");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// A single user with its current role, if the user exists.
    pub async fn find_with_role(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserWithRole>, sqlx::Error> {
        sqlx::query_as::<_, UserWithRole>(
            "SELECT u.id, u.email, r.role, u.created_at \
             FROM users u \
             LEFT JOIN user_roles r ON r.user_id = u.id \
             WHERE u.id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all users with their role, most recently created first.
    pub async fn list_with_roles(pool: &PgPool) -> Result<Vec<UserWithRole>, sqlx::Error> {
        sqlx::query_as::<_, UserWithRole>(
            "SELECT u.id, u.email, r.role, u.created_at \
             FROM users u \
             LEFT JOIN user_roles r ON r.user_id = u.id \
             ORDER BY u.created_at DESC, u.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}
