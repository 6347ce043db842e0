//! Repository for the `user_roles` table.

use sqlx::PgPool;
use wedsite_core::types::DbId;

pub struct UserRoleRepo;

impl UserRoleRepo {
    /// The role assigned to a user, if any.
    pub async fn find_role(pool: &PgPool, user_id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT role FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Replace any existing role for `user_id` with `role`, atomically.
    pub async fn assign(pool: &PgPool, user_id: DbId, role: &str) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2)")
            .bind(user_id)
            .bind(role)
            .execute(&mut *tx)
            .await?;
        tx.commit().await
    }

    /// Remove the user's role. Returns `true` if a role was removed.
    pub async fn remove(pool: &PgPool, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_roles WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
