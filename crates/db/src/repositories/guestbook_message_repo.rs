//! Repository for the `guestbook_messages` table.

use sqlx::PgPool;
use wedsite_core::guestbook::NewGuestbookMessage;
use wedsite_core::record_kind::SortDirection;
use wedsite_core::types::RecordId;

use crate::models::guestbook_message::GuestbookMessage;

const COLUMNS: &str = "id, name, message, created_at";

pub struct GuestbookMessageRepo;

impl GuestbookMessageRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewGuestbookMessage,
    ) -> Result<GuestbookMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO guestbook_messages (name, message) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GuestbookMessage>(&query)
            .bind(&input.name)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: RecordId,
    ) -> Result<Option<GuestbookMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM guestbook_messages WHERE id = $1");
        sqlx::query_as::<_, GuestbookMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all messages ordered by a whitelisted column, `id` breaking ties.
    pub async fn list(
        pool: &PgPool,
        order_column: &'static str,
        direction: SortDirection,
    ) -> Result<Vec<GuestbookMessage>, sqlx::Error> {
        let dir = direction.as_sql();
        let query = format!(
            "SELECT {COLUMNS} FROM guestbook_messages ORDER BY {order_column} {dir}, id {dir}"
        );
        sqlx::query_as::<_, GuestbookMessage>(&query)
            .fetch_all(pool)
            .await
    }

    /// One page of messages, newest first. Used by the public guestbook.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<GuestbookMessage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM guestbook_messages \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, GuestbookMessage>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Delete a message. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM guestbook_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
