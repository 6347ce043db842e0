//! Repository for the `rsvp_responses` table.

use sqlx::PgPool;
use wedsite_core::record_kind::SortDirection;
use wedsite_core::rsvp::NewRsvpResponse;
use wedsite_core::types::RecordId;

use crate::models::rsvp_response::RsvpResponse;

/// Column list for `rsvp_responses` queries.
const COLUMNS: &str = "\
    id, full_name, email, phone, attendance, guest_count, \
    dietary_restrictions, message, created_at";

/// Create, read and delete for RSVP responses. Rows are never updated.
pub struct RsvpResponseRepo;

impl RsvpResponseRepo {
    /// Insert a validated RSVP, returning the full row.
    pub async fn create(pool: &PgPool, input: &NewRsvpResponse) -> Result<RsvpResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO rsvp_responses \
                (full_name, email, phone, attendance, guest_count, dietary_restrictions, message) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RsvpResponse>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.attendance.as_str())
            .bind(input.guest_count)
            .bind(&input.dietary_restrictions)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: RecordId) -> Result<Option<RsvpResponse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rsvp_responses WHERE id = $1");
        sqlx::query_as::<_, RsvpResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all responses ordered by `order_column`, with `id` as tie-breaker.
    ///
    /// `order_column` must come from `RecordKind::order_column`, which only
    /// yields whitelisted column names.
    pub async fn list(
        pool: &PgPool,
        order_column: &'static str,
        direction: SortDirection,
    ) -> Result<Vec<RsvpResponse>, sqlx::Error> {
        let dir = direction.as_sql();
        let query = format!(
            "SELECT {COLUMNS} FROM rsvp_responses ORDER BY {order_column} {dir}, id {dir}"
        );
        sqlx::query_as::<_, RsvpResponse>(&query).fetch_all(pool).await
    }

    /// Delete a response. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: RecordId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rsvp_responses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
