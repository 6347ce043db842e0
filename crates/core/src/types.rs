/// Primary key of admin-console tables (PostgreSQL BIGSERIAL).
pub type DbId = i64;

/// Opaque identifier of guest-submitted records (RSVPs, guestbook messages).
pub type RecordId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
