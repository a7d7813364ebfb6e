//! Shared scalar aliases for parking lot rows.

/// Surrogate key of a `parking_lot_status` row (BIGSERIAL).
pub type DbId = i64;

/// Row write time and upstream measurement time, stored as `TIMESTAMPTZ` in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
