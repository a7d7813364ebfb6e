//! Repository for the `parking_lot_status` table.

use chrono::Utc;
use sqlx::PgExecutor;

use crate::models::parking_lot_status::{LotKey, ParkingLotStatus, SaveParkingLotStatus};

/// Column list for parking_lot_status queries.
const COLUMNS: &str = "id, lot_code, lot_name, terminal, parking_type, area_side, \
    capacity, available, status, source_ts, updated_at";

/// Provides keyed storage for the latest state of each parking lot.
pub struct ParkingLotStatusRepo;

impl ParkingLotStatusRepo {
    /// Find the row for an exact natural key.
    pub async fn find_by_key<'e, E>(
        executor: E,
        key: &LotKey<'_>,
    ) -> Result<Option<ParkingLotStatus>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_lot_status
             WHERE lot_code = $1 AND terminal = $2 AND parking_type = $3 AND area_side = $4"
        );
        sqlx::query_as::<_, ParkingLotStatus>(&query)
            .bind(key.lot_code)
            .bind(key.terminal)
            .bind(key.parking_type)
            .bind(key.area_side)
            .fetch_optional(executor)
            .await
    }

    /// List all rows for a terminal and parking type, any area side, in insertion order.
    pub async fn find_all_by_terminal_and_type<'e, E>(
        executor: E,
        terminal: &str,
        parking_type: &str,
    ) -> Result<Vec<ParkingLotStatus>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_lot_status
             WHERE terminal = $1 AND parking_type = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, ParkingLotStatus>(&query)
            .bind(terminal)
            .bind(parking_type)
            .fetch_all(executor)
            .await
    }

    /// List all rows for a terminal, parking type and area side, in insertion order.
    pub async fn find_all_by_terminal_type_and_side<'e, E>(
        executor: E,
        terminal: &str,
        parking_type: &str,
        area_side: &str,
    ) -> Result<Vec<ParkingLotStatus>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {COLUMNS} FROM parking_lot_status
             WHERE terminal = $1 AND parking_type = $2 AND area_side = $3
             ORDER BY id"
        );
        sqlx::query_as::<_, ParkingLotStatus>(&query)
            .bind(terminal)
            .bind(parking_type)
            .bind(area_side)
            .fetch_all(executor)
            .await
    }

    /// Insert a new row (`id: None`) or update an existing row by id.
    ///
    /// `updated_at` is stamped here on every call, even when no other field
    /// changed. Updating an id that does not exist returns `RowNotFound`.
    pub async fn save<'e, E>(
        executor: E,
        row: &SaveParkingLotStatus,
    ) -> Result<ParkingLotStatus, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let updated_at = Utc::now();

        match row.id {
            None => {
                let query = format!(
                    "INSERT INTO parking_lot_status
                        (lot_code, lot_name, terminal, parking_type, area_side,
                         capacity, available, status, source_ts, updated_at)
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, ParkingLotStatus>(&query)
                    .bind(&row.lot_code)
                    .bind(&row.lot_name)
                    .bind(&row.terminal)
                    .bind(&row.parking_type)
                    .bind(&row.area_side)
                    .bind(row.capacity)
                    .bind(row.available)
                    .bind(&row.status)
                    .bind(row.source_ts)
                    .bind(updated_at)
                    .fetch_one(executor)
                    .await
            }
            Some(id) => {
                let query = format!(
                    "UPDATE parking_lot_status SET
                        lot_name = $2,
                        capacity = $3,
                        available = $4,
                        status = $5,
                        source_ts = $6,
                        updated_at = $7
                     WHERE id = $1
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, ParkingLotStatus>(&query)
                    .bind(id)
                    .bind(&row.lot_name)
                    .bind(row.capacity)
                    .bind(row.available)
                    .bind(&row.status)
                    .bind(row.source_ts)
                    .bind(updated_at)
                    .fetch_one(executor)
                    .await
            }
        }
    }
}
