//! Parking lot status service.
//!
//! Upserts lot state by natural key and serves the filtered reads used by
//! the realtime endpoint. Status derivation itself is pure and lives in
//! [`parking_core::parking::calc_status`]; upsert never overrides the
//! status the caller passes in.

use chrono::Utc;
use parking_core::error::CoreError;
use parking_core::parking::{
    validate_counts, validate_status, AreaSide, ParkingType, Terminal,
};
use parking_core::seed::SEED_LOTS;
use parking_db::models::parking_lot_status::{
    ParkingLotStatus, SaveParkingLotStatus, UpsertParkingLotStatus,
};
use parking_db::repositories::ParkingLotStatusRepo;
use sqlx::{PgConnection, PgPool};

use crate::error::{unique_violation, AppError, AppResult};

/// Provides upsert-by-key and filtered reads over the status store.
pub struct ParkingStatusService;

impl ParkingStatusService {
    /// Update the lot with the candidate's natural key, or insert it if unseen.
    ///
    /// Lookup and write run in one transaction. Two first-time upserts of the
    /// same key racing each other end with one of them failing on the unique
    /// constraint; the loser gets [`CoreError::Conflict`] and is not retried.
    pub async fn upsert(
        pool: &PgPool,
        candidate: &UpsertParkingLotStatus,
    ) -> AppResult<ParkingLotStatus> {
        validate_candidate(candidate)?;

        let mut tx = pool.begin().await?;
        let saved = upsert_in(&mut tx, candidate).await?;
        tx.commit().await?;

        Ok(saved)
    }

    /// All lots for a terminal and parking type, any side.
    pub async fn get_by_terminal_and_type(
        pool: &PgPool,
        terminal: Terminal,
        parking_type: ParkingType,
    ) -> AppResult<Vec<ParkingLotStatus>> {
        let rows = ParkingLotStatusRepo::find_all_by_terminal_and_type(
            pool,
            terminal.as_str(),
            parking_type.as_str(),
        )
        .await?;
        Ok(rows)
    }

    /// All lots for a terminal, parking type and side.
    pub async fn get_by_terminal_type_and_side(
        pool: &PgPool,
        terminal: Terminal,
        parking_type: ParkingType,
        area_side: AreaSide,
    ) -> AppResult<Vec<ParkingLotStatus>> {
        let rows = ParkingLotStatusRepo::find_all_by_terminal_type_and_side(
            pool,
            terminal.as_str(),
            parking_type.as_str(),
            area_side.as_str(),
        )
        .await?;
        Ok(rows)
    }

    /// Upsert the fixed dummy lots. Development use only.
    pub async fn seed_dummy(pool: &PgPool) -> AppResult<Vec<ParkingLotStatus>> {
        let now = Utc::now();

        let mut tx = pool.begin().await?;
        let mut seeded = Vec::with_capacity(SEED_LOTS.len());
        for lot in SEED_LOTS {
            let candidate = UpsertParkingLotStatus {
                lot_code: lot.lot_code.to_string(),
                lot_name: lot.lot_name.to_string(),
                terminal: lot.terminal.as_str().to_string(),
                parking_type: lot.parking_type.as_str().to_string(),
                area_side: lot.area_side.as_str().to_string(),
                capacity: lot.capacity,
                available: lot.available,
                status: lot.status().as_str().to_string(),
                source_ts: Some(lot.source_ts(now)),
            };
            seeded.push(upsert_in(&mut tx, &candidate).await?);
        }
        tx.commit().await?;

        tracing::info!(count = seeded.len(), "Seeded dummy parking lots");

        Ok(seeded)
    }
}

/// Reject candidates whose enumerated fields or counts are out of range.
fn validate_candidate(candidate: &UpsertParkingLotStatus) -> AppResult<()> {
    Terminal::from_str_value(&candidate.terminal)?;
    ParkingType::from_str_value(&candidate.parking_type)?;
    AreaSide::from_str_value(&candidate.area_side)?;
    validate_status(&candidate.status)?;
    validate_counts(candidate.available, candidate.capacity)?;
    Ok(())
}

/// Find-then-save on an open connection (normally a transaction).
async fn upsert_in(
    conn: &mut PgConnection,
    candidate: &UpsertParkingLotStatus,
) -> AppResult<ParkingLotStatus> {
    let existing = ParkingLotStatusRepo::find_by_key(&mut *conn, &candidate.key()).await?;

    let row = match &existing {
        Some(existing) => existing.apply(candidate),
        None => SaveParkingLotStatus::from(candidate),
    };
    let saved = ParkingLotStatusRepo::save(&mut *conn, &row)
        .await
        .map_err(|err| match unique_violation(&err) {
            Some(_) => CoreError::Conflict(format!(
                "Lot '{}' was written concurrently; retry the update",
                candidate.lot_code
            ))
            .into(),
            None => AppError::from(err),
        })?;

    tracing::debug!(
        lot_id = saved.id,
        lot_code = %saved.lot_code,
        created = existing.is_none(),
        status = %saved.status,
        "Parking lot status upserted",
    );

    Ok(saved)
}
