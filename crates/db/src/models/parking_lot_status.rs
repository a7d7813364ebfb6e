//! Parking lot "current state" model.
//!
//! One row per natural key (lot_code, terminal, parking_type, area_side).
//! Only the latest value is kept; a history table would be separate.

use parking_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `parking_lot_status` table.
#[derive(Debug, Clone, FromRow)]
pub struct ParkingLotStatus {
    pub id: DbId,
    pub lot_code: String,
    pub lot_name: String,
    pub terminal: String,
    pub parking_type: String,
    pub area_side: String,
    pub capacity: i32,
    pub available: i32,
    pub status: String,
    pub source_ts: Option<Timestamp>,
    pub updated_at: Timestamp,
}

impl ParkingLotStatus {
    pub fn key(&self) -> LotKey<'_> {
        LotKey {
            lot_code: &self.lot_code,
            terminal: &self.terminal,
            parking_type: &self.parking_type,
            area_side: &self.area_side,
        }
    }

    /// Copy the mutable fields of `candidate` onto this row for saving.
    ///
    /// The id and natural key stay those of the existing row.
    pub fn apply(&self, candidate: &UpsertParkingLotStatus) -> SaveParkingLotStatus {
        SaveParkingLotStatus {
            id: Some(self.id),
            lot_code: self.lot_code.clone(),
            lot_name: candidate.lot_name.clone(),
            terminal: self.terminal.clone(),
            parking_type: self.parking_type.clone(),
            area_side: self.area_side.clone(),
            capacity: candidate.capacity,
            available: candidate.available,
            status: candidate.status.clone(),
            source_ts: candidate.source_ts,
        }
    }
}

/// The four-part natural key of a parking lot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LotKey<'a> {
    pub lot_code: &'a str,
    pub terminal: &'a str,
    pub parking_type: &'a str,
    pub area_side: &'a str,
}

/// DTO for upserting a lot by natural key. `updated_at` is never supplied.
#[derive(Debug, Clone)]
pub struct UpsertParkingLotStatus {
    pub lot_code: String,
    pub lot_name: String,
    pub terminal: String,
    pub parking_type: String,
    pub area_side: String,
    pub capacity: i32,
    pub available: i32,
    pub status: String,
    pub source_ts: Option<Timestamp>,
}

impl UpsertParkingLotStatus {
    pub fn key(&self) -> LotKey<'_> {
        LotKey {
            lot_code: &self.lot_code,
            terminal: &self.terminal,
            parking_type: &self.parking_type,
            area_side: &self.area_side,
        }
    }
}

/// Input to `ParkingLotStatusRepo::save`.
///
/// `id: None` inserts a new row, `Some(id)` updates that row's mutable
/// fields. Key fields are only written on insert.
#[derive(Debug, Clone)]
pub struct SaveParkingLotStatus {
    pub id: Option<DbId>,
    pub lot_code: String,
    pub lot_name: String,
    pub terminal: String,
    pub parking_type: String,
    pub area_side: String,
    pub capacity: i32,
    pub available: i32,
    pub status: String,
    pub source_ts: Option<Timestamp>,
}

impl From<&UpsertParkingLotStatus> for SaveParkingLotStatus {
    fn from(input: &UpsertParkingLotStatus) -> Self {
        Self {
            id: None,
            lot_code: input.lot_code.clone(),
            lot_name: input.lot_name.clone(),
            terminal: input.terminal.clone(),
            parking_type: input.parking_type.clone(),
            area_side: input.area_side.clone(),
            capacity: input.capacity,
            available: input.available,
            status: input.status.clone(),
            source_ts: input.source_ts,
        }
    }
}
