//! Fixed dummy lots used to exercise the UI before real ingestion exists.
//!
//! Non-production data. The seeding endpoint upserts these on every call,
//! so repeated seeding leaves exactly one row per lot.

use chrono::Duration;

use crate::parking::{calc_status, AreaSide, LotStatus, ParkingType, Terminal};
use crate::types::Timestamp;

/// How far before "now" the seeded upstream measurement time is placed.
pub const SEED_SOURCE_AGE_SECS: i64 = 10;

/// A dummy lot definition.
#[derive(Debug, Clone, Copy)]
pub struct SeedLot {
    pub lot_code: &'static str,
    pub lot_name: &'static str,
    pub terminal: Terminal,
    pub parking_type: ParkingType,
    pub area_side: AreaSide,
    pub capacity: i32,
    pub available: i32,
}

impl SeedLot {
    /// Status derived from this lot's counts.
    pub fn status(&self) -> LotStatus {
        calc_status(self.available, self.capacity)
    }

    /// Upstream measurement time relative to `now`.
    pub fn source_ts(&self, now: Timestamp) -> Timestamp {
        now - Duration::seconds(SEED_SOURCE_AGE_SECS)
    }
}

pub const SEED_LOTS: &[SeedLot] = &[
    SeedLot {
        lot_code: "T1_L_E_P1",
        lot_name: "Long-term P1",
        terminal: Terminal::T1,
        parking_type: ParkingType::Long,
        area_side: AreaSide::East,
        capacity: 1200,
        available: 120,
    },
    SeedLot {
        lot_code: "T1_L_W_P2",
        lot_name: "Long-term P2",
        terminal: Terminal::T1,
        parking_type: ParkingType::Long,
        area_side: AreaSide::West,
        capacity: 900,
        available: 0,
    },
    SeedLot {
        lot_code: "T1_L_E_TOWER",
        lot_name: "Parking Tower (East)",
        terminal: Terminal::T1,
        parking_type: ParkingType::Long,
        area_side: AreaSide::East,
        capacity: 500,
        available: 8,
    },
];
