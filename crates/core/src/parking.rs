//! Parking lot enumerations and occupancy status derivation.
//!
//! The string constants here must match the values stored in the
//! `parking_lot_status` table and accepted by the realtime query endpoint.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const TERMINAL_T1: &str = "T1";
pub const TERMINAL_T2: &str = "T2";

/// All valid terminal codes.
pub const VALID_TERMINALS: &[&str] = &[TERMINAL_T1, TERMINAL_T2];

pub const PARKING_TYPE_SHORT: &str = "short";
pub const PARKING_TYPE_LONG: &str = "long";

/// All valid parking types.
pub const VALID_PARKING_TYPES: &[&str] = &[PARKING_TYPE_SHORT, PARKING_TYPE_LONG];

pub const AREA_SIDE_EAST: &str = "east";
pub const AREA_SIDE_WEST: &str = "west";
pub const AREA_SIDE_UNKNOWN: &str = "unknown";

/// All valid area sides.
pub const VALID_AREA_SIDES: &[&str] = &[AREA_SIDE_EAST, AREA_SIDE_WEST, AREA_SIDE_UNKNOWN];

pub const STATUS_OK: &str = "OK";
pub const STATUS_BUSY: &str = "BUSY";
pub const STATUS_FULL: &str = "FULL";
pub const STATUS_UNKNOWN: &str = "UNKNOWN";

/// All valid lot status strings.
pub const VALID_STATUSES: &[&str] = &[STATUS_OK, STATUS_BUSY, STATUS_FULL, STATUS_UNKNOWN];

/// Occupancy percentage at or above which a lot is reported as full.
pub const FULL_OCCUPANCY_PERCENT: f64 = 95.0;

/// Occupancy percentage at or above which a lot is reported as busy.
pub const BUSY_OCCUPANCY_PERCENT: f64 = 85.0;

/// Default terminal when the query omits one.
pub const DEFAULT_TERMINAL: Terminal = Terminal::T1;

/// Default parking type when the query omits one.
pub const DEFAULT_PARKING_TYPE: ParkingType = ParkingType::Long;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Airport passenger terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminal {
    T1,
    T2,
}

impl Terminal {
    /// Parse an exact, case-sensitive terminal code.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            TERMINAL_T1 => Ok(Self::T1),
            TERMINAL_T2 => Ok(Self::T2),
            _ => Err(CoreError::Validation(format!(
                "Invalid terminal '{s}'. Must be one of: {}",
                VALID_TERMINALS.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::T1 => TERMINAL_T1,
            Self::T2 => TERMINAL_T2,
        }
    }
}

/// Short-term or long-term parking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkingType {
    Short,
    Long,
}

impl ParkingType {
    /// Parse an exact, case-sensitive parking type.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            PARKING_TYPE_SHORT => Ok(Self::Short),
            PARKING_TYPE_LONG => Ok(Self::Long),
            _ => Err(CoreError::Validation(format!(
                "Invalid parking type '{s}'. Must be one of: {}",
                VALID_PARKING_TYPES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => PARKING_TYPE_SHORT,
            Self::Long => PARKING_TYPE_LONG,
        }
    }
}

/// Coarse location of a lot relative to its terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaSide {
    East,
    West,
    Unknown,
}

impl AreaSide {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            AREA_SIDE_EAST => Ok(Self::East),
            AREA_SIDE_WEST => Ok(Self::West),
            AREA_SIDE_UNKNOWN => Ok(Self::Unknown),
            _ => Err(CoreError::Validation(format!(
                "Invalid area side '{s}'. Must be one of: {}",
                VALID_AREA_SIDES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::East => AREA_SIDE_EAST,
            Self::West => AREA_SIDE_WEST,
            Self::Unknown => AREA_SIDE_UNKNOWN,
        }
    }
}

/// Derived availability status of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LotStatus {
    Ok,
    Busy,
    Full,
    Unknown,
}

impl LotStatus {
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            STATUS_OK => Ok(Self::Ok),
            STATUS_BUSY => Ok(Self::Busy),
            STATUS_FULL => Ok(Self::Full),
            STATUS_UNKNOWN => Ok(Self::Unknown),
            _ => Err(CoreError::Validation(format!(
                "Invalid lot status '{s}'. Must be one of: {}",
                VALID_STATUSES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => STATUS_OK,
            Self::Busy => STATUS_BUSY,
            Self::Full => STATUS_FULL,
            Self::Unknown => STATUS_UNKNOWN,
        }
    }
}

// ---------------------------------------------------------------------------
// Status derivation
// ---------------------------------------------------------------------------

/// Percentage of `capacity` in use. `None` when capacity is not positive.
pub fn occupancy_percent(available: i32, capacity: i32) -> Option<f64> {
    if capacity <= 0 {
        return None;
    }
    let used = f64::from(capacity) - f64::from(available);
    Some(used * 100.0 / f64::from(capacity))
}

/// Derive a lot status from free and total space counts.
///
/// The `available <= 0` check runs before the occupancy thresholds, so an
/// over-reported negative availability is still `FULL`.
pub fn calc_status(available: i32, capacity: i32) -> LotStatus {
    let Some(occupancy) = occupancy_percent(available, capacity) else {
        return LotStatus::Unknown;
    };
    if available <= 0 {
        return LotStatus::Full;
    }
    if occupancy >= FULL_OCCUPANCY_PERCENT {
        LotStatus::Full
    } else if occupancy >= BUSY_OCCUPANCY_PERCENT {
        LotStatus::Busy
    } else {
        LotStatus::Ok
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check that space counts are in range: `0 <= available <= capacity`.
pub fn validate_counts(available: i32, capacity: i32) -> Result<(), CoreError> {
    if capacity < 0 {
        return Err(CoreError::Validation(format!(
            "capacity must be non-negative, got {capacity}"
        )));
    }
    if available < 0 || available > capacity {
        return Err(CoreError::Validation(format!(
            "available must be between 0 and capacity ({capacity}), got {available}"
        )));
    }
    Ok(())
}

/// Check that a status string is one of the known values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    LotStatus::from_str_value(status).map(|_| ())
}
