//! Handlers for the parking realtime query API.
//!
//! The store keeps only the latest state per lot (upserted by polling or
//! seeding). The UI polls `GET /api/parking/realtime` and renders the east
//! and west lists separately.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use parking_core::parking::{
    AreaSide, ParkingType, Terminal, DEFAULT_PARKING_TYPE, DEFAULT_TERMINAL,
};
use parking_core::types::Timestamp;
use parking_db::models::parking_lot_status::ParkingLotStatus;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::ParkingStatusService;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /api/parking/realtime`.
#[derive(Debug, Deserialize)]
pub struct RealtimeParams {
    pub terminal: Option<String>,
    #[serde(rename = "type")]
    pub parking_type: Option<String>,
}

impl RealtimeParams {
    /// Apply defaults and validate. Values are matched exactly; an empty
    /// value counts as omitted.
    pub fn resolve(&self) -> AppResult<(Terminal, ParkingType)> {
        let terminal = match self.terminal.as_deref().filter(|s| !s.is_empty()) {
            Some(t) => Terminal::from_str_value(t)?,
            None => DEFAULT_TERMINAL,
        };
        let parking_type = match self.parking_type.as_deref().filter(|s| !s.is_empty()) {
            Some(t) => ParkingType::from_str_value(t)?,
            None => DEFAULT_PARKING_TYPE,
        };
        Ok((terminal, parking_type))
    }
}

/// A single lot in the realtime response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLotItem {
    pub lot_code: String,
    pub lot_name: String,
    pub area_side: String,
    pub capacity: i32,
    pub available: i32,
    pub status: String,
    pub source_ts: Option<Timestamp>,
    pub updated_at: Timestamp,
}

impl From<ParkingLotStatus> for ParkingLotItem {
    fn from(row: ParkingLotStatus) -> Self {
        Self {
            lot_code: row.lot_code,
            lot_name: row.lot_name,
            area_side: row.area_side,
            capacity: row.capacity,
            available: row.available,
            status: row.status,
            source_ts: row.source_ts,
            updated_at: row.updated_at,
        }
    }
}

/// Current state for one terminal and parking type, split by side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingRealtimeResponse {
    /// Time this response was built, not the age of the data.
    pub last_updated: Timestamp,
    /// Newest `updatedAt` among the listed lots; `null` when both lists are empty.
    pub data_updated_at: Option<Timestamp>,
    pub terminal: Terminal,
    #[serde(rename = "type")]
    pub parking_type: ParkingType,
    pub east: Vec<ParkingLotItem>,
    pub west: Vec<ParkingLotItem>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/parking/realtime?terminal=T1|T2&type=short|long
///
/// Defaults to `T1` / `long`. Invalid values are rejected with 400 before
/// the store is queried.
pub async fn get_realtime(
    State(state): State<AppState>,
    Query(params): Query<RealtimeParams>,
) -> AppResult<impl IntoResponse> {
    let (terminal, parking_type) = params.resolve()?;

    let east = ParkingStatusService::get_by_terminal_type_and_side(
        &state.pool,
        terminal,
        parking_type,
        AreaSide::East,
    )
    .await?;
    let west = ParkingStatusService::get_by_terminal_type_and_side(
        &state.pool,
        terminal,
        parking_type,
        AreaSide::West,
    )
    .await?;

    let data_updated_at = east.iter().chain(west.iter()).map(|r| r.updated_at).max();

    tracing::debug!(
        terminal = terminal.as_str(),
        parking_type = parking_type.as_str(),
        east = east.len(),
        west = west.len(),
        "Realtime parking query",
    );

    Ok(Json(ParkingRealtimeResponse {
        last_updated: Utc::now(),
        data_updated_at,
        terminal,
        parking_type,
        east: east.into_iter().map(ParkingLotItem::from).collect(),
        west: west.into_iter().map(ParkingLotItem::from).collect(),
    }))
}

/// POST /api/parking/admin/seed-dummy
///
/// Upserts the dummy lots. No access control: only mount in development.
pub async fn seed_dummy(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let seeded = ParkingStatusService::seed_dummy(&state.pool).await?;

    tracing::warn!(count = seeded.len(), "Dummy parking data seeded via admin endpoint");

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use assert_matches::assert_matches;
    use parking_core::error::CoreError;

    fn params(terminal: Option<&str>, parking_type: Option<&str>) -> RealtimeParams {
        RealtimeParams {
            terminal: terminal.map(str::to_string),
            parking_type: parking_type.map(str::to_string),
        }
    }

    #[test]
    fn missing_params_use_defaults() {
        let (terminal, parking_type) = params(None, None).resolve().unwrap();
        assert_eq!(terminal, Terminal::T1);
        assert_eq!(parking_type, ParkingType::Long);
    }

    #[test]
    fn empty_params_use_defaults() {
        let (terminal, parking_type) = params(Some(""), Some("")).resolve().unwrap();
        assert_eq!(terminal, Terminal::T1);
        assert_eq!(parking_type, ParkingType::Long);
    }

    #[test]
    fn explicit_params_are_used() {
        let (terminal, parking_type) = params(Some("T2"), Some("short")).resolve().unwrap();
        assert_eq!(terminal, Terminal::T2);
        assert_eq!(parking_type, ParkingType::Short);
    }

    #[test]
    fn invalid_terminal_is_a_validation_error() {
        assert_matches!(
            params(Some("T3"), None).resolve(),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }

    #[test]
    fn invalid_type_is_a_validation_error() {
        assert_matches!(
            params(None, Some("Long")).resolve(),
            Err(AppError::Core(CoreError::Validation(_)))
        );
    }
}
