//! Route definitions for the parking realtime API.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::parking;
use crate::state::AppState;

/// Routes mounted at `/api/parking`.
///
/// ```text
/// GET  /realtime            -> get_realtime
/// POST /admin/seed-dummy    -> seed_dummy (only when `seed_enabled`)
/// ```
pub fn router(seed_enabled: bool) -> Router<AppState> {
    let router = Router::new().route("/realtime", get(parking::get_realtime));

    if seed_enabled {
        router.route("/admin/seed-dummy", post(parking::seed_dummy))
    } else {
        router
    }
}
