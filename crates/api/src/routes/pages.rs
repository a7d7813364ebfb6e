use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes mounted at the root.
///
/// ```text
/// GET /       -> home
/// GET /home   -> home
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/home", get(pages::home))
}
