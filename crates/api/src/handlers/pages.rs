//! Static page handlers.

use axum::response::Html;

/// Home page markup, embedded at compile time.
const HOME_PAGE: &str = include_str!("../../static/home.html");

/// GET / and GET /home
///
/// Serves the realtime availability page. The page polls
/// `/api/parking/realtime` itself; nothing is rendered server-side.
pub async fn home() -> Html<&'static str> {
    Html(HOME_PAGE)
}
