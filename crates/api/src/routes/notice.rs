use axum::routing::get;
use axum::Router;

use crate::handlers::notice;
use crate::state::AppState;

/// Routes mounted at `/notices`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(notice::list))
}
