//! Route definitions for the `/subcontractors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::subcontractor;
use crate::state::AppState;

/// Routes mounted at `/subcontractors`.
///
/// ```text
/// GET    /                 -> list (?search=)
/// POST   /                 -> create
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(subcontractor::list).post(subcontractor::create))
        .route(
            "/{id}",
            get(subcontractor::get_by_id).put(subcontractor::update).delete(subcontractor::delete),
        )
}
