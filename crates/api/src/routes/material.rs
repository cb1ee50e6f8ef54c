//! Route definitions for the `/materials` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::material;
use crate::state::AppState;

/// Routes mounted at `/materials`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /view             -> view (?search=&bucket=&sort=&order=)
/// GET    /stats            -> stats
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/request     -> request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(material::list).post(material::create))
        .route("/view", get(material::view))
        .route("/stats", get(material::stats))
        .route(
            "/{id}",
            get(material::get_by_id)
                .put(material::update)
                .delete(material::delete),
        )
        .route("/{id}/request", post(material::request))
}
