//! Route definitions for the `/tasks` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::task;
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /view             -> view (?search=&status=&priority=&assigneeId=&phaseId=&group=&today=)
/// GET    /assignees        -> assignees
/// GET    /phases           -> phases
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/advance     -> advance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/view", get(task::view))
        .route("/assignees", get(task::assignees))
        .route("/phases", get(task::phases))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{id}/advance", post(task::advance))
}
