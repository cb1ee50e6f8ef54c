pub mod equipment;
pub mod health;
pub mod material;
pub mod notice;
pub mod project;
pub mod subcontractor;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects          CRUD, view, stats, per-project health and tasks
/// /tasks             CRUD, view, assignees, phases, status advance
/// /materials         CRUD, view, stats, material requests
/// /equipment         CRUD, ?search=
/// /subcontractors    CRUD, ?search=
/// /notices           recent mutation notices
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/materials", material::router())
        .nest("/equipment", equipment::router())
        .nest("/subcontractors", subcontractor::router())
        .nest("/notices", notice::router())
}
