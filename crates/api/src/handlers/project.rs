//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use sitetrack_core::project_health::ProjectHealth;
use sitetrack_db::models::project::{CreateProject, Project, UpdateProject};
use sitetrack_db::repositories::{ProjectRepo, TaskRepo};
use sitetrack_db::views::project_view::{
    filter_projects, parse_status_filter, project_health, DashboardStats, ProjectFilter,
    ProjectSort,
};
use sitetrack_db::views::task_view::{annotate, TaskCard};
use sitetrack_events::Action;

use super::{notify, path_id};
use crate::error::AppResult;
use crate::query::{parse_or_default, today_or_now, TodayParams};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Project";

/// Query parameters for `GET /projects/view`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectViewParams {
    /// A project status label or `All`.
    pub status: Option<String>,
    pub search: Option<String>,
    /// `newest`, `oldest`, `name`, `deadline` or `budget`.
    pub sort: Option<String>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let result = ProjectRepo::create(&state.store, &input).await;
    notify(&state, ENTITY, Action::Create, &result, |p| (p.id, p.name.as_str()));
    Ok((StatusCode::CREATED, Json(result?)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.store).await;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/view
pub async fn view(
    State(state): State<AppState>,
    Query(params): Query<ProjectViewParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let filter = ProjectFilter {
        status: parse_status_filter(params.status.as_deref().unwrap_or(""))?,
        search: params.search,
    };
    let sort: ProjectSort = parse_or_default(params.sort.as_deref())?;

    let projects = ProjectRepo::list(&state.store).await;
    Ok(Json(DataResponse {
        data: filter_projects(&projects, &filter, sort),
    }))
}

/// GET /api/v1/projects/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let projects = ProjectRepo::list(&state.store).await;
    Ok(Json(DashboardStats::from_projects(&projects)))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let id = path_id(&state, ENTITY, None, &id)?;
    let project = ProjectRepo::find_by_id(&state.store, id).await?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/health
pub async fn health(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<TodayParams>,
) -> AppResult<Json<ProjectHealth>> {
    let id = path_id(&state, ENTITY, None, &id)?;
    let project = ProjectRepo::find_by_id(&state.store, id).await?;
    Ok(Json(project_health(&project, today_or_now(params.today))))
}

/// GET /api/v1/projects/{id}/tasks
pub async fn tasks(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<TodayParams>,
) -> AppResult<Json<DataResponse<Vec<TaskCard>>>> {
    let id = path_id(&state, ENTITY, None, &id)?;
    ProjectRepo::find_by_id(&state.store, id).await?;
    let tasks = TaskRepo::list_by_project(&state.store, id).await?;
    Ok(Json(DataResponse {
        data: annotate(tasks, today_or_now(params.today)),
    }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let id = path_id(&state, ENTITY, Some(Action::Update), &id)?;
    let result = ProjectRepo::update(&state.store, id, &input).await;
    notify(&state, ENTITY, Action::Update, &result, |p| (p.id, p.name.as_str()));
    Ok(Json(result?))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = path_id(&state, ENTITY, Some(Action::Delete), &id)?;
    let result = ProjectRepo::delete(&state.store, id).await;
    notify(&state, ENTITY, Action::Delete, &result, |p| (p.id, p.name.as_str()));
    result?;
    Ok(StatusCode::NO_CONTENT)
}
