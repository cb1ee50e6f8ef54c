//! Handlers for the `/tasks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use sitetrack_core::types::{Date, DbId};
use sitetrack_db::models::task::{CreateTask, NamedRef, Task, UpdateTask};
use sitetrack_db::repositories::TaskRepo;
use sitetrack_db::views::task_view::{
    annotate, filter_tasks, group_cards_by_phase, PhaseGroup, TaskCard, TaskFilter,
};
use sitetrack_events::Action;

use super::{notify, path_id};
use crate::error::{AppError, AppResult};
use crate::query::{parse_selector, today_or_now};
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Task";

/// Query parameters for `GET /tasks/view`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskViewParams {
    pub search: Option<String>,
    /// A task status label or `All`.
    pub status: Option<String>,
    /// A priority label or `All`.
    pub priority: Option<String>,
    pub assignee_id: Option<DbId>,
    pub phase_id: Option<DbId>,
    /// `phase` groups the result by phase name.
    pub group: Option<String>,
    pub today: Option<Date>,
}

/// A flat or phase-grouped task view.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum TaskView {
    Flat(Vec<TaskCard>),
    Grouped(Vec<PhaseGroup<TaskCard>>),
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let result = TaskRepo::create(&state.store, &input).await;
    notify(&state, ENTITY, Action::Create, &result, |t| (t.id, t.name.as_str()));
    Ok((StatusCode::CREATED, Json(result?)))
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Task>>>> {
    let tasks = TaskRepo::list(&state.store).await;
    Ok(Json(DataResponse { data: tasks }))
}

/// GET /api/v1/tasks/view
pub async fn view(
    State(state): State<AppState>,
    Query(params): Query<TaskViewParams>,
) -> AppResult<Json<DataResponse<TaskView>>> {
    let filter = TaskFilter {
        search: params.search,
        status: parse_selector(params.status.as_deref())?,
        priority: parse_selector(params.priority.as_deref())?,
        assignee_id: params.assignee_id,
        phase_id: params.phase_id,
    };
    let grouped = match params.group.as_deref().map(str::trim) {
        None | Some("") | Some("none") => false,
        Some("phase") => true,
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Invalid group '{other}'. Must be one of: phase, none"
            )))
        }
    };

    let tasks = TaskRepo::list(&state.store).await;
    let cards = annotate(filter_tasks(&tasks, &filter), today_or_now(params.today));
    let data = if grouped {
        TaskView::Grouped(group_cards_by_phase(cards))
    } else {
        TaskView::Flat(cards)
    };
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/tasks/assignees
pub async fn assignees(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<NamedRef>>>> {
    Ok(Json(DataResponse {
        data: TaskRepo::assignees(&state.store).await,
    }))
}

/// GET /api/v1/tasks/phases
pub async fn phases(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<NamedRef>>>> {
    Ok(Json(DataResponse {
        data: TaskRepo::phases(&state.store).await,
    }))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let id = path_id(&state, ENTITY, None, &id)?;
    Ok(Json(TaskRepo::find_by_id(&state.store, id).await?))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let id = path_id(&state, ENTITY, Some(Action::Update), &id)?;
    let result = TaskRepo::update(&state.store, id, &input).await;
    notify(&state, ENTITY, Action::Update, &result, |t| (t.id, t.name.as_str()));
    Ok(Json(result?))
}

/// POST /api/v1/tasks/{id}/advance
///
/// Moves the task one step through the status toggle.
pub async fn advance(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Task>> {
    let id = path_id(&state, ENTITY, Some(Action::Advance), &id)?;
    let result = TaskRepo::advance_status(&state.store, id).await;
    notify(&state, ENTITY, Action::Advance, &result, |t| (t.id, t.name.as_str()));
    Ok(Json(result?))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = path_id(&state, ENTITY, Some(Action::Delete), &id)?;
    let result = TaskRepo::delete(&state.store, id).await;
    notify(&state, ENTITY, Action::Delete, &result, |t| (t.id, t.name.as_str()));
    result?;
    Ok(StatusCode::NO_CONTENT)
}
