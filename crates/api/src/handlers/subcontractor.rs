//! Handlers for the `/subcontractors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sitetrack_db::models::subcontractor::{CreateSubcontractor, Subcontractor, UpdateSubcontractor};
use sitetrack_db::repositories::SubcontractorRepo;
use sitetrack_db::views::resource_search::search_subcontractors;
use sitetrack_events::Action;

use super::{notify, path_id};
use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Subcontractor";

/// POST /api/v1/subcontractors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSubcontractor>,
) -> AppResult<(StatusCode, Json<Subcontractor>)> {
    let result = SubcontractorRepo::create(&state.store, &input).await;
    notify(&state, ENTITY, Action::Create, &result, |s| (s.id, s.name.as_str()));
    Ok((StatusCode::CREATED, Json(result?)))
}

/// GET /api/v1/subcontractors?search=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Subcontractor>>>> {
    let all = SubcontractorRepo::list(&state.store).await;
    Ok(Json(DataResponse {
        data: search_subcontractors(&all, params.search.as_deref()),
    }))
}

/// GET /api/v1/subcontractors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Subcontractor>> {
    let id = path_id(&state, ENTITY, None, &id)?;
    Ok(Json(SubcontractorRepo::find_by_id(&state.store, id).await?))
}

/// PUT /api/v1/subcontractors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateSubcontractor>,
) -> AppResult<Json<Subcontractor>> {
    let id = path_id(&state, ENTITY, Some(Action::Update), &id)?;
    let result = SubcontractorRepo::update(&state.store, id, &input).await;
    notify(&state, ENTITY, Action::Update, &result, |s| (s.id, s.name.as_str()));
    Ok(Json(result?))
}

/// DELETE /api/v1/subcontractors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = path_id(&state, ENTITY, Some(Action::Delete), &id)?;
    let result = SubcontractorRepo::delete(&state.store, id).await;
    notify(&state, ENTITY, Action::Delete, &result, |s| (s.id, s.name.as_str()));
    result?;
    Ok(StatusCode::NO_CONTENT)
}
