//! Handlers for the `/equipment` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sitetrack_db::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};
use sitetrack_db::repositories::EquipmentRepo;
use sitetrack_db::views::resource_search::search_equipment;
use sitetrack_events::Action;

use super::{notify, path_id};
use crate::error::AppResult;
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Equipment";

/// POST /api/v1/equipment
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let result = EquipmentRepo::create(&state.store, &input).await;
    notify(&state, ENTITY, Action::Create, &result, |e| (e.id, e.name.as_str()));
    Ok((StatusCode::CREATED, Json(result?)))
}

/// GET /api/v1/equipment?search=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<Equipment>>>> {
    let all = EquipmentRepo::list(&state.store).await;
    Ok(Json(DataResponse {
        data: search_equipment(&all, params.search.as_deref()),
    }))
}

/// GET /api/v1/equipment/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Equipment>> {
    let id = path_id(&state, ENTITY, None, &id)?;
    Ok(Json(EquipmentRepo::find_by_id(&state.store, id).await?))
}

/// PUT /api/v1/equipment/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let id = path_id(&state, ENTITY, Some(Action::Update), &id)?;
    let result = EquipmentRepo::update(&state.store, id, &input).await;
    notify(&state, ENTITY, Action::Update, &result, |e| (e.id, e.name.as_str()));
    Ok(Json(result?))
}

/// DELETE /api/v1/equipment/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = path_id(&state, ENTITY, Some(Action::Delete), &id)?;
    let result = EquipmentRepo::delete(&state.store, id).await;
    notify(&state, ENTITY, Action::Delete, &result, |e| (e.id, e.name.as_str()));
    result?;
    Ok(StatusCode::NO_CONTENT)
}
