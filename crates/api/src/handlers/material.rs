//! Handlers for the `/materials` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use sitetrack_db::models::material::{CreateMaterial, Material, MaterialRequest, UpdateMaterial};
use sitetrack_db::repositories::MaterialRepo;
use sitetrack_db::views::material_view::{
    annotate, filter_materials, MaterialCard, MaterialFilter, MaterialStats,
};
use sitetrack_events::notice::{failure_event, success_event};
use sitetrack_events::Action;

use super::{notify, path_id};
use crate::error::AppResult;
use crate::query::parse_or_default;
use crate::response::DataResponse;
use crate::state::AppState;

const ENTITY: &str = "Material";

/// Query parameters for `GET /materials/view`.
#[derive(Debug, Default, Deserialize)]
pub struct MaterialViewParams {
    pub search: Option<String>,
    /// `all`, `low`, `critical` or `ordered`.
    pub bucket: Option<String>,
    /// `name`, `stock`, `status` or `supplier`.
    pub sort: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
}

/// POST /api/v1/materials
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMaterial>,
) -> AppResult<(StatusCode, Json<Material>)> {
    let result = MaterialRepo::create(&state.store, &input).await;
    notify(&state, ENTITY, Action::Create, &result, |m| (m.id, m.name.as_str()));
    Ok((StatusCode::CREATED, Json(result?)))
}

/// GET /api/v1/materials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<MaterialCard>>>> {
    let materials = MaterialRepo::list(&state.store).await;
    Ok(Json(DataResponse {
        data: annotate(materials),
    }))
}

/// GET /api/v1/materials/view
pub async fn view(
    State(state): State<AppState>,
    Query(params): Query<MaterialViewParams>,
) -> AppResult<Json<DataResponse<Vec<MaterialCard>>>> {
    let filter = MaterialFilter {
        search: params.search,
        bucket: parse_or_default(params.bucket.as_deref())?,
        sort: parse_or_default(params.sort.as_deref())?,
        order: parse_or_default(params.order.as_deref())?,
    };

    let materials = MaterialRepo::list(&state.store).await;
    Ok(Json(DataResponse {
        data: annotate(filter_materials(&materials, &filter)),
    }))
}

/// GET /api/v1/materials/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<MaterialStats>> {
    let materials = MaterialRepo::list(&state.store).await;
    Ok(Json(MaterialStats::from_materials(&materials)))
}

/// GET /api/v1/materials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Material>> {
    let id = path_id(&state, ENTITY, None, &id)?;
    Ok(Json(MaterialRepo::find_by_id(&state.store, id).await?))
}

/// PUT /api/v1/materials/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateMaterial>,
) -> AppResult<Json<Material>> {
    let id = path_id(&state, ENTITY, Some(Action::Update), &id)?;
    let result = MaterialRepo::update(&state.store, id, &input).await;
    notify(&state, ENTITY, Action::Update, &result, |m| (m.id, m.name.as_str()));
    Ok(Json(result?))
}

/// POST /api/v1/materials/{id}/request
///
/// Orders more of a material. Notes and urgency travel with the published
/// event only.
pub async fn request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<MaterialRequest>,
) -> AppResult<Json<Material>> {
    let id = path_id(&state, ENTITY, Some(Action::Request), &id)?;
    let result = MaterialRepo::request(&state.store, id, &input).await;

    let event = match &result {
        Ok(material) => success_event(ENTITY, material.id, &material.name, Action::Request)
            .with_payload(json!({
                "quantity": input.quantity,
                "urgency": input.urgency,
                "notes": input.notes,
            })),
        Err(e) => failure_event(ENTITY, Action::Request, e),
    };
    state.event_bus.publish(event);

    Ok(Json(result?))
}

/// DELETE /api/v1/materials/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = path_id(&state, ENTITY, Some(Action::Delete), &id)?;
    let result = MaterialRepo::delete(&state.store, id).await;
    notify(&state, ENTITY, Action::Delete, &result, |m| (m.id, m.name.as_str()));
    result?;
    Ok(StatusCode::NO_CONTENT)
}
