//! Handlers for the `/notices` feed.

use axum::extract::State;
use axum::Json;
use sitetrack_events::Notice;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/notices
///
/// The most recent mutation notices, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Notice>>>> {
    Ok(Json(DataResponse {
        data: state.notices.recent().await,
    }))
}
