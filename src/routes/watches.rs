//! Inventory routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{NewWatch, Watch, WatchPatch, WatchStatus};
use crate::routes::ApiError;
use crate::services::inventory::{self, InventoryError, WatchFilter};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct WatchListQuery {
    pub status: Option<String>,
    pub brand: Option<String>,
    pub q: Option<String>,
}

pub(crate) fn inventory_error_response(err: &InventoryError) -> ApiError {
    let status = match err {
        InventoryError::NotFound(_) => StatusCode::NOT_FOUND,
        InventoryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    ApiError::from_err(status, err)
}

/// `GET /api/watches` — filtered inventory list.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<WatchListQuery>,
) -> Result<Json<Vec<Watch>>, ApiError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            WatchStatus::from_str(raw)
                .ok_or_else(|| ApiError::validation(format!("unknown watch status '{raw}'")))?,
        ),
        None => None,
    };
    let filter = WatchFilter { status, brand: query.brand, search: query.q };
    Ok(Json(inventory::list_watches(&state, &filter).await))
}

/// `POST /api/watches` — add to inventory.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewWatch>,
) -> Result<(StatusCode, Json<Watch>), ApiError> {
    let created = inventory::add_watch(&state, body)
        .await
        .map_err(|err| inventory_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/watches/:id` — fetch one watch.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Watch>, ApiError> {
    let found = inventory::get_watch(&state, id)
        .await
        .map_err(|err| inventory_error_response(&err))?;
    Ok(Json(found))
}

/// `PATCH /api/watches/:id` — partial update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<WatchPatch>,
) -> Result<Json<Watch>, ApiError> {
    let updated = inventory::update_watch(&state, id, body)
        .await
        .map_err(|err| inventory_error_response(&err))?;
    Ok(Json(updated))
}
