//! Supplier routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{NewSupplier, Supplier, SupplierPatch};
use crate::routes::ApiError;
use crate::services::supplier::{self, SupplierError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SupplierListQuery {
    pub q: Option<String>,
}

pub(crate) fn supplier_error_response(err: &SupplierError) -> ApiError {
    let status = match err {
        SupplierError::NotFound(_) => StatusCode::NOT_FOUND,
        SupplierError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    ApiError::from_err(status, err)
}

/// `GET /api/suppliers` — searchable list.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SupplierListQuery>,
) -> Json<Vec<Supplier>> {
    Json(supplier::list_suppliers(&state, query.q.as_deref()).await)
}

/// `POST /api/suppliers` — the inline "create new" form.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewSupplier>,
) -> Result<(StatusCode, Json<Supplier>), ApiError> {
    let created = supplier::add_supplier(&state, body)
        .await
        .map_err(|err| supplier_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/suppliers/:id` — fetch one supplier.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Supplier>, ApiError> {
    let found = supplier::get_supplier(&state, id)
        .await
        .map_err(|err| supplier_error_response(&err))?;
    Ok(Json(found))
}

/// `PATCH /api/suppliers/:id` — partial update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<SupplierPatch>,
) -> Result<Json<Supplier>, ApiError> {
    let updated = supplier::update_supplier(&state, id, body)
        .await
        .map_err(|err| supplier_error_response(&err))?;
    Ok(Json(updated))
}

/// `DELETE /api/suppliers/:id` — remove a supplier.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    supplier::delete_supplier(&state, id)
        .await
        .map_err(|err| supplier_error_response(&err))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
