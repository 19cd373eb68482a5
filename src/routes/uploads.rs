//! Upload routes — transient attachments behind `mem://` handles.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::StoredUpload;
use crate::routes::ApiError;
use crate::services::upload::{self, UploadError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UploadQuery {
    pub filename: String,
}

pub(crate) fn upload_error_response(err: &UploadError) -> ApiError {
    let status = match err {
        UploadError::NotFound(_) => StatusCode::NOT_FOUND,
        UploadError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    ApiError::from_err(status, err)
}

/// `POST /api/uploads?filename=…` — store raw bytes, return the handle.
pub async fn create(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<StoredUpload>), ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream");

    let stored = upload::store_upload(&state, &query.filename, content_type, body.to_vec())
        .await
        .map_err(|err| upload_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// `GET /api/uploads/:id` — attachment metadata.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StoredUpload>, ApiError> {
    let found = upload::get_upload(&state, id)
        .await
        .map_err(|err| upload_error_response(&err))?;
    Ok(Json(found))
}

/// `DELETE /api/uploads/:id` — release the attachment.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    upload::delete_upload(&state, id)
        .await
        .map_err(|err| upload_error_response(&err))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
