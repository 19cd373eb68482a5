//! Repair tracking routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{NewRepair, Repair, RepairPatch, RepairPriority, RepairStatus};
use crate::routes::ApiError;
use crate::services::repair::{self, RepairError, RepairFilter, RepairSortKey, SortDir};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct RepairListQuery {
    pub status: Option<String>,
    pub priority: Option<String>,
    pub technician: Option<String>,
    /// Substring search over brand/model/description/ticket.
    pub q: Option<String>,
    /// Column to sort by.
    pub sort: Option<String>,
    /// `asc` (default) or `desc`.
    pub dir: Option<String>,
}

pub(crate) fn repair_error_response(err: &RepairError) -> ApiError {
    let status = match err {
        RepairError::NotFound(_) | RepairError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
        RepairError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    ApiError::from_err(status, err)
}

pub(crate) fn parse_list_query(query: &RepairListQuery) -> Result<(RepairFilter, Option<(RepairSortKey, SortDir)>), ApiError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            RepairStatus::from_str(raw)
                .ok_or_else(|| ApiError::validation(format!("unknown repair status '{raw}'")))?,
        ),
        None => None,
    };
    let priority = match query.priority.as_deref() {
        Some(raw) => Some(
            RepairPriority::from_str(raw)
                .ok_or_else(|| ApiError::validation(format!("unknown priority '{raw}'")))?,
        ),
        None => None,
    };
    let sort = match query.sort.as_deref() {
        Some(raw) => {
            let key = RepairSortKey::from_str(raw)
                .ok_or_else(|| ApiError::validation(format!("unknown sort column '{raw}'")))?;
            let dir = match query.dir.as_deref() {
                Some(raw_dir) => SortDir::from_str(raw_dir)
                    .ok_or_else(|| ApiError::validation(format!("unknown sort direction '{raw_dir}'")))?,
                None => SortDir::Asc,
            };
            Some((key, dir))
        }
        None => None,
    };

    let filter = RepairFilter {
        status,
        priority,
        technician: query.technician.clone(),
        search: query.q.clone(),
    };
    Ok((filter, sort))
}

/// `GET /api/repairs` — the tracking table: filter, search, sort.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RepairListQuery>,
) -> Result<Json<Vec<Repair>>, ApiError> {
    let (filter, sort) = parse_list_query(&query)?;
    Ok(Json(repair::list_repairs(&state, &filter, sort).await))
}

/// `POST /api/repairs` — repair intake.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewRepair>,
) -> Result<(StatusCode, Json<Repair>), ApiError> {
    let created = repair::create_repair(&state, body)
        .await
        .map_err(|err| repair_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/repairs/:id` — fetch one repair.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Repair>, ApiError> {
    let found = repair::get_repair(&state, id)
        .await
        .map_err(|err| repair_error_response(&err))?;
    Ok(Json(found))
}

/// `PATCH /api/repairs/:id` — status/priority/assignment updates.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<RepairPatch>,
) -> Result<Json<Repair>, ApiError> {
    let updated = repair::update_repair(&state, id, body)
        .await
        .map_err(|err| repair_error_response(&err))?;
    Ok(Json(updated))
}

#[derive(Deserialize)]
pub struct AddNoteBody {
    pub note: String,
}

/// `POST /api/repairs/:id/notes` — append a work note.
pub async fn add_note(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<AddNoteBody>,
) -> Result<Json<Repair>, ApiError> {
    let updated = repair::add_note(&state, id, &body.note)
        .await
        .map_err(|err| repair_error_response(&err))?;
    Ok(Json(updated))
}

#[cfg(test)]
#[path = "repairs_test.rs"]
mod tests;
