//! Kanban board routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Card, CardStatus, NewCard};
use crate::routes::ApiError;
use crate::services::kanban::{self, Column, KanbanError};
use crate::state::AppState;

pub(crate) fn kanban_error_response(err: &KanbanError) -> ApiError {
    let status = match err {
        KanbanError::NotFound(_) => StatusCode::NOT_FOUND,
        KanbanError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    ApiError::from_err(status, err)
}

/// `GET /api/kanban/cards` — the three-column board view.
pub async fn board(State(state): State<AppState>) -> Json<Vec<Column>> {
    Json(kanban::board(&state).await)
}

/// `POST /api/kanban/cards` — add a card.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCard>,
) -> Result<(StatusCode, Json<Card>), ApiError> {
    let created = kanban::create_card(&state, body)
        .await
        .map_err(|err| kanban_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[derive(Deserialize)]
pub struct MoveCardBody {
    /// Target column.
    pub to: CardStatus,
}

/// `POST /api/kanban/cards/:id/move` — the drag-drop.
pub async fn move_card(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MoveCardBody>,
) -> Result<Json<Card>, ApiError> {
    let moved = kanban::move_card(&state, id, body.to)
        .await
        .map_err(|err| kanban_error_response(&err))?;
    Ok(Json(moved))
}

/// `DELETE /api/kanban/cards/:id` — remove a card.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    kanban::delete_card(&state, id)
        .await
        .map_err(|err| kanban_error_response(&err))?;
    Ok(Json(serde_json::json!({ "ok": true })))
}
