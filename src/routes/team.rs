//! Team administration routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::models::{NewTeamMember, TeamMember, TeamMemberPatch};
use crate::routes::ApiError;
use crate::services::team::{self, TeamError};
use crate::state::AppState;

pub(crate) fn team_error_response(err: &TeamError) -> ApiError {
    let status = match err {
        TeamError::NotFound(_) => StatusCode::NOT_FOUND,
        TeamError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        TeamError::DuplicateEmail(_) => StatusCode::CONFLICT,
    };
    ApiError::from_err(status, err)
}

/// `GET /api/team` — the roster.
pub async fn list(State(state): State<AppState>) -> Json<Vec<TeamMember>> {
    Json(team::list_members(&state).await)
}

/// `POST /api/team` — add a member.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewTeamMember>,
) -> Result<(StatusCode, Json<TeamMember>), ApiError> {
    let created = team::add_member(&state, body)
        .await
        .map_err(|err| team_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /api/team/:id` — partial update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<TeamMemberPatch>,
) -> Result<Json<TeamMember>, ApiError> {
    let updated = team::update_member(&state, id, body)
        .await
        .map_err(|err| team_error_response(&err))?;
    Ok(Json(updated))
}

/// `POST /api/team/:id/deactivate` — take a member off the roster.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamMember>, ApiError> {
    let member = team::deactivate_member(&state, id)
        .await
        .map_err(|err| team_error_response(&err))?;
    Ok(Json(member))
}
