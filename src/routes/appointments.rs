//! Appointment routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Appointment, NewAppointment};
use crate::routes::ApiError;
use crate::services::appointment::{self, AppointmentError};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AppointmentListQuery {
    pub customer_id: Option<Uuid>,
}

pub(crate) fn appointment_error_response(err: &AppointmentError) -> ApiError {
    let status = match err {
        AppointmentError::NotFound(_) | AppointmentError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
        AppointmentError::AlreadyClosed(_) => StatusCode::CONFLICT,
    };
    ApiError::from_err(status, err)
}

/// `GET /api/appointments` — all bookings, optionally per customer.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<AppointmentListQuery>,
) -> Json<Vec<Appointment>> {
    Json(appointment::list(&state, query.customer_id).await)
}

/// `GET /api/appointments/upcoming` — future scheduled, soonest first.
pub async fn upcoming(State(state): State<AppState>) -> Json<Vec<Appointment>> {
    Json(appointment::upcoming(&state).await)
}

/// `POST /api/appointments` — book an appointment.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewAppointment>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let created = appointment::schedule(&state, body)
        .await
        .map_err(|err| appointment_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /api/appointments/:id/cancel` — cancel a booking.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, ApiError> {
    let cancelled = appointment::cancel(&state, id)
        .await
        .map_err(|err| appointment_error_response(&err))?;
    Ok(Json(cancelled))
}

/// `POST /api/appointments/:id/complete` — close out a booking.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Appointment>, ApiError> {
    let completed = appointment::complete(&state, id)
        .await
        .map_err(|err| appointment_error_response(&err))?;
    Ok(Json(completed))
}
