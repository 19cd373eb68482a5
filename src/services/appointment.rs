//! Appointment service — scheduling, cancellation, the upcoming view.

use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus, NewAppointment};
use crate::state::AppState;

const DEFAULT_DURATION_MINUTES: u32 = 30;

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("appointment not found: {0}")]
    NotFound(Uuid),
    #[error("customer not found: {0}")]
    CustomerNotFound(Uuid),
    #[error("appointment is already {0}")]
    AlreadyClosed(&'static str),
}

impl crate::error::ErrorCode for AppointmentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_APPOINTMENT_NOT_FOUND",
            Self::CustomerNotFound(_) => "E_CUSTOMER_NOT_FOUND",
            Self::AlreadyClosed(_) => "E_APPOINTMENT_CLOSED",
        }
    }
}

/// Book an appointment for an existing customer.
///
/// # Errors
///
/// Returns `CustomerNotFound` for an unknown customer.
pub async fn schedule(state: &AppState, new: NewAppointment) -> Result<Appointment, AppointmentError> {
    let mut directory = state.directory.write().await;
    if directory.customer(new.customer_id).is_none() {
        return Err(AppointmentError::CustomerNotFound(new.customer_id));
    }

    let appointment = Appointment {
        id: Uuid::new_v4(),
        customer_id: new.customer_id,
        kind: new.kind,
        scheduled_at: new.scheduled_at,
        duration_minutes: new.duration_minutes.unwrap_or(DEFAULT_DURATION_MINUTES),
        status: AppointmentStatus::Scheduled,
        notes: new.notes,
    };
    directory.appointments.push(appointment.clone());
    info!(appointment_id = %appointment.id, customer_id = %appointment.customer_id, "appointment scheduled");
    Ok(appointment)
}

/// List appointments, optionally for one customer.
pub async fn list(state: &AppState, customer_id: Option<Uuid>) -> Vec<Appointment> {
    let directory = state.directory.read().await;
    directory
        .appointments
        .iter()
        .filter(|appointment| customer_id.is_none_or(|id| appointment.customer_id == id))
        .cloned()
        .collect()
}

/// Scheduled appointments at or after `now`, soonest first.
pub(crate) fn upcoming_at(appointments: &[Appointment], now: OffsetDateTime) -> Vec<Appointment> {
    let mut upcoming: Vec<Appointment> = appointments
        .iter()
        .filter(|appointment| {
            appointment.status == AppointmentStatus::Scheduled && appointment.scheduled_at >= now
        })
        .cloned()
        .collect();
    upcoming.sort_by_key(|appointment| appointment.scheduled_at);
    upcoming
}

/// The dashboard's upcoming list.
pub async fn upcoming(state: &AppState) -> Vec<Appointment> {
    let directory = state.directory.read().await;
    upcoming_at(&directory.appointments, OffsetDateTime::now_utc())
}

fn transition(
    state_slot: &mut Appointment,
    to: AppointmentStatus,
) -> Result<(), AppointmentError> {
    match state_slot.status {
        AppointmentStatus::Scheduled => {
            state_slot.status = to;
            Ok(())
        }
        AppointmentStatus::Completed => Err(AppointmentError::AlreadyClosed("completed")),
        AppointmentStatus::Cancelled => Err(AppointmentError::AlreadyClosed("cancelled")),
    }
}

/// Cancel a scheduled appointment.
///
/// # Errors
///
/// Returns `NotFound` for an unknown id, `AlreadyClosed` if it was
/// completed or cancelled before.
pub async fn cancel(state: &AppState, id: Uuid) -> Result<Appointment, AppointmentError> {
    set_status(state, id, AppointmentStatus::Cancelled).await
}

/// Mark a scheduled appointment completed.
///
/// # Errors
///
/// Same as [`cancel`].
pub async fn complete(state: &AppState, id: Uuid) -> Result<Appointment, AppointmentError> {
    set_status(state, id, AppointmentStatus::Completed).await
}

async fn set_status(
    state: &AppState,
    id: Uuid,
    to: AppointmentStatus,
) -> Result<Appointment, AppointmentError> {
    let mut directory = state.directory.write().await;
    let appointment = directory
        .appointments
        .iter_mut()
        .find(|appointment| appointment.id == id)
        .ok_or(AppointmentError::NotFound(id))?;
    transition(appointment, to)?;
    info!(appointment_id = %id, status = ?appointment.status, "appointment status changed");
    Ok(appointment.clone())
}

#[cfg(test)]
#[path = "appointment_test.rs"]
mod tests;
