//! Invoicing routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::models::NewInvoice;
use crate::routes::ApiError;
use crate::services::invoice::{self, InvoiceError, InvoiceView};
use crate::state::AppState;

pub(crate) fn invoice_error_response(err: &InvoiceError) -> ApiError {
    let status = match err {
        InvoiceError::NotFound(_) | InvoiceError::CustomerNotFound(_) => StatusCode::NOT_FOUND,
        InvoiceError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        InvoiceError::InvalidTransition { .. } => StatusCode::CONFLICT,
    };
    ApiError::from_err(status, err)
}

/// `GET /api/invoices` — all invoices with derived totals.
pub async fn list(State(state): State<AppState>) -> Json<Vec<InvoiceView>> {
    Json(invoice::list_invoices(&state).await)
}

/// `POST /api/invoices` — create a draft invoice.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewInvoice>,
) -> Result<(StatusCode, Json<InvoiceView>), ApiError> {
    let created = invoice::create_invoice(&state, body)
        .await
        .map_err(|err| invoice_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/invoices/:id` — fetch one invoice.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceView>, ApiError> {
    let found = invoice::get_invoice(&state, id)
        .await
        .map_err(|err| invoice_error_response(&err))?;
    Ok(Json(found))
}

/// `POST /api/invoices/:id/send` — issue a draft.
pub async fn send(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceView>, ApiError> {
    let sent = invoice::send_invoice(&state, id)
        .await
        .map_err(|err| invoice_error_response(&err))?;
    Ok(Json(sent))
}

/// `POST /api/invoices/:id/pay` — settle a sent invoice.
pub async fn mark_paid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InvoiceView>, ApiError> {
    let paid = invoice::mark_paid(&state, id)
        .await
        .map_err(|err| invoice_error_response(&err))?;
    Ok(Json(paid))
}
