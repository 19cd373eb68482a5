//! Customer routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::{Customer, CustomerPatch, NewCustomer};
use crate::routes::ApiError;
use crate::services::customer::{self, CustomerError, CustomerProfile, Page};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CustomerListQuery {
    /// Search over name/email/phone.
    pub q: Option<String>,
    /// 1-based page.
    pub page: Option<usize>,
}

pub(crate) fn customer_error_response(err: &CustomerError) -> ApiError {
    let status = match err {
        CustomerError::NotFound(_) => StatusCode::NOT_FOUND,
        CustomerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    ApiError::from_err(status, err)
}

/// `GET /api/customers` — search + paged list.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CustomerListQuery>,
) -> Json<Page<Customer>> {
    let page = customer::list_customers(&state, query.q.as_deref(), query.page.unwrap_or(1)).await;
    Json(page)
}

/// `POST /api/customers` — the inline "create new" form.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewCustomer>,
) -> Result<(StatusCode, Json<Customer>), ApiError> {
    let created = customer::add_customer(&state, body)
        .await
        .map_err(|err| customer_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/customers/:id` — fetch one customer.
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Customer>, ApiError> {
    let found = customer::get_customer(&state, id)
        .await
        .map_err(|err| customer_error_response(&err))?;
    Ok(Json(found))
}

/// `PATCH /api/customers/:id` — partial update.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CustomerPatch>,
) -> Result<Json<Customer>, ApiError> {
    let updated = customer::update_customer(&state, id, body)
        .await
        .map_err(|err| customer_error_response(&err))?;
    Ok(Json(updated))
}

/// `GET /api/customers/:id/profile` — record plus joined history.
pub async fn profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CustomerProfile>, ApiError> {
    let profile = customer::customer_profile(&state, id)
        .await
        .map_err(|err| customer_error_response(&err))?;
    Ok(Json(profile))
}
