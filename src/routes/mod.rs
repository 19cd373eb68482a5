//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router binds every screen's REST surface: customers,
//! inventory, suppliers, sales, repairs, kanban, appointments,
//! invoices, team, dashboard, uploads. Service errors are translated
//! into JSON error bodies carrying a grepable code and the message the
//! screen would have shown as a toast.

pub mod appointments;
pub mod customers;
pub mod dashboard;
pub mod invoices;
pub mod kanban;
pub mod repairs;
pub mod sales;
pub mod suppliers;
pub mod team;
pub mod uploads;
pub mod watches;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, patch, post};
use tower_http::cors::{Any, CorsLayer};

use crate::error::ErrorCode;
use crate::state::AppState;

// =============================================================================
// ERROR RESPONSES
// =============================================================================

/// JSON error response: HTTP status plus `{ code, message }`.
#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    pub(crate) fn from_err<E: ErrorCode>(status: StatusCode, err: &E) -> Self {
        Self { status, code: err.error_code(), message: err.to_string() }
    }

    /// Request-shape failures caught in the handler itself (bad query
    /// parameter values and the like).
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self { status: StatusCode::UNPROCESSABLE_ENTITY, code: "E_VALIDATION", message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "code": self.code, "message": self.message })),
        )
            .into_response()
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/customers", get(customers::list).post(customers::create))
        .route(
            "/api/customers/{id}",
            get(customers::get_one).patch(customers::update),
        )
        .route("/api/customers/{id}/profile", get(customers::profile))
        .route("/api/watches", get(watches::list).post(watches::create))
        .route("/api/watches/{id}", get(watches::get_one).patch(watches::update))
        .route("/api/suppliers", get(suppliers::list).post(suppliers::create))
        .route(
            "/api/suppliers/{id}",
            get(suppliers::get_one)
                .patch(suppliers::update)
                .delete(suppliers::delete_one),
        )
        .route("/api/sales", get(sales::list).post(sales::create))
        .route("/api/sales/quote", post(sales::quote))
        .route("/api/sales/{id}/summary", get(sales::summary))
        .route("/api/repairs", get(repairs::list).post(repairs::create))
        .route("/api/repairs/{id}", get(repairs::get_one).patch(repairs::update))
        .route("/api/repairs/{id}/notes", post(repairs::add_note))
        .route("/api/kanban/cards", get(kanban::board).post(kanban::create))
        .route("/api/kanban/cards/{id}", delete(kanban::delete_one))
        .route("/api/kanban/cards/{id}/move", post(kanban::move_card))
        .route(
            "/api/appointments",
            get(appointments::list).post(appointments::create),
        )
        .route("/api/appointments/upcoming", get(appointments::upcoming))
        .route("/api/appointments/{id}/cancel", post(appointments::cancel))
        .route("/api/appointments/{id}/complete", post(appointments::complete))
        .route("/api/invoices", get(invoices::list).post(invoices::create))
        .route("/api/invoices/{id}", get(invoices::get_one))
        .route("/api/invoices/{id}/send", post(invoices::send))
        .route("/api/invoices/{id}/pay", post(invoices::mark_paid))
        .route("/api/team", get(team::list).post(team::create))
        .route("/api/team/{id}", patch(team::update))
        .route("/api/team/{id}/deactivate", post(team::deactivate))
        .route("/api/dashboard/summary", get(dashboard::summary))
        .route("/api/uploads", post(uploads::create))
        .route("/api/uploads/{id}", get(uploads::get_one).delete(uploads::delete_one))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
