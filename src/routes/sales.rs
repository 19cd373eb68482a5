//! Sales routes — quote preview, recording, completion summary.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Sale;
use crate::routes::ApiError;
use crate::services::sale::{
    self, Balance, NewSale, PaymentLineInput, Quote, QuoteInput, SaleError, SaleSummary,
};
use crate::state::AppState;

pub(crate) fn sale_error_response(err: &SaleError) -> ApiError {
    let status = match err {
        SaleError::SaleNotFound(_) | SaleError::CustomerNotFound(_) | SaleError::WatchNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        SaleError::WatchUnavailable { .. } => StatusCode::CONFLICT,
        SaleError::InvalidNumber { .. }
        | SaleError::NegativeAmount { .. }
        | SaleError::UnbalancedPayments { .. }
        | SaleError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    ApiError::from_err(status, err)
}

#[derive(Deserialize)]
pub struct QuoteRequest {
    pub pricing: QuoteInput,
    #[serde(default)]
    pub payments: Vec<PaymentLineInput>,
}

#[derive(Serialize)]
pub struct QuoteResponse {
    pub quote: Quote,
    /// Balance of the entered payment lines against the derived total.
    pub balance: Balance,
}

/// `POST /api/sales/quote` — the form's live total + balance preview.
pub async fn quote(Json(body): Json<QuoteRequest>) -> Result<Json<QuoteResponse>, ApiError> {
    let quote = sale::derive_quote(&body.pricing).map_err(|err| sale_error_response(&err))?;
    let lines = sale::parse_payment_lines(&body.payments).map_err(|err| sale_error_response(&err))?;
    let balance = sale::balance_payments(&lines, quote.total);
    Ok(Json(QuoteResponse { quote, balance }))
}

/// `POST /api/sales` — record a buy/sell/exchange transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewSale>,
) -> Result<(StatusCode, Json<Sale>), ApiError> {
    let sale = sale::record_sale(&state, body)
        .await
        .map_err(|err| sale_error_response(&err))?;
    Ok((StatusCode::CREATED, Json(sale)))
}

/// `GET /api/sales` — all recorded sales.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Sale>> {
    Json(sale::list_sales(&state).await)
}

/// `GET /api/sales/:id/summary` — the transaction-complete view.
pub async fn summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SaleSummary>, ApiError> {
    let summary = sale::sale_summary(&state, id)
        .await
        .map_err(|err| sale_error_response(&err))?;
    Ok(Json(summary))
}

#[cfg(test)]
#[path = "sales_test.rs"]
mod tests;
