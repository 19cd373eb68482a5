//! Sales service — quote derivation, split-payment balancing, and
//! transaction recording for the buy/sell/exchange forms.
//!
//! DESIGN
//! ======
//! Pricing fields arrive as the user typed them (numeric strings), so
//! parsing failures are validation errors naming the field. The derived
//! total is `(subtotal - discount) + tax - trade_in`, rounded to cents.
//! Split payments must balance against the total within 0.01; the
//! balance result carries the signed difference (paid - total) so the
//! form can show Underpaid/Overpaid amounts.

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::models::{
    PaymentLine, PaymentMethod, PaymentStatus, Sale, SaleKind, WatchStatus,
};
use crate::state::AppState;

/// Deviation tolerated between split payments and the total.
pub const PAYMENT_EPSILON: f64 = 0.01;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SaleError {
    #[error("sale not found: {0}")]
    SaleNotFound(Uuid),
    #[error("customer not found: {0}")]
    CustomerNotFound(Uuid),
    #[error("watch not found: {0}")]
    WatchNotFound(Uuid),
    #[error("watch {id} is not available ({})", .status.as_str())]
    WatchUnavailable { id: Uuid, status: WatchStatus },
    #[error("{field} is not a number: '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} cannot be negative")]
    NegativeAmount { field: &'static str },
    #[error("payments do not balance (difference {difference:+.2})")]
    UnbalancedPayments { difference: f64 },
    #[error("validation failed: {0}")]
    Validation(String),
}

impl crate::error::ErrorCode for SaleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SaleNotFound(_) => "E_SALE_NOT_FOUND",
            Self::CustomerNotFound(_) => "E_CUSTOMER_NOT_FOUND",
            Self::WatchNotFound(_) => "E_WATCH_NOT_FOUND",
            Self::WatchUnavailable { .. } => "E_WATCH_UNAVAILABLE",
            Self::InvalidNumber { .. } | Self::NegativeAmount { .. } => "E_INVALID_AMOUNT",
            Self::UnbalancedPayments { .. } => "E_UNBALANCED_PAYMENTS",
            Self::Validation(_) => "E_VALIDATION",
        }
    }
}

/// Pricing fields as entered in the form. Blank means zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuoteInput {
    #[serde(default)]
    pub subtotal: String,
    #[serde(default)]
    pub discount: String,
    /// Percent, e.g. `"8.25"`.
    #[serde(default)]
    pub tax_rate: String,
    #[serde(default)]
    pub trade_in: String,
}

/// Derived pricing, all amounts rounded to cents.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quote {
    pub subtotal: f64,
    pub discount: f64,
    pub tax: f64,
    pub trade_in: f64,
    pub total: f64,
}

/// One split-payment line as entered in the form.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLineInput {
    pub method: PaymentMethod,
    pub amount: String,
}

/// Result of balancing split payments against a total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Balance {
    Balanced,
    Underpaid { difference: f64 },
    Overpaid { difference: f64 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSale {
    pub kind: SaleKind,
    pub customer_id: Uuid,
    pub watch_id: Uuid,
    pub trade_in_watch_id: Option<Uuid>,
    pub pricing: QuoteInput,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payments: Vec<PaymentLineInput>,
    /// Explicit status for sales recorded without payment lines.
    pub payment_status: Option<PaymentStatus>,
    pub notes: Option<String>,
}

/// The transaction-complete view: sale plus display labels.
#[derive(Debug, Clone, Serialize)]
pub struct SaleSummary {
    pub sale: Sale,
    pub customer_name: String,
    pub watch_label: String,
    pub trade_in_label: Option<String>,
}

// =============================================================================
// PRICING
// =============================================================================

pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn parse_amount(field: &'static str, raw: &str) -> Result<f64, SaleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| SaleError::InvalidNumber { field, value: raw.to_owned() })?;
    if value < 0.0 {
        return Err(SaleError::NegativeAmount { field });
    }
    Ok(value)
}

/// Derive the quote from user-entered pricing fields.
///
/// # Errors
///
/// Returns `InvalidNumber`/`NegativeAmount` for unparseable fields, and
/// `Validation` when the discount exceeds the subtotal.
pub fn derive_quote(input: &QuoteInput) -> Result<Quote, SaleError> {
    let subtotal = parse_amount("subtotal", &input.subtotal)?;
    let discount = parse_amount("discount", &input.discount)?;
    let tax_rate = parse_amount("tax_rate", &input.tax_rate)?;
    let trade_in = parse_amount("trade_in", &input.trade_in)?;

    if discount > subtotal {
        return Err(SaleError::Validation("discount exceeds subtotal".into()));
    }

    let taxable = subtotal - discount;
    let tax = round_cents(taxable * tax_rate / 100.0);
    let total = round_cents(taxable + tax - trade_in);

    Ok(Quote { subtotal, discount, tax, trade_in, total })
}

/// Balance payment lines against the target total.
#[must_use]
pub fn balance_payments(lines: &[PaymentLine], total: f64) -> Balance {
    let paid: f64 = lines.iter().map(|line| line.amount).sum();
    let difference = round_cents(paid - total);
    if (paid - total).abs() < PAYMENT_EPSILON {
        Balance::Balanced
    } else if difference < 0.0 {
        Balance::Underpaid { difference }
    } else {
        Balance::Overpaid { difference }
    }
}

pub(crate) fn parse_payment_lines(inputs: &[PaymentLineInput]) -> Result<Vec<PaymentLine>, SaleError> {
    inputs
        .iter()
        .map(|line| {
            let amount = parse_amount("payment amount", &line.amount)?;
            Ok(PaymentLine { method: line.method, amount })
        })
        .collect()
}

// =============================================================================
// RECORDING
// =============================================================================

/// Record a buy/sell/exchange transaction.
///
/// Validates referenced records, balances split payments when present,
/// and applies the inventory side effects: the sold watch is marked
/// Sold, a bought watch goes InStock, and an exchange intakes the
/// trade-in as InStock.
///
/// # Errors
///
/// Any pricing, balancing, reference, or availability failure above.
pub async fn record_sale(state: &AppState, new: NewSale) -> Result<Sale, SaleError> {
    let quote = derive_quote(&new.pricing)?;
    let payments = parse_payment_lines(&new.payments)?;

    let payment_status = if payments.is_empty() {
        new.payment_status.unwrap_or(PaymentStatus::Pending)
    } else {
        match balance_payments(&payments, quote.total) {
            Balance::Balanced => PaymentStatus::Paid,
            Balance::Underpaid { difference } | Balance::Overpaid { difference } => {
                return Err(SaleError::UnbalancedPayments { difference });
            }
        }
    };

    match (new.kind, new.trade_in_watch_id) {
        (SaleKind::Exchange, None) => {
            return Err(SaleError::Validation("an exchange needs a trade-in watch".into()));
        }
        (SaleKind::Buy | SaleKind::Sell, Some(_)) => {
            return Err(SaleError::Validation("trade-in watches only apply to exchanges".into()));
        }
        _ => {}
    }

    let mut directory = state.directory.write().await;

    if directory.customer(new.customer_id).is_none() {
        return Err(SaleError::CustomerNotFound(new.customer_id));
    }
    let watch_status = directory
        .watch(new.watch_id)
        .map(|watch| watch.status)
        .ok_or(SaleError::WatchNotFound(new.watch_id))?;
    if let Some(trade_in_id) = new.trade_in_watch_id
        && directory.watch(trade_in_id).is_none()
    {
        return Err(SaleError::WatchNotFound(trade_in_id));
    }

    match new.kind {
        SaleKind::Sell | SaleKind::Exchange => {
            if !matches!(watch_status, WatchStatus::InStock | WatchStatus::Reserved) {
                return Err(SaleError::WatchUnavailable { id: new.watch_id, status: watch_status });
            }
            if let Some(watch) = directory.watch_mut(new.watch_id) {
                watch.status = WatchStatus::Sold;
            }
        }
        SaleKind::Buy => {
            // The intake record created by the buy form becomes stock.
            if let Some(watch) = directory.watch_mut(new.watch_id) {
                watch.status = WatchStatus::InStock;
            }
        }
    }
    if let Some(trade_in_id) = new.trade_in_watch_id
        && let Some(trade_in) = directory.watch_mut(trade_in_id)
    {
        trade_in.status = WatchStatus::InStock;
    }

    let sale = Sale {
        id: Uuid::new_v4(),
        kind: new.kind,
        customer_id: new.customer_id,
        watch_id: new.watch_id,
        trade_in_watch_id: new.trade_in_watch_id,
        amount: quote.total,
        payment_method: new.payment_method,
        payment_status,
        payments,
        notes: new.notes,
        date: time::OffsetDateTime::now_utc().date(),
    };
    directory.sales.push(sale.clone());

    info!(
        sale_id = %sale.id,
        kind = sale.kind.as_str(),
        amount = sale.amount,
        "sale recorded"
    );
    Ok(sale)
}

/// List all sales in directory order.
pub async fn list_sales(state: &AppState) -> Vec<Sale> {
    let directory = state.directory.read().await;
    directory.sales.clone()
}

/// Build the completion summary for a recorded sale.
///
/// # Errors
///
/// Returns `SaleNotFound` if no sale has that id.
pub async fn sale_summary(state: &AppState, id: Uuid) -> Result<SaleSummary, SaleError> {
    let directory = state.directory.read().await;
    let sale = directory
        .sales
        .iter()
        .find(|sale| sale.id == id)
        .cloned()
        .ok_or(SaleError::SaleNotFound(id))?;

    let customer_name = directory
        .customer(sale.customer_id)
        .map_or_else(|| "Unknown customer".to_owned(), |customer| customer.name.clone());
    let watch_label = directory
        .watch(sale.watch_id)
        .map_or_else(|| "Unknown watch".to_owned(), watch_display);
    let trade_in_label = sale
        .trade_in_watch_id
        .and_then(|trade_in_id| directory.watch(trade_in_id).map(watch_display));

    Ok(SaleSummary { sale, customer_name, watch_label, trade_in_label })
}

fn watch_display(watch: &crate::models::Watch) -> String {
    format!("{} {} ({})", watch.brand, watch.model, watch.reference)
}

#[cfg(test)]
#[path = "sale_test.rs"]
mod tests;
