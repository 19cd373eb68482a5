//! Invoicing service — line-item totals and the Draft → Sent → Paid
//! lifecycle. Overdue is never stored; it is computed against the due
//! date when listing.

use serde::Serialize;
use time::{Date, OffsetDateTime};
use tracing::info;
use uuid::Uuid;

use crate::models::{Invoice, InvoiceStatus, NewInvoice};
use crate::services::sale::round_cents;
use crate::state::AppState;

const DEFAULT_TAX_RATE: f64 = 0.0;

#[derive(Debug, thiserror::Error)]
pub enum InvoiceError {
    #[error("invoice not found: {0}")]
    NotFound(Uuid),
    #[error("customer not found: {0}")]
    CustomerNotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("invoice is {from:?}, cannot transition to {to:?}")]
    InvalidTransition { from: InvoiceStatus, to: InvoiceStatus },
}

impl crate::error::ErrorCode for InvoiceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_INVOICE_NOT_FOUND",
            Self::CustomerNotFound(_) => "E_CUSTOMER_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
            Self::InvalidTransition { .. } => "E_INVALID_TRANSITION",
        }
    }
}

/// Invoice with derived amounts and display status.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceView {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
    /// `Overdue` for Sent invoices past due, otherwise the stored status.
    pub display_status: InvoiceStatus,
}

// =============================================================================
// DERIVATION
// =============================================================================

pub(crate) fn subtotal_of(invoice: &Invoice) -> f64 {
    round_cents(
        invoice
            .lines
            .iter()
            .map(|line| f64::from(line.quantity) * line.unit_price)
            .sum(),
    )
}

pub(crate) fn totals_of(invoice: &Invoice) -> (f64, f64, f64) {
    let subtotal = subtotal_of(invoice);
    let tax = round_cents(subtotal * invoice.tax_rate / 100.0);
    (subtotal, tax, round_cents(subtotal + tax))
}

/// Display status as of `today`.
pub(crate) fn effective_status(invoice: &Invoice, today: Date) -> InvoiceStatus {
    if invoice.status == InvoiceStatus::Sent && invoice.due_on < today {
        InvoiceStatus::Overdue
    } else {
        invoice.status
    }
}

fn view_of(invoice: Invoice, today: Date) -> InvoiceView {
    let (subtotal, tax, total) = totals_of(&invoice);
    let display_status = effective_status(&invoice, today);
    InvoiceView { invoice, subtotal, tax, total, display_status }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Create a draft invoice with derived totals.
///
/// # Errors
///
/// Returns `CustomerNotFound` for an unknown customer; `Validation` when
/// there are no lines or a line is malformed.
pub async fn create_invoice(state: &AppState, new: NewInvoice) -> Result<InvoiceView, InvoiceError> {
    if new.lines.is_empty() {
        return Err(InvoiceError::Validation("an invoice needs at least one line".into()));
    }
    for line in &new.lines {
        if line.description.trim().is_empty() {
            return Err(InvoiceError::Validation("line description cannot be blank".into()));
        }
        if line.quantity == 0 {
            return Err(InvoiceError::Validation("line quantity must be at least 1".into()));
        }
        if line.unit_price < 0.0 {
            return Err(InvoiceError::Validation("unit price cannot be negative".into()));
        }
    }

    let today = OffsetDateTime::now_utc().date();
    let issued_on = new.issued_on.unwrap_or(today);
    if new.due_on < issued_on {
        return Err(InvoiceError::Validation("due date is before the issue date".into()));
    }

    let mut directory = state.directory.write().await;
    if directory.customer(new.customer_id).is_none() {
        return Err(InvoiceError::CustomerNotFound(new.customer_id));
    }

    let number = directory.next_invoice_number(issued_on.year());
    let invoice = Invoice {
        id: Uuid::new_v4(),
        number,
        customer_id: new.customer_id,
        lines: new.lines,
        tax_rate: new.tax_rate.unwrap_or(DEFAULT_TAX_RATE),
        issued_on,
        due_on: new.due_on,
        status: InvoiceStatus::Draft,
    };
    directory.invoices.push(invoice.clone());
    info!(invoice_id = %invoice.id, number = %invoice.number, "invoice created");
    Ok(view_of(invoice, today))
}

/// List invoices with derived totals and display status.
pub async fn list_invoices(state: &AppState) -> Vec<InvoiceView> {
    let today = OffsetDateTime::now_utc().date();
    let directory = state.directory.read().await;
    directory
        .invoices
        .iter()
        .cloned()
        .map(|invoice| view_of(invoice, today))
        .collect()
}

/// Fetch one invoice by id.
///
/// # Errors
///
/// Returns `NotFound` if no invoice has that id.
pub async fn get_invoice(state: &AppState, id: Uuid) -> Result<InvoiceView, InvoiceError> {
    let today = OffsetDateTime::now_utc().date();
    let directory = state.directory.read().await;
    directory
        .invoices
        .iter()
        .find(|invoice| invoice.id == id)
        .cloned()
        .map(|invoice| view_of(invoice, today))
        .ok_or(InvoiceError::NotFound(id))
}

/// Issue a draft invoice (Draft → Sent).
///
/// # Errors
///
/// `NotFound` or `InvalidTransition`.
pub async fn send_invoice(state: &AppState, id: Uuid) -> Result<InvoiceView, InvoiceError> {
    transition(state, id, InvoiceStatus::Draft, InvoiceStatus::Sent).await
}

/// Settle a sent invoice (Sent → Paid).
///
/// # Errors
///
/// `NotFound` or `InvalidTransition`.
pub async fn mark_paid(state: &AppState, id: Uuid) -> Result<InvoiceView, InvoiceError> {
    transition(state, id, InvoiceStatus::Sent, InvoiceStatus::Paid).await
}

async fn transition(
    state: &AppState,
    id: Uuid,
    from: InvoiceStatus,
    to: InvoiceStatus,
) -> Result<InvoiceView, InvoiceError> {
    let today = OffsetDateTime::now_utc().date();
    let mut directory = state.directory.write().await;
    let invoice = directory
        .invoices
        .iter_mut()
        .find(|invoice| invoice.id == id)
        .ok_or(InvoiceError::NotFound(id))?;
    if invoice.status != from {
        return Err(InvoiceError::InvalidTransition { from: invoice.status, to });
    }
    invoice.status = to;
    info!(invoice_id = %id, status = ?to, "invoice status changed");
    Ok(view_of(invoice.clone(), today))
}

#[cfg(test)]
#[path = "invoice_test.rs"]
mod tests;
