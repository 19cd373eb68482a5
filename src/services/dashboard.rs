//! Dashboard summary — aggregate counts over the directory.

use serde::Serialize;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::models::{AppointmentStatus, RepairStatus, Sale, SaleKind, WatchStatus};
use crate::services::sale::round_cents;
use crate::state::AppState;

const RECENT_SALES_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct SaleDigest {
    pub id: Uuid,
    pub kind: SaleKind,
    pub customer_name: String,
    pub amount: f64,
    pub date: Date,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub customers: usize,
    pub watches_in_stock: usize,
    /// Repairs not yet delivered.
    pub open_repairs: usize,
    pub upcoming_appointments: usize,
    /// Sell-side revenue for the current calendar month.
    pub month_revenue: f64,
    pub recent_sales: Vec<SaleDigest>,
}

/// Sell-side revenue (sell + exchange) for `today`'s calendar month.
pub(crate) fn month_revenue(sales: &[Sale], today: Date) -> f64 {
    round_cents(
        sales
            .iter()
            .filter(|sale| sale.kind != SaleKind::Buy)
            .filter(|sale| sale.date.year() == today.year() && sale.date.month() == today.month())
            .map(|sale| sale.amount)
            .sum(),
    )
}

/// Build the dashboard summary.
pub async fn summary(state: &AppState) -> DashboardSummary {
    let now = OffsetDateTime::now_utc();
    let today = now.date();
    let directory = state.directory.read().await;

    let watches_in_stock = directory
        .watches
        .iter()
        .filter(|watch| watch.status == WatchStatus::InStock)
        .count();
    let open_repairs = directory
        .repairs
        .iter()
        .filter(|repair| repair.status != RepairStatus::Delivered)
        .count();
    let upcoming_appointments = directory
        .appointments
        .iter()
        .filter(|appointment| {
            appointment.status == AppointmentStatus::Scheduled && appointment.scheduled_at >= now
        })
        .count();

    let recent_sales = directory
        .sales
        .iter()
        .rev()
        .take(RECENT_SALES_LIMIT)
        .map(|sale| SaleDigest {
            id: sale.id,
            kind: sale.kind,
            customer_name: directory
                .customer(sale.customer_id)
                .map_or_else(|| "Unknown customer".to_owned(), |customer| customer.name.clone()),
            amount: sale.amount,
            date: sale.date,
        })
        .collect();

    DashboardSummary {
        customers: directory.customers.len(),
        watches_in_stock,
        open_repairs,
        upcoming_appointments,
        month_revenue: month_revenue(&directory.sales, today),
        recent_sales,
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
