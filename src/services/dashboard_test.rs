use time::macros::date;

use super::*;
use crate::models::{PaymentMethod, PaymentStatus};
use crate::state::test_helpers;

fn sale(kind: SaleKind, amount: f64, date: Date) -> Sale {
    Sale {
        id: Uuid::new_v4(),
        kind,
        customer_id: Uuid::new_v4(),
        watch_id: Uuid::new_v4(),
        trade_in_watch_id: None,
        amount,
        payment_method: PaymentMethod::Card,
        payment_status: PaymentStatus::Paid,
        payments: Vec::new(),
        notes: None,
        date,
    }
}

#[test]
fn month_revenue_sums_sell_side_for_the_current_month_only() {
    let sales = vec![
        sale(SaleKind::Sell, 10_000.0, date!(2026 - 08 - 02)),
        sale(SaleKind::Exchange, 4_000.0, date!(2026 - 08 - 15)),
        sale(SaleKind::Buy, 9_999.0, date!(2026 - 08 - 10)),  // buy-side, excluded
        sale(SaleKind::Sell, 7_500.0, date!(2026 - 07 - 30)), // last month
        sale(SaleKind::Sell, 1_200.0, date!(2025 - 08 - 10)), // same month, last year
    ];
    let revenue = month_revenue(&sales, date!(2026 - 08 - 20));
    assert!((revenue - 14_000.0).abs() < 0.001);
}

#[test]
fn month_revenue_of_no_sales_is_zero() {
    assert!(month_revenue(&[], date!(2026 - 08 - 20)).abs() < f64::EPSILON);
}

#[tokio::test]
async fn summary_counts_reflect_the_directory() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Counted").await;
    test_helpers::seed_watch(&state, "Rolex", "Submariner", 14_000.0).await;
    let sold = test_helpers::seed_watch(&state, "Omega", "Speedmaster", 7_000.0).await;
    {
        let mut directory = state.directory.write().await;
        directory.watch_mut(sold.id).unwrap().status = crate::models::WatchStatus::Sold;
    }
    let repair = test_helpers::seed_repair(&state, customer.id, "Tudor", "Black Bay").await;
    {
        // A delivered repair is closed and must not count as open.
        let mut directory = state.directory.write().await;
        directory.repair_mut(repair.id).unwrap().status = RepairStatus::Delivered;
    }
    test_helpers::seed_repair(&state, customer.id, "Omega", "De Ville").await;

    let summary = summary(&state).await;
    assert_eq!(summary.customers, 1);
    assert_eq!(summary.watches_in_stock, 1);
    assert_eq!(summary.open_repairs, 1);
    assert_eq!(summary.upcoming_appointments, 0);
    assert!(summary.recent_sales.is_empty());
}

#[tokio::test]
async fn recent_sales_are_newest_first_and_capped() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Collector").await;
    {
        let mut directory = state.directory.write().await;
        for index in 0..7 {
            let mut s = sale(SaleKind::Sell, f64::from(index) * 100.0, date!(2026 - 08 - 01));
            s.customer_id = customer.id;
            directory.sales.push(s);
        }
    }

    let summary = summary(&state).await;
    assert_eq!(summary.recent_sales.len(), 5);
    // Last pushed sale (amount 600) comes first.
    assert!((summary.recent_sales[0].amount - 600.0).abs() < f64::EPSILON);
    assert_eq!(summary.recent_sales[0].customer_name, "Collector");
}
