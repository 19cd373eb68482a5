use super::*;
use crate::state::test_helpers;

fn quote_input(subtotal: &str, discount: &str, tax_rate: &str, trade_in: &str) -> QuoteInput {
    QuoteInput {
        subtotal: subtotal.to_owned(),
        discount: discount.to_owned(),
        tax_rate: tax_rate.to_owned(),
        trade_in: trade_in.to_owned(),
    }
}

fn line(method: PaymentMethod, amount: f64) -> PaymentLine {
    PaymentLine { method, amount }
}

// =============================================================================
// QUOTES
// =============================================================================

#[test]
fn quote_applies_discount_then_tax_then_trade_in() {
    let quote = derive_quote(&quote_input("10000", "500", "8.25", "2000")).unwrap();
    assert!((quote.subtotal - 10_000.0).abs() < f64::EPSILON);
    assert!((quote.discount - 500.0).abs() < f64::EPSILON);
    // tax = 9500 * 8.25% = 783.75
    assert!((quote.tax - 783.75).abs() < 0.001);
    assert!((quote.total - 8_283.75).abs() < 0.001);
}

#[test]
fn quote_blank_fields_default_to_zero() {
    let quote = derive_quote(&quote_input("1200", "", "", "")).unwrap();
    assert!((quote.total - 1200.0).abs() < f64::EPSILON);
    assert!(quote.tax.abs() < f64::EPSILON);
}

#[test]
fn quote_rejects_non_numeric_field_by_name() {
    let err = derive_quote(&quote_input("abc", "", "", "")).unwrap_err();
    match err {
        SaleError::InvalidNumber { field, value } => {
            assert_eq!(field, "subtotal");
            assert_eq!(value, "abc");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn quote_rejects_negative_amounts() {
    let err = derive_quote(&quote_input("1000", "-50", "", "")).unwrap_err();
    assert!(matches!(err, SaleError::NegativeAmount { field: "discount" }));
}

#[test]
fn quote_rejects_discount_exceeding_subtotal() {
    let err = derive_quote(&quote_input("100", "150", "", "")).unwrap_err();
    assert!(matches!(err, SaleError::Validation(_)));
}

#[test]
fn quote_total_can_go_negative_on_large_trade_in() {
    // Exchange where the trade-in is worth more than the purchase.
    let quote = derive_quote(&quote_input("5000", "", "", "6500")).unwrap();
    assert!((quote.total - (-1500.0)).abs() < f64::EPSILON);
}

#[test]
fn quote_rounds_tax_to_cents() {
    let quote = derive_quote(&quote_input("99.99", "", "7", "")).unwrap();
    // 99.99 * 7% = 6.9993 -> 7.00
    assert!((quote.tax - 7.0).abs() < f64::EPSILON);
}

// =============================================================================
// BALANCING
// =============================================================================

#[test]
fn payments_summing_exactly_are_balanced() {
    let lines = vec![line(PaymentMethod::Card, 6000.0), line(PaymentMethod::Cash, 2283.75)];
    assert_eq!(balance_payments(&lines, 8283.75), Balance::Balanced);
}

#[test]
fn payments_within_epsilon_are_balanced() {
    let lines = vec![line(PaymentMethod::Card, 100.005)];
    assert_eq!(balance_payments(&lines, 100.0), Balance::Balanced);
}

#[test]
fn underpaid_carries_negative_signed_difference() {
    let lines = vec![line(PaymentMethod::Card, 90.0)];
    match balance_payments(&lines, 100.0) {
        Balance::Underpaid { difference } => assert!((difference - (-10.0)).abs() < 0.001),
        other => panic!("expected Underpaid, got {other:?}"),
    }
}

#[test]
fn overpaid_carries_positive_signed_difference() {
    let lines = vec![line(PaymentMethod::Cash, 120.5)];
    match balance_payments(&lines, 100.0) {
        Balance::Overpaid { difference } => assert!((difference - 20.5).abs() < 0.001),
        other => panic!("expected Overpaid, got {other:?}"),
    }
}

#[test]
fn no_payments_is_underpaid_by_the_full_total() {
    match balance_payments(&[], 250.0) {
        Balance::Underpaid { difference } => assert!((difference - (-250.0)).abs() < 0.001),
        other => panic!("expected Underpaid, got {other:?}"),
    }
}

// =============================================================================
// RECORDING
// =============================================================================

fn sell_sale(customer_id: Uuid, watch_id: Uuid, payments: Vec<PaymentLineInput>) -> NewSale {
    NewSale {
        kind: SaleKind::Sell,
        customer_id,
        watch_id,
        trade_in_watch_id: None,
        pricing: quote_input("10000", "", "", ""),
        payment_method: PaymentMethod::Card,
        payments,
        payment_status: None,
        notes: None,
    }
}

#[tokio::test]
async fn sell_marks_watch_sold_and_paid_when_balanced() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Buyer One").await;
    let watch = test_helpers::seed_watch(&state, "Rolex", "Submariner", 10_000.0).await;

    let payments = vec![
        PaymentLineInput { method: PaymentMethod::Card, amount: "7000".into() },
        PaymentLineInput { method: PaymentMethod::WireTransfer, amount: "3000".into() },
    ];
    let sale = record_sale(&state, sell_sale(customer.id, watch.id, payments))
        .await
        .unwrap();

    assert_eq!(sale.payment_status, PaymentStatus::Paid);
    assert!((sale.amount - 10_000.0).abs() < f64::EPSILON);

    let directory = state.directory.read().await;
    assert_eq!(directory.watch(watch.id).unwrap().status, WatchStatus::Sold);
    assert_eq!(directory.sales.len(), 1);
}

#[tokio::test]
async fn unbalanced_payments_are_rejected_and_nothing_is_recorded() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Buyer Two").await;
    let watch = test_helpers::seed_watch(&state, "Omega", "Seamaster", 6_000.0).await;

    let payments = vec![PaymentLineInput { method: PaymentMethod::Card, amount: "9000".into() }];
    let err = record_sale(&state, sell_sale(customer.id, watch.id, payments))
        .await
        .unwrap_err();
    match err {
        SaleError::UnbalancedPayments { difference } => assert!((difference - (-1000.0)).abs() < 0.001),
        other => panic!("expected UnbalancedPayments, got {other:?}"),
    }

    let directory = state.directory.read().await;
    assert!(directory.sales.is_empty());
    assert_eq!(directory.watch(watch.id).unwrap().status, WatchStatus::InStock);
}

#[tokio::test]
async fn sale_without_payments_defaults_to_pending() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Buyer Three").await;
    let watch = test_helpers::seed_watch(&state, "Tudor", "Pelagos", 4_500.0).await;

    let sale = record_sale(&state, sell_sale(customer.id, watch.id, Vec::new()))
        .await
        .unwrap();
    assert_eq!(sale.payment_status, PaymentStatus::Pending);
}

#[tokio::test]
async fn selling_an_already_sold_watch_is_unavailable() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Buyer Four").await;
    let watch = test_helpers::seed_watch(&state, "Rolex", "Daytona", 32_000.0).await;

    record_sale(&state, sell_sale(customer.id, watch.id, Vec::new()))
        .await
        .unwrap();
    let err = record_sale(&state, sell_sale(customer.id, watch.id, Vec::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SaleError::WatchUnavailable { status: WatchStatus::Sold, .. }));
}

#[tokio::test]
async fn exchange_requires_and_intakes_the_trade_in() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Trader").await;
    let bought = test_helpers::seed_watch(&state, "Patek Philippe", "Calatrava", 28_000.0).await;
    let traded = test_helpers::seed_watch(&state, "Rolex", "Explorer", 0.0).await;
    {
        // Trade-in arrives as an on-order intake record.
        let mut directory = state.directory.write().await;
        directory.watch_mut(traded.id).unwrap().status = WatchStatus::OnOrder;
    }

    let missing = NewSale {
        kind: SaleKind::Exchange,
        customer_id: customer.id,
        watch_id: bought.id,
        trade_in_watch_id: None,
        pricing: quote_input("28000", "", "", "8000"),
        payment_method: PaymentMethod::WireTransfer,
        payments: Vec::new(),
        payment_status: None,
        notes: None,
    };
    assert!(matches!(
        record_sale(&state, missing.clone()).await.unwrap_err(),
        SaleError::Validation(_)
    ));

    let sale = record_sale(
        &state,
        NewSale { trade_in_watch_id: Some(traded.id), ..missing },
    )
    .await
    .unwrap();
    assert!((sale.amount - 20_000.0).abs() < f64::EPSILON);

    let directory = state.directory.read().await;
    assert_eq!(directory.watch(bought.id).unwrap().status, WatchStatus::Sold);
    assert_eq!(directory.watch(traded.id).unwrap().status, WatchStatus::InStock);
}

#[tokio::test]
async fn trade_in_on_a_plain_sell_is_rejected() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Confused").await;
    let watch = test_helpers::seed_watch(&state, "Omega", "De Ville", 3_000.0).await;
    let other = test_helpers::seed_watch(&state, "Seiko", "Presage", 400.0).await;

    let mut new = sell_sale(customer.id, watch.id, Vec::new());
    new.trade_in_watch_id = Some(other.id);
    assert!(matches!(
        record_sale(&state, new).await.unwrap_err(),
        SaleError::Validation(_)
    ));
}

#[tokio::test]
async fn buy_marks_the_intake_record_in_stock() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Seller").await;
    let intake = test_helpers::seed_watch(&state, "Cartier", "Tank", 5_500.0).await;
    {
        let mut directory = state.directory.write().await;
        directory.watch_mut(intake.id).unwrap().status = WatchStatus::OnOrder;
    }

    let mut new = sell_sale(customer.id, intake.id, Vec::new());
    new.kind = SaleKind::Buy;
    record_sale(&state, new).await.unwrap();

    let directory = state.directory.read().await;
    assert_eq!(directory.watch(intake.id).unwrap().status, WatchStatus::InStock);
}

#[tokio::test]
async fn unknown_customer_and_watch_are_reported() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Real").await;
    let watch = test_helpers::seed_watch(&state, "Rolex", "Datejust", 9_000.0).await;

    let err = record_sale(&state, sell_sale(Uuid::new_v4(), watch.id, Vec::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SaleError::CustomerNotFound(_)));

    let err = record_sale(&state, sell_sale(customer.id, Uuid::new_v4(), Vec::new()))
        .await
        .unwrap_err();
    assert!(matches!(err, SaleError::WatchNotFound(_)));
}

#[tokio::test]
async fn summary_labels_customer_and_watch() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Margaux Petit").await;
    let watch = test_helpers::seed_watch(&state, "Rolex", "Submariner", 10_000.0).await;

    let sale = record_sale(&state, sell_sale(customer.id, watch.id, Vec::new()))
        .await
        .unwrap();
    let summary = sale_summary(&state, sale.id).await.unwrap();
    assert_eq!(summary.customer_name, "Margaux Petit");
    assert!(summary.watch_label.starts_with("Rolex Submariner"));
    assert!(summary.trade_in_label.is_none());

    let missing = sale_summary(&state, Uuid::new_v4()).await;
    assert!(matches!(missing.unwrap_err(), SaleError::SaleNotFound(_)));
}
