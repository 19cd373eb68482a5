use super::*;
use crate::models::WatchStatus;

#[test]
fn not_found_errors_map_to_404() {
    let err = SaleError::SaleNotFound(Uuid::nil());
    assert_eq!(sale_error_response(&err).status, StatusCode::NOT_FOUND);
    let err = SaleError::CustomerNotFound(Uuid::nil());
    assert_eq!(sale_error_response(&err).status, StatusCode::NOT_FOUND);
}

#[test]
fn unavailable_watch_maps_to_conflict() {
    let err = SaleError::WatchUnavailable { id: Uuid::nil(), status: WatchStatus::Sold };
    assert_eq!(sale_error_response(&err).status, StatusCode::CONFLICT);
}

#[test]
fn form_failures_map_to_unprocessable() {
    let err = SaleError::InvalidNumber { field: "subtotal", value: "abc".into() };
    assert_eq!(sale_error_response(&err).status, StatusCode::UNPROCESSABLE_ENTITY);
    let err = SaleError::UnbalancedPayments { difference: -10.0 };
    assert_eq!(sale_error_response(&err).status, StatusCode::UNPROCESSABLE_ENTITY);
    let err = SaleError::Validation("bad".into());
    assert_eq!(sale_error_response(&err).status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn error_body_carries_code_and_message() {
    let err = SaleError::UnbalancedPayments { difference: -250.0 };
    let api = sale_error_response(&err);
    assert_eq!(api.code, "E_UNBALANCED_PAYMENTS");
    assert!(api.message.contains("-250.00"));
}
