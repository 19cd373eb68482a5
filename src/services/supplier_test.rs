use super::*;
use crate::models::SupplierType;
use crate::state::test_helpers;

fn new_supplier(name: &str) -> NewSupplier {
    NewSupplier {
        name: name.to_owned(),
        supplier_type: SupplierType::AuthorizedDealer,
        contact_name: Some("Jean Favre".to_owned()),
        email: Some("jean@example.com".to_owned()),
        phone: None,
    }
}

#[tokio::test]
async fn add_and_get_supplier() {
    let state = test_helpers::test_app_state();
    let created = add_supplier(&state, new_supplier("Geneva Horology SA")).await.unwrap();
    assert_eq!(created.status, SupplierStatus::Active);

    let fetched = get_supplier(&state, created.id).await.unwrap();
    assert_eq!(fetched.name, "Geneva Horology SA");
}

#[tokio::test]
async fn add_supplier_rejects_blank_name() {
    let state = test_helpers::test_app_state();
    let result = add_supplier(&state, new_supplier("  ")).await;
    assert!(matches!(result.unwrap_err(), SupplierError::Validation(_)));
}

#[tokio::test]
async fn search_filters_by_name_and_contact() {
    let state = test_helpers::test_app_state();
    add_supplier(&state, new_supplier("Geneva Horology SA")).await.unwrap();
    add_supplier(&state, new_supplier("Basel Parts GmbH")).await.unwrap();

    let by_name = list_suppliers(&state, Some("geneva")).await;
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].name, "Geneva Horology SA");

    // Contact name matches both records.
    let by_contact = list_suppliers(&state, Some("favre")).await;
    assert_eq!(by_contact.len(), 2);
}

#[tokio::test]
async fn delete_supplier_filters_the_collection() {
    let state = test_helpers::test_app_state();
    let keep = add_supplier(&state, new_supplier("Keep Me")).await.unwrap();
    let drop = add_supplier(&state, new_supplier("Drop Me")).await.unwrap();

    delete_supplier(&state, drop.id).await.unwrap();
    let remaining = list_suppliers(&state, None).await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    // Deleting again reports not found.
    let again = delete_supplier(&state, drop.id).await;
    assert!(matches!(again.unwrap_err(), SupplierError::NotFound(_)));
}

#[tokio::test]
async fn update_supplier_marks_inactive() {
    let state = test_helpers::test_app_state();
    let supplier = add_supplier(&state, new_supplier("Dormant Co")).await.unwrap();
    let updated = update_supplier(
        &state,
        supplier.id,
        SupplierPatch { status: Some(SupplierStatus::Inactive), ..SupplierPatch::default() },
    )
    .await
    .unwrap();
    assert_eq!(updated.status, SupplierStatus::Inactive);
}
