use super::*;

#[test]
fn watch_status_round_trips_through_strings() {
    for status in [WatchStatus::InStock, WatchStatus::Reserved, WatchStatus::Sold, WatchStatus::OnOrder] {
        assert_eq!(WatchStatus::from_str(status.as_str()), Some(status));
    }
    assert_eq!(WatchStatus::from_str("melted"), None);
}

#[test]
fn repair_status_has_seven_states_in_workflow_order() {
    let all = [
        RepairStatus::Received,
        RepairStatus::Diagnosing,
        RepairStatus::AwaitingParts,
        RepairStatus::InRepair,
        RepairStatus::QualityControl,
        RepairStatus::ReadyForPickup,
        RepairStatus::Delivered,
    ];
    for (index, status) in all.iter().enumerate() {
        assert_eq!(usize::from(status.rank()), index);
        assert_eq!(RepairStatus::from_str(status.as_str()), Some(*status));
    }
}

#[test]
fn priority_rank_orders_low_to_urgent() {
    assert!(RepairPriority::Low.rank() < RepairPriority::Medium.rank());
    assert!(RepairPriority::Medium.rank() < RepairPriority::High.rank());
    assert!(RepairPriority::High.rank() < RepairPriority::Urgent.rank());
}

#[test]
fn card_status_covers_the_three_columns() {
    assert_eq!(CardStatus::COLUMNS.len(), 3);
    for status in CardStatus::COLUMNS {
        assert_eq!(CardStatus::from_str(status.as_str()), Some(status));
    }
    assert_eq!(CardStatus::from_str("archived"), None);
}

#[test]
fn sale_serde_uses_snake_case_wire_values() {
    let json = serde_json::to_value(PaymentMethod::WireTransfer).unwrap();
    assert_eq!(json, serde_json::json!("wire_transfer"));
    let back: PaymentMethod = serde_json::from_value(json).unwrap();
    assert_eq!(back, PaymentMethod::WireTransfer);
}

#[test]
fn watch_record_serde_round_trip() {
    let watch = Watch {
        id: Uuid::new_v4(),
        brand: "Rolex".into(),
        model: "Submariner".into(),
        reference: "126610LN".into(),
        serial_number: "7J82K41".into(),
        condition: WatchCondition::Excellent,
        price: 14_500.0,
        status: WatchStatus::InStock,
        supplier_id: None,
        year: Some(2023),
        image_urls: vec!["mem://abc".into()],
    };
    let json = serde_json::to_string(&watch).unwrap();
    let restored: Watch = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.id, watch.id);
    assert_eq!(restored.brand, "Rolex");
    assert_eq!(restored.status, WatchStatus::InStock);
    assert!((restored.price - 14_500.0).abs() < f64::EPSILON);
}

#[test]
fn customer_patch_defaults_to_all_none() {
    let patch = CustomerPatch::default();
    assert!(patch.name.is_none());
    assert!(patch.status.is_none());
    assert!(patch.preferences.is_none());
}
