use time::macros::date;

use super::*;
use crate::state::test_helpers;

#[allow(clippy::too_many_arguments)]
async fn push_repair(
    state: &AppState,
    brand: &str,
    model: &str,
    description: &str,
    status: RepairStatus,
    priority: RepairPriority,
    technician: Option<&str>,
    estimate: f64,
    received_at: time::Date,
) -> Repair {
    let mut directory = state.directory.write().await;
    let ticket = directory.next_repair_ticket();
    let repair = Repair {
        id: Uuid::new_v4(),
        ticket,
        customer_id: Uuid::new_v4(),
        brand: brand.to_owned(),
        model: model.to_owned(),
        serial_number: "SN".to_owned(),
        description: description.to_owned(),
        status,
        priority,
        technician: technician.map(str::to_owned),
        estimate,
        notes: Vec::new(),
        parts_required: Vec::new(),
        received_at,
    };
    directory.repairs.push(repair.clone());
    repair
}

async fn seed_tracking_table(state: &AppState) {
    push_repair(
        state,
        "Rolex",
        "Submariner",
        "crown replacement",
        RepairStatus::InRepair,
        RepairPriority::High,
        Some("Dana"),
        850.0,
        date!(2026 - 02 - 10),
    )
    .await;
    push_repair(
        state,
        "Omega",
        "Speedmaster",
        "full service",
        RepairStatus::Received,
        RepairPriority::Medium,
        Some("Felix"),
        600.0,
        date!(2026 - 03 - 02),
    )
    .await;
    push_repair(
        state,
        "Cartier",
        "Tank",
        "rolex-style bracelet repair",
        RepairStatus::AwaitingParts,
        RepairPriority::High,
        None,
        1_200.0,
        date!(2026 - 01 - 21),
    )
    .await;
    push_repair(
        state,
        "Rolex",
        "Datejust",
        "crystal swap",
        RepairStatus::Delivered,
        RepairPriority::Low,
        Some("dana"),
        300.0,
        date!(2026 - 02 - 10),
    )
    .await;
}

// =============================================================================
// FILTER / SEARCH
// =============================================================================

#[tokio::test]
async fn search_returns_exactly_the_matching_subset() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    // "Rolex" matches two brands plus one description mention, case-insensitively.
    let filter = RepairFilter { search: Some("rolex".to_owned()), ..RepairFilter::default() };
    let hits = list_repairs(&state, &filter, None).await;
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|repair| {
        repair.brand.to_lowercase().contains("rolex")
            || repair.description.to_lowercase().contains("rolex")
    }));
}

#[tokio::test]
async fn filters_combine_as_a_conjunction() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    let filter = RepairFilter {
        priority: Some(RepairPriority::High),
        search: Some("rolex".to_owned()),
        ..RepairFilter::default()
    };
    let hits = list_repairs(&state, &filter, None).await;
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|repair| repair.priority == RepairPriority::High));
}

#[tokio::test]
async fn technician_filter_is_case_insensitive() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    let filter = RepairFilter { technician: Some("DANA".to_owned()), ..RepairFilter::default() };
    let hits = list_repairs(&state, &filter, None).await;
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn status_filter_selects_one_state() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    let filter = RepairFilter { status: Some(RepairStatus::AwaitingParts), ..RepairFilter::default() };
    let hits = list_repairs(&state, &filter, None).await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].brand, "Cartier");
}

// =============================================================================
// SORT
// =============================================================================

#[tokio::test]
async fn sort_by_brand_toggles_between_directions() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    let asc = list_repairs(
        &state,
        &RepairFilter::default(),
        Some((RepairSortKey::Brand, SortDir::Asc)),
    )
    .await;
    let brands: Vec<&str> = asc.iter().map(|r| r.brand.as_str()).collect();
    assert_eq!(brands, vec!["Cartier", "Omega", "Rolex", "Rolex"]);

    let desc = list_repairs(
        &state,
        &RepairFilter::default(),
        Some((RepairSortKey::Brand, SortDir::Desc)),
    )
    .await;
    let brands: Vec<&str> = desc.iter().map(|r| r.brand.as_str()).collect();
    assert_eq!(brands, vec!["Rolex", "Rolex", "Omega", "Cartier"]);
}

#[tokio::test]
async fn sort_is_stable_for_equal_keys() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    // Two High-priority rows: Submariner was inserted before Tank, and
    // must stay ahead of it under both directions of a priority sort.
    let asc = list_repairs(
        &state,
        &RepairFilter::default(),
        Some((RepairSortKey::Priority, SortDir::Asc)),
    )
    .await;
    let highs: Vec<&str> = asc
        .iter()
        .filter(|r| r.priority == RepairPriority::High)
        .map(|r| r.model.as_str())
        .collect();
    assert_eq!(highs, vec!["Submariner", "Tank"]);

    let desc = list_repairs(
        &state,
        &RepairFilter::default(),
        Some((RepairSortKey::Priority, SortDir::Desc)),
    )
    .await;
    let highs: Vec<&str> = desc
        .iter()
        .filter(|r| r.priority == RepairPriority::High)
        .map(|r| r.model.as_str())
        .collect();
    assert_eq!(highs, vec!["Submariner", "Tank"]);
}

#[tokio::test]
async fn sort_by_estimate_is_numeric() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    let sorted = list_repairs(
        &state,
        &RepairFilter::default(),
        Some((RepairSortKey::Estimate, SortDir::Asc)),
    )
    .await;
    let estimates: Vec<f64> = sorted.iter().map(|r| r.estimate).collect();
    assert_eq!(estimates, vec![300.0, 600.0, 850.0, 1_200.0]);
}

#[tokio::test]
async fn sort_by_received_date_is_chronological() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    let sorted = list_repairs(
        &state,
        &RepairFilter::default(),
        Some((RepairSortKey::ReceivedAt, SortDir::Asc)),
    )
    .await;
    assert_eq!(sorted[0].model, "Tank");
    // Equal dates keep insertion order: Submariner before Datejust.
    assert_eq!(sorted[1].model, "Submariner");
    assert_eq!(sorted[2].model, "Datejust");
    assert_eq!(sorted[3].model, "Speedmaster");
}

#[tokio::test]
async fn unassigned_technician_sorts_first() {
    let state = test_helpers::test_app_state();
    seed_tracking_table(&state).await;

    let sorted = list_repairs(
        &state,
        &RepairFilter::default(),
        Some((RepairSortKey::Technician, SortDir::Asc)),
    )
    .await;
    assert!(sorted[0].technician.is_none());
}

#[test]
fn sort_key_parses_known_columns_only() {
    assert_eq!(RepairSortKey::from_str("estimate"), Some(RepairSortKey::Estimate));
    assert_eq!(RepairSortKey::from_str("received_at"), Some(RepairSortKey::ReceivedAt));
    assert_eq!(RepairSortKey::from_str("shoe_size"), None);
    assert_eq!(SortDir::from_str("desc"), Some(SortDir::Desc));
    assert_eq!(SortDir::from_str("sideways"), None);
}

// =============================================================================
// LIFECYCLE
// =============================================================================

#[tokio::test]
async fn create_repair_assigns_ticket_and_received_status() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Owner").await;

    let repair = create_repair(
        &state,
        NewRepair {
            customer_id: customer.id,
            brand: "Omega".into(),
            model: "Seamaster".into(),
            serial_number: "88211703".into(),
            description: "running fast".into(),
            priority: None,
            technician: None,
            estimate: None,
            parts_required: Vec::new(),
        },
    )
    .await
    .unwrap();

    assert_eq!(repair.status, RepairStatus::Received);
    assert_eq!(repair.priority, RepairPriority::Medium);
    assert!(repair.ticket.starts_with("RPR-"));
}

#[tokio::test]
async fn create_repair_requires_description_and_customer() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Owner").await;

    let blank = create_repair(
        &state,
        NewRepair {
            customer_id: customer.id,
            brand: "Omega".into(),
            model: "Seamaster".into(),
            serial_number: "SN".into(),
            description: "  ".into(),
            priority: None,
            technician: None,
            estimate: None,
            parts_required: Vec::new(),
        },
    )
    .await;
    assert!(matches!(blank.unwrap_err(), RepairError::Validation(_)));

    let orphan = create_repair(
        &state,
        NewRepair {
            customer_id: Uuid::new_v4(),
            brand: "Omega".into(),
            model: "Seamaster".into(),
            serial_number: "SN".into(),
            description: "dead battery".into(),
            priority: None,
            technician: None,
            estimate: None,
            parts_required: Vec::new(),
        },
    )
    .await;
    assert!(matches!(orphan.unwrap_err(), RepairError::CustomerNotFound(_)));
}

#[tokio::test]
async fn update_moves_status_and_assigns_technician() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Owner").await;
    let repair = test_helpers::seed_repair(&state, customer.id, "Rolex", "Explorer").await;

    let updated = update_repair(
        &state,
        repair.id,
        RepairPatch {
            status: Some(RepairStatus::Diagnosing),
            technician: Some("Dana".into()),
            ..RepairPatch::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.status, RepairStatus::Diagnosing);
    assert_eq!(updated.technician.as_deref(), Some("Dana"));
}

#[tokio::test]
async fn add_note_appends_and_rejects_blank() {
    let state = test_helpers::test_app_state();
    let customer = test_helpers::seed_customer(&state, "Owner").await;
    let repair = test_helpers::seed_repair(&state, customer.id, "Rolex", "Explorer").await;

    let updated = add_note(&state, repair.id, "movement cleaned").await.unwrap();
    assert_eq!(updated.notes, vec!["movement cleaned".to_owned()]);

    let blank = add_note(&state, repair.id, "   ").await;
    assert!(matches!(blank.unwrap_err(), RepairError::Validation(_)));
}
