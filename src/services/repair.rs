//! Repair tracking service — the filter/search/sort engine behind the
//! tracking table, plus ticket lifecycle mutations.
//!
//! DESIGN
//! ======
//! Filtering and sorting happen over a snapshot of the in-memory list,
//! exactly the subset/ordering rules the table promises: search is a
//! case-insensitive substring match over brand/model/description/ticket,
//! every column is sortable in either direction, and sorts are stable so
//! equal keys keep their directory order.

use std::cmp::Ordering;

use tracing::info;
use uuid::Uuid;

use crate::models::{NewRepair, Repair, RepairPatch, RepairPriority, RepairStatus};
use crate::services::contains_ci;
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RepairError {
    #[error("repair not found: {0}")]
    NotFound(Uuid),
    #[error("customer not found: {0}")]
    CustomerNotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl crate::error::ErrorCode for RepairError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_REPAIR_NOT_FOUND",
            Self::CustomerNotFound(_) => "E_CUSTOMER_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
        }
    }
}

/// Filters accepted by the tracking table.
#[derive(Debug, Clone, Default)]
pub struct RepairFilter {
    pub status: Option<RepairStatus>,
    pub priority: Option<RepairPriority>,
    pub technician: Option<String>,
    pub search: Option<String>,
}

/// Sortable columns of the tracking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairSortKey {
    Ticket,
    Brand,
    Model,
    Status,
    Priority,
    Technician,
    Estimate,
    ReceivedAt,
}

impl RepairSortKey {
    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "ticket" => Some(Self::Ticket),
            "brand" => Some(Self::Brand),
            "model" => Some(Self::Model),
            "status" => Some(Self::Status),
            "priority" => Some(Self::Priority),
            "technician" => Some(Self::Technician),
            "estimate" => Some(Self::Estimate),
            "received_at" => Some(Self::ReceivedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

// =============================================================================
// FILTER / SORT
// =============================================================================

pub(crate) fn matches_filter(repair: &Repair, filter: &RepairFilter) -> bool {
    if let Some(status) = filter.status
        && repair.status != status
    {
        return false;
    }
    if let Some(priority) = filter.priority
        && repair.priority != priority
    {
        return false;
    }
    if let Some(technician) = &filter.technician {
        let assigned = repair
            .technician
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(technician));
        if !assigned {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        return contains_ci(&repair.brand, &needle)
            || contains_ci(&repair.model, &needle)
            || contains_ci(&repair.description, &needle)
            || contains_ci(&repair.ticket, &needle);
    }
    true
}

fn compare_by(a: &Repair, b: &Repair, key: RepairSortKey) -> Ordering {
    match key {
        RepairSortKey::Ticket => str_ci(&a.ticket, &b.ticket),
        RepairSortKey::Brand => str_ci(&a.brand, &b.brand),
        RepairSortKey::Model => str_ci(&a.model, &b.model),
        RepairSortKey::Status => a.status.rank().cmp(&b.status.rank()),
        RepairSortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
        RepairSortKey::Technician => opt_str_ci(a.technician.as_deref(), b.technician.as_deref()),
        RepairSortKey::Estimate => a.estimate.total_cmp(&b.estimate),
        RepairSortKey::ReceivedAt => a.received_at.cmp(&b.received_at),
    }
}

fn str_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Unassigned sorts before any named technician.
fn opt_str_ci(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => str_ci(a, b),
    }
}

/// Stable sort in place by the given column and direction.
pub(crate) fn sort_repairs(repairs: &mut [Repair], key: RepairSortKey, dir: SortDir) {
    repairs.sort_by(|a, b| {
        let ordering = compare_by(a, b, key);
        match dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
}

/// List repairs matching the filter, sorted when a key is given.
pub async fn list_repairs(
    state: &AppState,
    filter: &RepairFilter,
    sort: Option<(RepairSortKey, SortDir)>,
) -> Vec<Repair> {
    let directory = state.directory.read().await;
    let mut repairs: Vec<Repair> = directory
        .repairs
        .iter()
        .filter(|repair| matches_filter(repair, filter))
        .cloned()
        .collect();
    if let Some((key, dir)) = sort {
        sort_repairs(&mut repairs, key, dir);
    }
    repairs
}

// =============================================================================
// LIFECYCLE
// =============================================================================

/// Fetch one repair by id.
///
/// # Errors
///
/// Returns `NotFound` if no repair has that id.
pub async fn get_repair(state: &AppState, id: Uuid) -> Result<Repair, RepairError> {
    let directory = state.directory.read().await;
    directory
        .repairs
        .iter()
        .find(|repair| repair.id == id)
        .cloned()
        .ok_or(RepairError::NotFound(id))
}

/// Intake a repair. Assigns the next ticket reference and starts at
/// `Received`.
///
/// # Errors
///
/// Returns `CustomerNotFound` for an unknown customer and `Validation`
/// when the description is blank.
pub async fn create_repair(state: &AppState, new: NewRepair) -> Result<Repair, RepairError> {
    if new.description.trim().is_empty() {
        return Err(RepairError::Validation("a problem description is required".into()));
    }

    let mut directory = state.directory.write().await;
    if directory.customer(new.customer_id).is_none() {
        return Err(RepairError::CustomerNotFound(new.customer_id));
    }

    let ticket = directory.next_repair_ticket();
    let repair = Repair {
        id: Uuid::new_v4(),
        ticket,
        customer_id: new.customer_id,
        brand: new.brand,
        model: new.model,
        serial_number: new.serial_number,
        description: new.description,
        status: RepairStatus::Received,
        priority: new.priority.unwrap_or(RepairPriority::Medium),
        technician: new.technician,
        estimate: new.estimate.unwrap_or(0.0),
        notes: Vec::new(),
        parts_required: new.parts_required,
        received_at: time::OffsetDateTime::now_utc().date(),
    };
    directory.repairs.push(repair.clone());
    info!(repair_id = %repair.id, ticket = %repair.ticket, "repair intake");
    Ok(repair)
}

/// Apply a partial update to a repair and return the updated record.
///
/// # Errors
///
/// Returns `NotFound` if no repair has that id.
pub async fn update_repair(state: &AppState, id: Uuid, patch: RepairPatch) -> Result<Repair, RepairError> {
    let mut directory = state.directory.write().await;
    let repair = directory.repair_mut(id).ok_or(RepairError::NotFound(id))?;

    if let Some(status) = patch.status {
        repair.status = status;
    }
    if let Some(priority) = patch.priority {
        repair.priority = priority;
    }
    if let Some(technician) = patch.technician {
        repair.technician = Some(technician);
    }
    if let Some(estimate) = patch.estimate {
        repair.estimate = estimate;
    }
    if let Some(description) = patch.description {
        repair.description = description;
    }
    if let Some(parts_required) = patch.parts_required {
        repair.parts_required = parts_required;
    }

    info!(repair_id = %id, status = repair.status.as_str(), "repair updated");
    Ok(repair.clone())
}

/// Append a note to a repair's note list.
///
/// # Errors
///
/// Returns `NotFound` for an unknown repair, `Validation` for a blank
/// note.
pub async fn add_note(state: &AppState, id: Uuid, note: &str) -> Result<Repair, RepairError> {
    let note = note.trim();
    if note.is_empty() {
        return Err(RepairError::Validation("note cannot be blank".into()));
    }

    let mut directory = state.directory.write().await;
    let repair = directory.repair_mut(id).ok_or(RepairError::NotFound(id))?;
    repair.notes.push(note.to_owned());
    Ok(repair.clone())
}

#[cfg(test)]
#[path = "repair_test.rs"]
mod tests;
