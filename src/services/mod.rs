//! Domain services. Routes stay thin; anything that touches the
//! directory or enforces a rule lives here.

pub mod appointment;
pub mod customer;
pub mod dashboard;
pub mod inventory;
pub mod invoice;
pub mod kanban;
pub mod repair;
pub mod sale;
pub mod supplier;
pub mod team;
pub mod upload;

/// Case-insensitive substring match, shared by every search box.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
