//! Inventory service — watch CRUD and availability.

use tracing::info;
use uuid::Uuid;

use crate::models::{NewWatch, Watch, WatchPatch, WatchStatus};
use crate::services::contains_ci;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("watch not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl crate::error::ErrorCode for InventoryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_WATCH_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
        }
    }
}

/// Filters accepted by the inventory list screen.
#[derive(Debug, Clone, Default)]
pub struct WatchFilter {
    pub status: Option<WatchStatus>,
    pub brand: Option<String>,
    pub search: Option<String>,
}

pub(crate) fn matches_filter(watch: &Watch, filter: &WatchFilter) -> bool {
    if let Some(status) = filter.status
        && watch.status != status
    {
        return false;
    }
    if let Some(brand) = &filter.brand
        && !watch.brand.eq_ignore_ascii_case(brand)
    {
        return false;
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        return contains_ci(&watch.brand, &needle)
            || contains_ci(&watch.model, &needle)
            || contains_ci(&watch.reference, &needle);
    }
    true
}

/// List watches matching the filter, in directory order.
pub async fn list_watches(state: &AppState, filter: &WatchFilter) -> Vec<Watch> {
    let directory = state.directory.read().await;
    directory
        .watches
        .iter()
        .filter(|watch| matches_filter(watch, filter))
        .cloned()
        .collect()
}

/// Fetch one watch by id.
///
/// # Errors
///
/// Returns `NotFound` if no watch has that id.
pub async fn get_watch(state: &AppState, id: Uuid) -> Result<Watch, InventoryError> {
    let directory = state.directory.read().await;
    directory.watch(id).cloned().ok_or(InventoryError::NotFound(id))
}

/// Add a watch to inventory. Status defaults to `InStock`.
///
/// # Errors
///
/// Returns `Validation` if brand or model is blank, or price is negative.
pub async fn add_watch(state: &AppState, new: NewWatch) -> Result<Watch, InventoryError> {
    if new.brand.trim().is_empty() || new.model.trim().is_empty() {
        return Err(InventoryError::Validation("brand and model are required".into()));
    }
    if new.price < 0.0 {
        return Err(InventoryError::Validation("price cannot be negative".into()));
    }

    let watch = Watch {
        id: Uuid::new_v4(),
        brand: new.brand.trim().to_owned(),
        model: new.model.trim().to_owned(),
        reference: new.reference,
        serial_number: new.serial_number,
        condition: new.condition,
        price: new.price,
        status: new.status.unwrap_or(WatchStatus::InStock),
        supplier_id: new.supplier_id,
        year: new.year,
        image_urls: new.image_urls,
    };

    let mut directory = state.directory.write().await;
    directory.watches.push(watch.clone());
    info!(watch_id = %watch.id, brand = %watch.brand, model = %watch.model, "watch added to inventory");
    Ok(watch)
}

/// Apply a partial update to a watch and return the updated record.
///
/// # Errors
///
/// Returns `NotFound` if no watch has that id, `Validation` on a
/// negative price.
pub async fn update_watch(state: &AppState, id: Uuid, patch: WatchPatch) -> Result<Watch, InventoryError> {
    if let Some(price) = patch.price
        && price < 0.0
    {
        return Err(InventoryError::Validation("price cannot be negative".into()));
    }

    let mut directory = state.directory.write().await;
    let watch = directory.watch_mut(id).ok_or(InventoryError::NotFound(id))?;

    if let Some(brand) = patch.brand {
        watch.brand = brand;
    }
    if let Some(model) = patch.model {
        watch.model = model;
    }
    if let Some(reference) = patch.reference {
        watch.reference = reference;
    }
    if let Some(serial_number) = patch.serial_number {
        watch.serial_number = serial_number;
    }
    if let Some(condition) = patch.condition {
        watch.condition = condition;
    }
    if let Some(price) = patch.price {
        watch.price = price;
    }
    if let Some(status) = patch.status {
        watch.status = status;
    }
    if let Some(supplier_id) = patch.supplier_id {
        watch.supplier_id = Some(supplier_id);
    }
    if let Some(year) = patch.year {
        watch.year = Some(year);
    }
    if let Some(image_urls) = patch.image_urls {
        watch.image_urls = image_urls;
    }

    info!(watch_id = %id, status = watch.status.as_str(), "watch updated");
    Ok(watch.clone())
}

#[cfg(test)]
#[path = "inventory_test.rs"]
mod tests;
