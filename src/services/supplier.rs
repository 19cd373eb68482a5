//! Supplier service — CRUD with retain-based deletion.

use tracing::info;
use uuid::Uuid;

use crate::models::{NewSupplier, Supplier, SupplierPatch, SupplierStatus};
use crate::services::contains_ci;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum SupplierError {
    #[error("supplier not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl crate::error::ErrorCode for SupplierError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_SUPPLIER_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
        }
    }
}

/// List suppliers, optionally filtered by a search string over
/// name/contact/email.
pub async fn list_suppliers(state: &AppState, search: Option<&str>) -> Vec<Supplier> {
    let directory = state.directory.read().await;
    let needle = search.map(str::to_lowercase);
    directory
        .suppliers
        .iter()
        .filter(|supplier| match needle.as_deref() {
            Some(needle) => {
                contains_ci(&supplier.name, needle)
                    || supplier
                        .contact_name
                        .as_deref()
                        .is_some_and(|contact| contains_ci(contact, needle))
                    || supplier
                        .email
                        .as_deref()
                        .is_some_and(|email| contains_ci(email, needle))
            }
            None => true,
        })
        .cloned()
        .collect()
}

/// Fetch one supplier by id.
///
/// # Errors
///
/// Returns `NotFound` if no supplier has that id.
pub async fn get_supplier(state: &AppState, id: Uuid) -> Result<Supplier, SupplierError> {
    let directory = state.directory.read().await;
    directory
        .supplier(id)
        .cloned()
        .ok_or(SupplierError::NotFound(id))
}

/// Create a supplier from the inline form.
///
/// # Errors
///
/// Returns `Validation` if the name is blank.
pub async fn add_supplier(state: &AppState, new: NewSupplier) -> Result<Supplier, SupplierError> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(SupplierError::Validation("name is required".into()));
    }

    let supplier = Supplier {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        supplier_type: new.supplier_type,
        contact_name: new.contact_name,
        email: new.email,
        phone: new.phone,
        status: SupplierStatus::Active,
    };

    let mut directory = state.directory.write().await;
    directory.suppliers.push(supplier.clone());
    info!(supplier_id = %supplier.id, name = %supplier.name, "supplier created");
    Ok(supplier)
}

/// Apply a partial update to a supplier and return the updated record.
///
/// # Errors
///
/// Returns `NotFound` if no supplier has that id.
pub async fn update_supplier(
    state: &AppState,
    id: Uuid,
    patch: SupplierPatch,
) -> Result<Supplier, SupplierError> {
    let mut directory = state.directory.write().await;
    let supplier = directory
        .suppliers
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(SupplierError::NotFound(id))?;

    if let Some(name) = patch.name {
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(SupplierError::Validation("name cannot be blank".into()));
        }
        supplier.name = name;
    }
    if let Some(supplier_type) = patch.supplier_type {
        supplier.supplier_type = supplier_type;
    }
    if let Some(contact_name) = patch.contact_name {
        supplier.contact_name = Some(contact_name);
    }
    if let Some(email) = patch.email {
        supplier.email = Some(email);
    }
    if let Some(phone) = patch.phone {
        supplier.phone = Some(phone);
    }
    if let Some(status) = patch.status {
        supplier.status = status;
    }

    info!(supplier_id = %id, "supplier updated");
    Ok(supplier.clone())
}

/// Delete a supplier. The collection is filtered in place, matching the
/// screen's behavior.
///
/// # Errors
///
/// Returns `NotFound` if no supplier has that id.
pub async fn delete_supplier(state: &AppState, id: Uuid) -> Result<(), SupplierError> {
    let mut directory = state.directory.write().await;
    let before = directory.suppliers.len();
    directory.suppliers.retain(|supplier| supplier.id != id);
    if directory.suppliers.len() == before {
        return Err(SupplierError::NotFound(id));
    }
    info!(supplier_id = %id, "supplier deleted");
    Ok(())
}

#[cfg(test)]
#[path = "supplier_test.rs"]
mod tests;
