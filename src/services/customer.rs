//! Customer service — search, pagination, CRUD, and the profile view.
//!
//! DESIGN
//! ======
//! The customer list screen searches by name/email/phone and pages the
//! result ten at a time. Creation is the inline "new customer" form from
//! the selection modals: it requires a name and at least one way to
//! reach the customer. The profile view joins the customer with their
//! sales and repairs, since purchase history is not stored on the record.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::models::{
    Customer, CustomerPatch, CustomerStatus, NewCustomer, Repair, Sale, SaleKind,
};
use crate::services::contains_ci;
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("customer not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl crate::error::ErrorCode for CustomerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_CUSTOMER_NOT_FOUND",
            Self::Validation(_) => "E_VALIDATION",
        }
    }
}

/// One page of a filtered listing. `page` is 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Customer record joined with purchase history and repairs.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerProfile {
    pub customer: Customer,
    pub purchase_history: Vec<Sale>,
    pub repairs: Vec<Repair>,
    /// Sum of sell-side sale amounts.
    pub total_spent: f64,
}

// =============================================================================
// LIST / GET
// =============================================================================

/// Slice `items` into the 1-based `page` of `page_size` entries.
/// Out-of-range pages yield an empty item list; `page_count` is
/// `ceil(total / page_size)`.
pub(crate) fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    let page_count = total.div_ceil(page_size);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size);
    let slice = if start >= total {
        Vec::new()
    } else {
        items[start..(start + page_size).min(total)].to_vec()
    };
    Page { items: slice, page, page_count, total }
}

pub(crate) fn matches_search(customer: &Customer, needle_lower: &str) -> bool {
    contains_ci(&customer.name, needle_lower)
        || customer
            .email
            .as_deref()
            .is_some_and(|email| contains_ci(email, needle_lower))
        || customer
            .phone
            .as_deref()
            .is_some_and(|phone| contains_ci(phone, needle_lower))
}

/// List customers filtered by an optional search string, paged.
pub async fn list_customers(state: &AppState, search: Option<&str>, page: usize) -> Page<Customer> {
    let directory = state.directory.read().await;
    let needle = search.map(str::to_lowercase);
    let filtered: Vec<Customer> = directory
        .customers
        .iter()
        .filter(|customer| match needle.as_deref() {
            Some(needle) => matches_search(customer, needle),
            None => true,
        })
        .cloned()
        .collect();
    paginate(&filtered, page, state.config.page_size)
}

/// Fetch one customer by id.
///
/// # Errors
///
/// Returns `NotFound` if no customer has that id.
pub async fn get_customer(state: &AppState, id: Uuid) -> Result<Customer, CustomerError> {
    let directory = state.directory.read().await;
    directory
        .customer(id)
        .cloned()
        .ok_or(CustomerError::NotFound(id))
}

// =============================================================================
// CREATE / UPDATE
// =============================================================================

/// Create a customer from the inline form. Returns the created record
/// with its generated id.
///
/// # Errors
///
/// Returns `Validation` if the name is blank or no contact field is set.
pub async fn add_customer(state: &AppState, new: NewCustomer) -> Result<Customer, CustomerError> {
    let name = new.name.trim();
    if name.is_empty() {
        return Err(CustomerError::Validation("name is required".into()));
    }
    let has_contact = new.email.as_deref().is_some_and(|v| !v.trim().is_empty())
        || new.phone.as_deref().is_some_and(|v| !v.trim().is_empty());
    if !has_contact {
        return Err(CustomerError::Validation("an email or phone number is required".into()));
    }

    let customer = Customer {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        email: new.email,
        phone: new.phone,
        address: new.address,
        status: CustomerStatus::Active,
        vip_tier: new.vip_tier,
        preferences: new.preferences,
        notes: new.notes,
        created_at: time::OffsetDateTime::now_utc().date(),
    };

    let mut directory = state.directory.write().await;
    directory.customers.push(customer.clone());
    info!(customer_id = %customer.id, name = %customer.name, "customer created");
    Ok(customer)
}

/// Apply a partial update to a customer and return the updated record.
///
/// # Errors
///
/// Returns `NotFound` if no customer has that id.
pub async fn update_customer(
    state: &AppState,
    id: Uuid,
    patch: CustomerPatch,
) -> Result<Customer, CustomerError> {
    let mut directory = state.directory.write().await;
    let customer = directory.customer_mut(id).ok_or(CustomerError::NotFound(id))?;

    if let Some(name) = patch.name {
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(CustomerError::Validation("name cannot be blank".into()));
        }
        customer.name = name;
    }
    if let Some(email) = patch.email {
        customer.email = Some(email);
    }
    if let Some(phone) = patch.phone {
        customer.phone = Some(phone);
    }
    if let Some(address) = patch.address {
        customer.address = Some(address);
    }
    if let Some(status) = patch.status {
        customer.status = status;
    }
    if let Some(vip_tier) = patch.vip_tier {
        customer.vip_tier = Some(vip_tier);
    }
    if let Some(preferences) = patch.preferences {
        customer.preferences = preferences;
    }
    if let Some(notes) = patch.notes {
        customer.notes = Some(notes);
    }

    info!(customer_id = %id, "customer updated");
    Ok(customer.clone())
}

// =============================================================================
// PROFILE
// =============================================================================

/// The `/customers/profiles/{id}` view: record plus joined history.
///
/// # Errors
///
/// Returns `NotFound` if no customer has that id.
pub async fn customer_profile(state: &AppState, id: Uuid) -> Result<CustomerProfile, CustomerError> {
    let directory = state.directory.read().await;
    let customer = directory
        .customer(id)
        .cloned()
        .ok_or(CustomerError::NotFound(id))?;

    let purchase_history: Vec<Sale> = directory
        .sales
        .iter()
        .filter(|sale| sale.customer_id == id)
        .cloned()
        .collect();
    let repairs: Vec<Repair> = directory
        .repairs
        .iter()
        .filter(|repair| repair.customer_id == id)
        .cloned()
        .collect();
    let total_spent = purchase_history
        .iter()
        .filter(|sale| sale.kind != SaleKind::Buy)
        .map(|sale| sale.amount)
        .sum();

    Ok(CustomerProfile { customer, purchase_history, repairs, total_spent })
}

#[cfg(test)]
#[path = "customer_test.rs"]
mod tests;
