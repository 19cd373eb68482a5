//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the retail directory: every entity collection the dashboard
//! screens read and mutate, behind a single `RwLock`. The directory is
//! the application context of the original system — creation functions
//! generate ids, mutations are partial, and collections are plain `Vec`s
//! so deletion-by-filtering and insertion-order grouping behave the way
//! the screens expect.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::Config;
use crate::models::{
    Appointment, Card, Customer, Invoice, Repair, Sale, StoredUpload, Supplier, TeamMember, Watch,
};

// =============================================================================
// DIRECTORY
// =============================================================================

/// Every collection the screens work over, plus display-number counters.
#[derive(Default)]
pub struct Directory {
    pub customers: Vec<Customer>,
    pub watches: Vec<Watch>,
    pub suppliers: Vec<Supplier>,
    pub sales: Vec<Sale>,
    pub repairs: Vec<Repair>,
    pub appointments: Vec<Appointment>,
    pub invoices: Vec<Invoice>,
    pub cards: Vec<Card>,
    pub team: Vec<TeamMember>,
    pub uploads: Vec<StoredUpload>,
    repair_seq: u32,
    invoice_seq: u32,
}

impl Directory {
    #[must_use]
    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn customer_mut(&mut self, id: Uuid) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.id == id)
    }

    #[must_use]
    pub fn watch(&self, id: Uuid) -> Option<&Watch> {
        self.watches.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn watch_mut(&mut self, id: Uuid) -> Option<&mut Watch> {
        self.watches.iter_mut().find(|w| w.id == id)
    }

    #[must_use]
    pub fn supplier(&self, id: Uuid) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn repair_mut(&mut self, id: Uuid) -> Option<&mut Repair> {
        self.repairs.iter_mut().find(|r| r.id == id)
    }

    /// Next repair display reference, e.g. `RPR-1042`.
    pub fn next_repair_ticket(&mut self) -> String {
        self.repair_seq += 1;
        format!("RPR-{}", 1000 + self.repair_seq)
    }

    /// Next invoice display number for the given year, e.g. `INV-2026-0007`.
    pub fn next_invoice_number(&mut self, year: i32) -> String {
        self.invoice_seq += 1;
        format!("INV-{year}-{:04}", self.invoice_seq)
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the directory is Arc-wrapped, config is Copy.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub directory: Arc<RwLock<Directory>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, directory: Arc::new(RwLock::new(Directory::default())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_default_is_empty() {
        let directory = Directory::default();
        assert!(directory.customers.is_empty());
        assert!(directory.watches.is_empty());
        assert!(directory.cards.is_empty());
    }

    #[test]
    fn repair_tickets_are_sequential() {
        let mut directory = Directory::default();
        assert_eq!(directory.next_repair_ticket(), "RPR-1001");
        assert_eq!(directory.next_repair_ticket(), "RPR-1002");
    }

    #[test]
    fn invoice_numbers_embed_year_and_pad_sequence() {
        let mut directory = Directory::default();
        assert_eq!(directory.next_invoice_number(2026), "INV-2026-0001");
        assert_eq!(directory.next_invoice_number(2026), "INV-2026-0002");
    }
}
