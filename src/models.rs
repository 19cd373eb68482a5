//! Entity records for the retail directory.
//!
//! DESIGN
//! ======
//! Every entity is a flat record with a Uuid id. Creation payloads
//! (`New*`) carry the caller-supplied fields; patch payloads (`*Patch`)
//! make every field optional so handlers can apply partial updates.
//! String-union fields from the dashboard are typed enums here, with
//! `as_str`/`from_str` pairs for query-parameter parsing.

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

// =============================================================================
// CUSTOMERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerStatus {
    Active,
    Inactive,
}

/// VIP classification label. Display/badging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VipTier {
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: CustomerStatus,
    pub vip_tier: Option<VipTier>,
    /// Preferred brands, free-form.
    pub preferences: Vec<String>,
    pub notes: Option<String>,
    pub created_at: Date,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub vip_tier: Option<VipTier>,
    #[serde(default)]
    pub preferences: Vec<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: Option<CustomerStatus>,
    pub vip_tier: Option<VipTier>,
    pub preferences: Option<Vec<String>>,
    pub notes: Option<String>,
}

// =============================================================================
// WATCHES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WatchStatus {
    InStock,
    Reserved,
    Sold,
    OnOrder,
}

impl WatchStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::OnOrder => "on_order",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "in_stock" => Some(Self::InStock),
            "reserved" => Some(Self::Reserved),
            "sold" => Some(Self::Sold),
            "on_order" => Some(Self::OnOrder),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchCondition {
    New,
    Excellent,
    Good,
    Fair,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Watch {
    pub id: Uuid,
    pub brand: String,
    pub model: String,
    pub reference: String,
    pub serial_number: String,
    pub condition: WatchCondition,
    pub price: f64,
    pub status: WatchStatus,
    pub supplier_id: Option<Uuid>,
    pub year: Option<i32>,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewWatch {
    pub brand: String,
    pub model: String,
    pub reference: String,
    pub serial_number: String,
    pub condition: WatchCondition,
    pub price: f64,
    pub status: Option<WatchStatus>,
    pub supplier_id: Option<Uuid>,
    pub year: Option<i32>,
    #[serde(default)]
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchPatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub reference: Option<String>,
    pub serial_number: Option<String>,
    pub condition: Option<WatchCondition>,
    pub price: Option<f64>,
    pub status: Option<WatchStatus>,
    pub supplier_id: Option<Uuid>,
    pub year: Option<i32>,
    pub image_urls: Option<Vec<String>>,
}

// =============================================================================
// SUPPLIERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplierType {
    AuthorizedDealer,
    GreyMarket,
    PartsVendor,
    Auction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub supplier_type: SupplierType,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: SupplierStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSupplier {
    pub name: String,
    pub supplier_type: SupplierType,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub supplier_type: Option<SupplierType>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<SupplierStatus>,
}

// =============================================================================
// SALES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleKind {
    /// Store buys from a customer.
    Buy,
    /// Store sells to a customer.
    Sell,
    /// Trade-in: customer's watch value offsets a purchase.
    Exchange,
}

impl SaleKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Exchange => "exchange",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    WireTransfer,
    Financing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    PartiallyPaid,
}

/// One line of a split payment, already parsed to a numeric amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLine {
    pub method: PaymentMethod,
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    pub kind: SaleKind,
    pub customer_id: Uuid,
    pub watch_id: Uuid,
    pub trade_in_watch_id: Option<Uuid>,
    /// Final amount after discount, tax, and trade-in offset.
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub payments: Vec<PaymentLine>,
    pub notes: Option<String>,
    pub date: Date,
}

// =============================================================================
// REPAIRS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairStatus {
    Received,
    Diagnosing,
    AwaitingParts,
    InRepair,
    QualityControl,
    ReadyForPickup,
    Delivered,
}

impl RepairStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Diagnosing => "diagnosing",
            Self::AwaitingParts => "awaiting_parts",
            Self::InRepair => "in_repair",
            Self::QualityControl => "quality_control",
            Self::ReadyForPickup => "ready_for_pickup",
            Self::Delivered => "delivered",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "received" => Some(Self::Received),
            "diagnosing" => Some(Self::Diagnosing),
            "awaiting_parts" => Some(Self::AwaitingParts),
            "in_repair" => Some(Self::InRepair),
            "quality_control" => Some(Self::QualityControl),
            "ready_for_pickup" => Some(Self::ReadyForPickup),
            "delivered" => Some(Self::Delivered),
            _ => None,
        }
    }

    /// Workflow position, used as the sort key for the status column.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Received => 0,
            Self::Diagnosing => 1,
            Self::AwaitingParts => 2,
            Self::InRepair => 3,
            Self::QualityControl => 4,
            Self::ReadyForPickup => 5,
            Self::Delivered => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl RepairPriority {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            "urgent" => Some(Self::Urgent),
            _ => None,
        }
    }

    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
            Self::Urgent => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repair {
    pub id: Uuid,
    /// Display reference shown on the tracking screen, e.g. `RPR-1042`.
    pub ticket: String,
    pub customer_id: Uuid,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub description: String,
    pub status: RepairStatus,
    pub priority: RepairPriority,
    pub technician: Option<String>,
    pub estimate: f64,
    pub notes: Vec<String>,
    pub parts_required: Vec<String>,
    pub received_at: Date,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewRepair {
    pub customer_id: Uuid,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub description: String,
    pub priority: Option<RepairPriority>,
    pub technician: Option<String>,
    pub estimate: Option<f64>,
    #[serde(default)]
    pub parts_required: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepairPatch {
    pub status: Option<RepairStatus>,
    pub priority: Option<RepairPriority>,
    pub technician: Option<String>,
    pub estimate: Option<f64>,
    pub description: Option<String>,
    pub parts_required: Option<Vec<String>>,
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentKind {
    Consultation,
    Viewing,
    RepairDropOff,
    Collection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub kind: AppointmentKind,
    pub scheduled_at: OffsetDateTime,
    pub duration_minutes: u32,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAppointment {
    pub customer_id: Uuid,
    pub kind: AppointmentKind,
    pub scheduled_at: OffsetDateTime,
    pub duration_minutes: Option<u32>,
    pub notes: Option<String>,
}

// =============================================================================
// INVOICES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    /// Display-only: a Sent invoice past its due date. Never stored.
    Overdue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    /// Display number, e.g. `INV-2026-0001`.
    pub number: String,
    pub customer_id: Uuid,
    pub lines: Vec<InvoiceLine>,
    /// Percent, e.g. 8.25.
    pub tax_rate: f64,
    pub issued_on: Date,
    pub due_on: Date,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewInvoice {
    pub customer_id: Uuid,
    pub lines: Vec<InvoiceLine>,
    pub tax_rate: Option<f64>,
    pub issued_on: Option<Date>,
    pub due_on: Date,
}

// =============================================================================
// KANBAN
// =============================================================================

/// Column a card is grouped into. The board has exactly these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    Todo,
    InProgress,
    Done,
}

impl CardStatus {
    pub const COLUMNS: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }

    #[must_use]
    pub fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "todo" => Some(Self::Todo),
            "in_progress" => Some(Self::InProgress),
            "done" => Some(Self::Done),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: CardStatus,
    pub assignee: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCard {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<CardStatus>,
    pub assignee: Option<String>,
}

// =============================================================================
// TEAM
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffRole {
    Admin,
    Manager,
    SalesAssociate,
    Watchmaker,
}

impl StaffRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Manager => "manager",
            Self::SalesAssociate => "sales_associate",
            Self::Watchmaker => "watchmaker",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTeamMember {
    pub name: String,
    pub email: String,
    pub role: StaffRole,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamMemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<StaffRole>,
}

// =============================================================================
// UPLOADS
// =============================================================================

/// Transient attachment held in memory, addressed by a `mem://` handle.
/// Stands in for the dashboard's object-URL uploads; nothing touches disk.
#[derive(Debug, Clone, Serialize)]
pub struct StoredUpload {
    pub id: Uuid,
    /// Opaque handle handed back to the client, e.g. `mem://a1b2…`.
    pub url: String,
    pub filename: String,
    pub content_type: String,
    pub size_bytes: usize,
    pub uploaded_at: OffsetDateTime,
    #[serde(skip)]
    pub data: Vec<u8>,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
