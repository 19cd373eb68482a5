//! Demo dataset loaded at startup.
//!
//! The screens all render from in-memory data; this module is where
//! that data comes from. Quantities are small on purpose: enough for
//! every list, filter, and column to show something.

use time::macros::{date, datetime};
use tracing::info;
use uuid::Uuid;

use crate::models::{
    Appointment, AppointmentKind, AppointmentStatus, Card, CardStatus, Customer, CustomerStatus,
    Invoice, InvoiceLine, InvoiceStatus, PaymentLine, PaymentMethod, PaymentStatus, Repair,
    RepairPriority, RepairStatus, Sale, SaleKind, StaffRole, Supplier, SupplierStatus,
    SupplierType, TeamMember, VipTier, Watch, WatchCondition, WatchStatus,
};
use crate::state::AppState;

fn customer(
    name: &str,
    email: &str,
    phone: &str,
    vip_tier: Option<VipTier>,
    preferences: &[&str],
    created_at: time::Date,
) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        email: Some(email.to_owned()),
        phone: Some(phone.to_owned()),
        address: None,
        status: CustomerStatus::Active,
        vip_tier,
        preferences: preferences.iter().map(|&p| p.to_owned()).collect(),
        notes: None,
        created_at,
    }
}

#[allow(clippy::too_many_arguments)]
fn watch(
    brand: &str,
    model: &str,
    reference: &str,
    serial: &str,
    condition: WatchCondition,
    price: f64,
    status: WatchStatus,
    supplier_id: Option<Uuid>,
    year: i32,
) -> Watch {
    Watch {
        id: Uuid::new_v4(),
        brand: brand.to_owned(),
        model: model.to_owned(),
        reference: reference.to_owned(),
        serial_number: serial.to_owned(),
        condition,
        price,
        status,
        supplier_id,
        year: Some(year),
        image_urls: Vec::new(),
    }
}

fn card(title: &str, status: CardStatus, assignee: Option<&str>, created_at: time::OffsetDateTime) -> Card {
    Card {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: None,
        status,
        assignee: assignee.map(str::to_owned),
        created_at,
    }
}

/// Populate the directory with the demo dataset.
pub async fn load_demo_data(state: &AppState) {
    let mut directory = state.directory.write().await;

    // Customers.
    let amelia = customer(
        "Amelia Fontaine",
        "amelia.fontaine@example.com",
        "+41 22 555 0147",
        Some(VipTier::Platinum),
        &["Patek Philippe", "Audemars Piguet"],
        date!(2024 - 11 - 03),
    );
    let james = customer(
        "James Okafor",
        "james.okafor@example.com",
        "+44 20 7946 0812",
        Some(VipTier::Gold),
        &["Rolex"],
        date!(2025 - 02 - 18),
    );
    let sofia = customer(
        "Sofia Lindgren",
        "sofia.lindgren@example.com",
        "+46 8 555 0193",
        Some(VipTier::Silver),
        &["Omega", "Tudor"],
        date!(2025 - 09 - 27),
    );
    let daniel = customer(
        "Daniel Reyes",
        "daniel.reyes@example.com",
        "+1 305 555 0166",
        None,
        &[],
        date!(2026 - 01 - 12),
    );
    let harriet = customer(
        "Harriet Bloom",
        "harriet.bloom@example.com",
        "+1 212 555 0110",
        None,
        &["Cartier"],
        date!(2026 - 04 - 08),
    );

    // Suppliers.
    let geneva = Supplier {
        id: Uuid::new_v4(),
        name: "Geneva Horology SA".to_owned(),
        supplier_type: SupplierType::AuthorizedDealer,
        contact_name: Some("Luc Perrin".to_owned()),
        email: Some("luc@genevahorology.example".to_owned()),
        phone: Some("+41 22 555 0120".to_owned()),
        status: SupplierStatus::Active,
    };
    let harbor = Supplier {
        id: Uuid::new_v4(),
        name: "Harbor Grey Trading".to_owned(),
        supplier_type: SupplierType::GreyMarket,
        contact_name: Some("Mei Tan".to_owned()),
        email: Some("mei@harborgrey.example".to_owned()),
        phone: None,
        status: SupplierStatus::Active,
    };
    let basel = Supplier {
        id: Uuid::new_v4(),
        name: "Basel Parts GmbH".to_owned(),
        supplier_type: SupplierType::PartsVendor,
        contact_name: None,
        email: Some("orders@baselparts.example".to_owned()),
        phone: Some("+41 61 555 0101".to_owned()),
        status: SupplierStatus::Inactive,
    };

    // Inventory.
    let submariner = watch(
        "Rolex",
        "Submariner Date",
        "126610LN",
        "7J82K41X",
        WatchCondition::Excellent,
        14_800.0,
        WatchStatus::InStock,
        Some(harbor.id),
        2023,
    );
    let nautilus = watch(
        "Patek Philippe",
        "Nautilus",
        "5811/1G",
        "PP5811204",
        WatchCondition::New,
        118_000.0,
        WatchStatus::Reserved,
        Some(geneva.id),
        2025,
    );
    let speedmaster = watch(
        "Omega",
        "Speedmaster Professional",
        "310.30.42.50.01.001",
        "88211703",
        WatchCondition::Good,
        6_900.0,
        WatchStatus::InStock,
        Some(geneva.id),
        2021,
    );
    let santos = watch(
        "Cartier",
        "Santos de Cartier",
        "WSSA0018",
        "CRT440291",
        WatchCondition::Excellent,
        7_400.0,
        WatchStatus::Sold,
        None,
        2022,
    );
    let black_bay = watch(
        "Tudor",
        "Black Bay 58",
        "M79030N-0001",
        "TDR58A227",
        WatchCondition::Good,
        3_600.0,
        WatchStatus::InStock,
        Some(harbor.id),
        2020,
    );
    let royal_oak = watch(
        "Audemars Piguet",
        "Royal Oak",
        "15510ST",
        "AP1551088",
        WatchCondition::New,
        52_000.0,
        WatchStatus::OnOrder,
        Some(geneva.id),
        2026,
    );

    // Sales history. Santos went to Harriet last month; Sofia traded a
    // Speedmaster earlier this year.
    let santos_sale = Sale {
        id: Uuid::new_v4(),
        kind: SaleKind::Sell,
        customer_id: harriet.id,
        watch_id: santos.id,
        trade_in_watch_id: None,
        amount: 7_992.0,
        payment_method: PaymentMethod::Card,
        payment_status: PaymentStatus::Paid,
        payments: vec![
            PaymentLine { method: PaymentMethod::Card, amount: 5_000.0 },
            PaymentLine { method: PaymentMethod::WireTransfer, amount: 2_992.0 },
        ],
        notes: Some("Anniversary gift".to_owned()),
        date: date!(2026 - 07 - 09),
    };
    let speedmaster_buy = Sale {
        id: Uuid::new_v4(),
        kind: SaleKind::Buy,
        customer_id: sofia.id,
        watch_id: speedmaster.id,
        trade_in_watch_id: None,
        amount: 4_100.0,
        payment_method: PaymentMethod::WireTransfer,
        payment_status: PaymentStatus::Paid,
        payments: Vec::new(),
        notes: None,
        date: date!(2026 - 03 - 22),
    };

    // Repairs across the workflow.
    let repairs = [
        (
            &james,
            "Rolex",
            "GMT-Master II",
            "RLX16710B",
            "gains 12s/day, full service requested",
            RepairStatus::InRepair,
            RepairPriority::High,
            Some("Dana Whitfield"),
            1_150.0,
            date!(2026 - 07 - 18),
        ),
        (
            &amelia,
            "Patek Philippe",
            "Calatrava",
            "PP5227G11",
            "crown winds rough",
            RepairStatus::AwaitingParts,
            RepairPriority::Urgent,
            Some("Felix Arnaud"),
            2_400.0,
            date!(2026 - 07 - 25),
        ),
        (
            &sofia,
            "Omega",
            "Seamaster 300M",
            "OM21030422",
            "helium valve replacement",
            RepairStatus::Diagnosing,
            RepairPriority::Medium,
            Some("Dana Whitfield"),
            480.0,
            date!(2026 - 07 - 30),
        ),
        (
            &daniel,
            "Seiko",
            "Presage",
            "SK4R35C02",
            "cracked crystal",
            RepairStatus::ReadyForPickup,
            RepairPriority::Low,
            Some("Felix Arnaud"),
            210.0,
            date!(2026 - 06 - 29),
        ),
        (
            &harriet,
            "Cartier",
            "Tank Must",
            "CRT331190",
            "battery and reseal",
            RepairStatus::Received,
            RepairPriority::Medium,
            None,
            160.0,
            date!(2026 - 08 - 03),
        ),
    ];
    for (owner, brand, model, serial, description, status, priority, technician, estimate, received_at) in repairs
    {
        let ticket = directory.next_repair_ticket();
        directory.repairs.push(Repair {
            id: Uuid::new_v4(),
            ticket,
            customer_id: owner.id,
            brand: brand.to_owned(),
            model: model.to_owned(),
            serial_number: serial.to_owned(),
            description: description.to_owned(),
            status,
            priority,
            technician: technician.map(str::to_owned),
            estimate,
            notes: Vec::new(),
            parts_required: Vec::new(),
            received_at,
        });
    }

    // Appointments.
    directory.appointments.extend([
        Appointment {
            id: Uuid::new_v4(),
            customer_id: amelia.id,
            kind: AppointmentKind::Viewing,
            scheduled_at: datetime!(2026-08-12 14:00 UTC),
            duration_minutes: 60,
            status: AppointmentStatus::Scheduled,
            notes: Some("Nautilus allocation discussion".to_owned()),
        },
        Appointment {
            id: Uuid::new_v4(),
            customer_id: daniel.id,
            kind: AppointmentKind::Collection,
            scheduled_at: datetime!(2026-08-07 11:00 UTC),
            duration_minutes: 30,
            status: AppointmentStatus::Scheduled,
            notes: None,
        },
        Appointment {
            id: Uuid::new_v4(),
            customer_id: sofia.id,
            kind: AppointmentKind::RepairDropOff,
            scheduled_at: datetime!(2026-07-30 10:00 UTC),
            duration_minutes: 30,
            status: AppointmentStatus::Completed,
            notes: None,
        },
    ]);

    // Invoices.
    let paid_number = directory.next_invoice_number(2026);
    let sent_number = directory.next_invoice_number(2026);
    directory.invoices.extend([
        Invoice {
            id: Uuid::new_v4(),
            number: paid_number,
            customer_id: harriet.id,
            lines: vec![InvoiceLine {
                description: "Cartier Santos de Cartier WSSA0018".to_owned(),
                quantity: 1,
                unit_price: 7_400.0,
            }],
            tax_rate: 8.0,
            issued_on: date!(2026 - 07 - 09),
            due_on: date!(2026 - 07 - 23),
            status: InvoiceStatus::Paid,
        },
        Invoice {
            id: Uuid::new_v4(),
            number: sent_number,
            customer_id: james.id,
            lines: vec![
                InvoiceLine {
                    description: "GMT-Master II full service".to_owned(),
                    quantity: 1,
                    unit_price: 1_150.0,
                },
                InvoiceLine { description: "Bracelet refinish".to_owned(), quantity: 1, unit_price: 180.0 },
            ],
            tax_rate: 8.0,
            issued_on: date!(2026 - 07 - 20),
            due_on: date!(2026 - 08 - 03),
            status: InvoiceStatus::Sent,
        },
    ]);

    // Kanban.
    directory.cards.extend([
        card(
            "Chase AP allocation confirmation",
            CardStatus::Todo,
            Some("Priya Shah"),
            datetime!(2026-08-01 09:00 UTC),
        ),
        card(
            "Photograph new arrivals for site",
            CardStatus::Todo,
            None,
            datetime!(2026-08-02 09:30 UTC),
        ),
        card(
            "Draft summer trunk show invite list",
            CardStatus::InProgress,
            Some("Marco Deluca"),
            datetime!(2026-07-28 16:00 UTC),
        ),
        card(
            "Renew insurance appraisal schedule",
            CardStatus::Done,
            Some("Priya Shah"),
            datetime!(2026-07-15 10:00 UTC),
        ),
    ]);

    // Team.
    let team = [
        ("Priya Shah", "priya@chronodesk.example", StaffRole::Manager),
        ("Marco Deluca", "marco@chronodesk.example", StaffRole::SalesAssociate),
        ("Dana Whitfield", "dana@chronodesk.example", StaffRole::Watchmaker),
        ("Felix Arnaud", "felix@chronodesk.example", StaffRole::Watchmaker),
        ("Noor Al-Sayed", "noor@chronodesk.example", StaffRole::Admin),
    ];
    for (name, email, role) in team {
        directory.team.push(TeamMember {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            email: email.to_owned(),
            role,
            active: true,
        });
    }

    directory.customers.extend([amelia, james, sofia, daniel, harriet]);
    directory.suppliers.extend([geneva, harbor, basel]);
    directory
        .watches
        .extend([submariner, nautilus, speedmaster, santos, black_bay, royal_oak]);
    directory.sales.extend([speedmaster_buy, santos_sale]);

    info!(
        customers = directory.customers.len(),
        watches = directory.watches.len(),
        repairs = directory.repairs.len(),
        "demo data loaded"
    );
}
