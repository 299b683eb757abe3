//! Static hospital datasets backing the three dashboard views.
//!
//! Every dataset is a fixed literal; nothing here is created, updated or
//! deleted at runtime. Slices preserve declaration order, which is also the
//! display and export order.

use serde::Serialize;

/// A patient waiting in the outpatient queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    pub id: u32,
    pub name: &'static str,
    pub department: &'static str,
    /// Display text, not a structured duration
    pub wait_time: &'static str,
}

/// Bed counts for a single ward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WardStatus {
    pub ward: &'static str,
    pub total: u32,
    pub available: u32,
}

impl WardStatus {
    /// `available <= total`. Not enforced on the literals below.
    pub fn is_consistent(&self) -> bool {
        self.available <= self.total
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub item: &'static str,
    pub stock: u32,
    pub unit: &'static str,
}

pub const QUEUE: &[QueueEntry] = &[
    QueueEntry {
        id: 1,
        name: "John Doe",
        department: "Cardiology",
        wait_time: "15 mins",
    },
    QueueEntry {
        id: 2,
        name: "Jane Smith",
        department: "Orthopedics",
        wait_time: "25 mins",
    },
    QueueEntry {
        id: 3,
        name: "Mike Johnson",
        department: "Pediatrics",
        wait_time: "10 mins",
    },
];

pub const WARDS: &[WardStatus] = &[
    WardStatus {
        ward: "General",
        total: 50,
        available: 15,
    },
    WardStatus {
        ward: "ICU",
        total: 20,
        available: 3,
    },
    WardStatus {
        ward: "Emergency",
        total: 30,
        available: 8,
    },
    WardStatus {
        ward: "Pediatric",
        total: 25,
        available: 12,
    },
];

pub const INVENTORY: &[InventoryItem] = &[
    InventoryItem {
        item: "Paracetamol",
        stock: 1500,
        unit: "tablets",
    },
    InventoryItem {
        item: "Bandages",
        stock: 500,
        unit: "rolls",
    },
    InventoryItem {
        item: "Syringes",
        stock: 2000,
        unit: "pieces",
    },
    InventoryItem {
        item: "Surgical Masks",
        stock: 5000,
        unit: "pieces",
    },
];
