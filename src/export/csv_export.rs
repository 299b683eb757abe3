//! CSV Export
//!
//! Writes queue entries, ward status and inventory items to CSV files.

use std::path::Path;

use super::ExportError;
use crate::data::{InventoryItem, QueueEntry, WardStatus};

/// Write queue entries to CSV file
pub fn write_queue(path: &Path, entries: &[QueueEntry]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["id", "name", "department", "wait_time"])?;

    for entry in entries {
        wtr.write_record([
            entry.id.to_string(),
            entry.name.to_string(),
            entry.department.to_string(),
            entry.wait_time.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(entries.len())
}

/// Write ward bed counts to CSV file
pub fn write_wards(path: &Path, wards: &[WardStatus]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["ward", "total", "available"])?;

    for ward in wards {
        wtr.write_record([
            ward.ward.to_string(),
            ward.total.to_string(),
            ward.available.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(wards.len())
}

/// Write inventory items to CSV file
pub fn write_inventory(path: &Path, items: &[InventoryItem]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["item", "stock", "unit"])?;

    for item in items {
        wtr.write_record([
            item.item.to_string(),
            item.stock.to_string(),
            item.unit.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(items.len())
}
