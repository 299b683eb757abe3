//! Export Module
//!
//! Writes the dataset behind the active view to disk.
//!
//! - 'e' key or `:export` triggers a CSV export of the active view
//! - `:export json` writes a JSON array instead
//! - Files are saved to the configured export directory
//!   (default: <data dir>/exports)
//!
//! Exports always contain the full dataset in declaration order; the
//! search text has no effect here either.

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::core::{Action, ExportFormat, NotifyLevel, View};
use crate::data::{INVENTORY, QUEUE, WARDS};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub records: usize,
}

/// File name prefix for a view's export
pub fn prefix(view: View) -> &'static str {
    match view {
        View::Queue => "queue",
        View::Beds => "beds",
        View::Inventory => "inventory",
    }
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// First path in `dir` for `file_name` that does not exist yet.
/// Repeats within the same second get a `-1`, `-2`, ... suffix.
fn unused_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }
    let (stem, extension) = file_name.rsplit_once('.').unwrap_or((file_name, ""));
    (1..)
        .map(|n| {
            if extension.is_empty() {
                dir.join(format!("{stem}-{n}"))
            } else {
                dir.join(format!("{stem}-{n}.{extension}"))
            }
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

/// Write `view`'s dataset into `dir`, creating the directory if needed
pub fn export_view(
    view: View,
    format: ExportFormat,
    dir: &Path,
) -> Result<ExportSummary, ExportError> {
    fs::create_dir_all(dir)?;

    let path = unused_path(dir, &generate_filename(prefix(view), format.extension()));

    let records = match (view, format) {
        (View::Queue, ExportFormat::Csv) => csv_export::write_queue(&path, QUEUE)?,
        (View::Beds, ExportFormat::Csv) => csv_export::write_wards(&path, WARDS)?,
        (View::Inventory, ExportFormat::Csv) => csv_export::write_inventory(&path, INVENTORY)?,
        (View::Queue, ExportFormat::Json) => json_export::write_records(&path, QUEUE)?,
        (View::Beds, ExportFormat::Json) => json_export::write_records(&path, WARDS)?,
        (View::Inventory, ExportFormat::Json) => json_export::write_records(&path, INVENTORY)?,
    };

    Ok(ExportSummary { path, records })
}

/// Export and turn the outcome into a status notification
pub fn export_action(view: View, format: ExportFormat, dir: &Path) -> Action {
    match export_view(view, format, dir) {
        Ok(summary) => {
            tracing::info!(
                path = %summary.path.display(),
                records = summary.records,
                "exported {}",
                prefix(view)
            );
            Action::Notify(
                format!(
                    "Exported {} {} rows to {}",
                    summary.records,
                    prefix(view),
                    summary.path.display()
                ),
                NotifyLevel::Info,
            )
        }
        Err(e) => {
            tracing::warn!(error = %e, "export of {} failed", prefix(view));
            Action::Notify(format!("Export failed: {}", e), NotifyLevel::Error)
        }
    }
}
