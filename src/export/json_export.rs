//! JSON Export

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use super::ExportError;

/// Write records to a JSON file as a pretty-printed array
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<usize, ExportError> {
    let json = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    Ok(records.len())
}
