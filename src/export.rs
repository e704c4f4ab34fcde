//! CSV export.
//!
//! Serializes the assembled table verbatim: one CSV record per row, in the
//! order the core produced them. Quoting and escaping are the csv crate's
//! concern; this module never reorders or reformats cells.

use log::debug;
use std::path::Path;

/// Write the assembled table to a CSV file.
pub fn write_csv(table: &[Vec<String>], path: &Path) -> Result<(), String> {
    debug!("writing {} rows to {}", table.len(), path.display());

    let mut writer =
        csv::Writer::from_path(path).map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;

    for row in table {
        writer.write_record(row).map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
    }

    writer.flush().map_err(|e| format!("Failed to flush {}: {}", path.display(), e))?;

    Ok(())
}
