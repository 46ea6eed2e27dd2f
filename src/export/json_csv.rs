// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::entries_to_rows;
use crate::models::TimeEntry;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, same shape as the data file.
pub(crate) fn export_json(entries: &[TimeEntry], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(entries)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    Ok(())
}

/// Export CSV (headers come from the serde field names).
pub(crate) fn export_csv(entries: &[TimeEntry], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in entries_to_rows(entries) {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
