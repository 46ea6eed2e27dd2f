// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::confirm_overwrite;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::TimeEntry;
use crate::store::RecordStore;
use crate::store::log::ttlog_quiet;
use crate::ui::messages::{info, warning};
use std::path::{Path, PathBuf};

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every stored entry to `file`, asking before overwriting
    /// unless `force` is set.
    ///
    /// Returns the written path, or `None` when there was nothing to export.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let entries = store.load();
        if entries.is_empty() {
            warning("No data to export.");
            return Ok(None);
        }

        let path = Path::new(file);
        if !confirm_overwrite(path, force)? {
            return Err(AppError::Export(
                "Export cancelled: existing file not overwritten".into(),
            ));
        }

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        let written = write_entries(store, &entries, format, path)?;
        notify_export_success(&format.as_str().to_uppercase(), &written);

        Ok(Some(written))
    }

    /// Export without prompting or printing (used by the dashboard).
    pub fn export_silent(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
    ) -> AppResult<Option<PathBuf>> {
        let entries = store.load();
        if entries.is_empty() {
            return Ok(None);
        }
        write_entries(store, &entries, format, Path::new(file)).map(Some)
    }
}

fn write_entries(
    store: &RecordStore,
    entries: &[TimeEntry],
    format: ExportFormat,
    path: &Path,
) -> AppResult<PathBuf> {
    match format {
        ExportFormat::Csv => export_csv(entries, path)?,
        ExportFormat::Json => export_json(entries, path)?,
    }

    let written = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    ttlog_quiet(
        store.path(),
        "export",
        &written.to_string_lossy(),
        &format!("Exported {} entries as {}", entries.len(), format.as_str()),
    );

    Ok(written)
}
