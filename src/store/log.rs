//! Internal audit log: one JSON object per line, stored next to the data file.

use crate::errors::AppResult;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Path of the audit log belonging to `data_file` (`data.json` → `data.log`).
///
/// Never the data file itself: `records.log` logs to `records.audit.log`.
pub fn log_path(data_file: &Path) -> PathBuf {
    let path = data_file.with_extension("log");
    if path == data_file {
        data_file.with_extension("audit.log")
    } else {
        path
    }
}

/// Append an internal log line.
pub fn ttlog(data_file: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let record = LogRecord {
        date: Local::now().to_rfc3339(),
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    let path = log_path(data_file);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    writeln!(file, "{}", serde_json::to_string(&record)?)?;
    Ok(())
}

/// Same as [`ttlog`] but never fails: problems are only reported.
pub fn ttlog_quiet(data_file: &Path, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(data_file, operation, target, message) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }
}

/// Read back all log records, skipping lines that do not parse.
pub fn read_log(data_file: &Path) -> AppResult<Vec<LogRecord>> {
    let path = log_path(data_file);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str(l).ok())
        .collect())
}
