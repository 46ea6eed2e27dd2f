// src/export/model.rs

use crate::models::TimeEntry;
use crate::models::entry::round2;
use serde::Serialize;

/// Flat row used by the CSV export; field names are the CSV headers.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Start")]
    pub start: String,
    #[serde(rename = "End")]
    pub end: String,
    #[serde(rename = "Duration (mins)")]
    pub duration_mins: f64,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            task: e.task.clone(),
            category: e.category.clone(),
            start: e.start_str(),
            end: e.end_str(),
            duration_mins: round2(e.minutes()),
        }
    }
}

pub(crate) fn entries_to_rows(entries: &[TimeEntry]) -> Vec<EntryExport> {
    entries.iter().map(EntryExport::from).collect()
}
