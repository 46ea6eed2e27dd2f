use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::models::entry::{TIMESTAMP_FORMAT, minutes_between};
use crate::store::RecordStore;
use crate::store::log::ttlog_quiet;
use chrono::NaiveDateTime;

/// Fields to change on an existing entry; `None` keeps the stored value.
#[derive(Debug, Default, Clone)]
pub struct EntryChanges {
    pub task: Option<String>,
    pub category: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

pub struct EditLogic;

impl EditLogic {
    /// Apply `changes` to entry `index` and write it back.
    ///
    /// Returns `Ok(None)` when the index is out of range. The duration is
    /// recomputed whenever the resulting entry has both start and end.
    pub fn apply(
        store: &RecordStore,
        index: usize,
        changes: EntryChanges,
    ) -> AppResult<Option<TimeEntry>> {
        let Some(mut entry) = store.get(index) else {
            return Ok(None);
        };

        if let Some(task) = changes.task {
            entry.task = task.trim().to_string();
        }
        if let Some(category) = changes.category {
            entry.category = category.trim().to_string();
        }
        if entry.task.is_empty() || entry.category.is_empty() {
            return Err(AppError::MissingTaskOrCategory);
        }
        if let Some(start) = changes.start {
            entry.start = start;
        }
        if let Some(end) = changes.end {
            entry.end = Some(end);
        }

        if let Some(end) = entry.end {
            if end < entry.start {
                return Err(AppError::InvalidRange {
                    start: entry.start.format(TIMESTAMP_FORMAT).to_string(),
                    end: end.format(TIMESTAMP_FORMAT).to_string(),
                });
            }
            entry.duration_mins = Some(minutes_between(entry.start, end));
        }

        if !store.replace(index, &entry)? {
            return Ok(None);
        }

        ttlog_quiet(
            store.path(),
            "edit",
            &format!("#{index}"),
            &format!("Updated '{}' ({})", entry.task, entry.category),
        );
        Ok(Some(entry))
    }
}
