use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryChanges};
use crate::errors::{AppError, AppResult};
use crate::models::entry::parse_timestamp;
use crate::store::RecordStore;
use crate::ui::messages::{success, warning};
use crate::utils::formatting::format_mins;
use chrono::NaiveDateTime;

fn parse_optional_timestamp(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    match input {
        Some(s) => parse_timestamp(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidTimestamp(s.to_string())),
        None => Ok(None),
    }
}

/// Update an existing entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        index,
        task,
        category,
        start,
        end,
    } = cmd
    {
        let changes = EntryChanges {
            task: task.clone(),
            category: category.clone(),
            start: parse_optional_timestamp(start.as_ref())?,
            end: parse_optional_timestamp(end.as_ref())?,
        };

        let store = RecordStore::new(cfg.data_path());

        match EditLogic::apply(&store, *index, changes)? {
            Some(entry) => success(format!(
                "Entry #{} updated: '{}' ({}) {} mins",
                index,
                entry.task,
                entry.category,
                format_mins(entry.minutes())
            )),
            None => warning("Invalid entry number."),
        }
    }

    Ok(())
}
