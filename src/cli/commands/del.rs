use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { index, yes } = cmd {
        let store = RecordStore::new(cfg.data_path());

        let Some(entry) = store.get(*index) else {
            warning("Invalid entry number.");
            return Ok(());
        };

        let prompt = format!(
            "Delete entry #{} '{}' ({})? This action is irreversible.",
            index, entry.task, entry.category
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if DeleteLogic::apply(&store, *index)? {
            success(format!("Entry #{} deleted.", index));
        } else {
            warning("Invalid entry number.");
        }
    }

    Ok(())
}
