use crate::cli::menu::MenuSession;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use std::io;

/// Run the interactive menu on stdin/stdout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(cfg.data_path());
    let stdin = io::stdin();
    let mut session = MenuSession::new(&store, &cfg.separator_char, stdin.lock(), io::stdout());
    session.run()
}
