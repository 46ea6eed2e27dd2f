use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let store = RecordStore::new(cfg.data_path());
        print!("{}", LogLogic::render_log(&store)?);
    }

    Ok(())
}
