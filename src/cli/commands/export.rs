use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = RecordStore::new(cfg.data_path());
        let target = file.as_deref().unwrap_or(&cfg.export_file);
        ExportLogic::export(&store, *format, target, *force)?;
    }
    Ok(())
}
