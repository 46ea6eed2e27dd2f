use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::tui;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(cfg.data_path());
    tui::run(store, cfg)
}
