use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ReportLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::report::{
    render_bar_chart, render_category_summary, render_entries_table, render_heatmap,
};
use crate::utils::date;

/// Read-only views: list, summary, chart, heatmap.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(cfg.data_path());
    let entries = store.load();

    let out = match cmd {
        Commands::List => render_entries_table(&entries, &cfg.separator_char),
        Commands::Summary => render_category_summary(&ReportLogic::category_totals(&entries)),
        Commands::Chart => render_bar_chart(&ReportLogic::category_totals(&entries)),
        Commands::Heatmap => render_heatmap(&entries, date::today()),
        _ => return Ok(()),
    };

    print!("{out}");
    Ok(())
}
