use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::log::ttlog_quiet;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty JSON data file
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing TimeLoom…");

    let cfg = Config::init_all(cli.data.clone(), cli.test)?;
    let data_path = cfg.data_path();

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data file   : {}", data_path.display());

    ttlog_quiet(
        &data_path,
        "init",
        "",
        &format!("Data file initialized at {}", data_path.display()),
    );

    println!("🎉 TimeLoom initialization completed!");
    Ok(())
}
