use crate::cli::commands::open_journal;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::journal::log::ttlog_quiet;
use crate::store::open_store;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the sheet, with its header row, when it holds no rows yet
///  - the journal
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.sheet.as_deref(), cli.test)?;

    println!("⚙️  Initializing jobcard…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }

    //
    // 1️⃣ SHEET
    //
    let store = open_store(&cfg.sheet);
    let table = store.read()?;
    if table.is_empty() {
        store.write(&table)?;
    }
    println!("🗂️  Sheet      : {} ({} rows)", store.describe(), table.len());

    //
    // 2️⃣ JOURNAL (non bloccante)
    //
    if let Some(journal) = open_journal(&cfg) {
        println!("📜 Journal    : {}", cfg.journal);
        ttlog_quiet(
            &journal,
            "init",
            &store.describe(),
            &format!("Sheet initialized with {} rows", table.len()),
        );
    }

    println!("🎉 jobcard initialization completed!");
    Ok(())
}
