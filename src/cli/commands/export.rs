use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::journal::log::ttlog_quiet;
use crate::store::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = open_store(&cfg.sheet);
        let rows = ExportLogic::export(store.as_ref(), *format, file, *force)?;

        if let Some(journal) = open_journal(cfg) {
            ttlog_quiet(
                &journal,
                "export",
                format.as_str(),
                &format!("Exported {} rows to {}", rows, file),
            );
        }
    }
    Ok(())
}
