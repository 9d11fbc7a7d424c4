use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{header, info};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { last } = cmd {
        let store = open_store(&cfg.sheet);
        let n = last.unwrap_or(cfg.history_rows);
        let records = HistoryLogic::recent(store.as_ref(), n)?;

        if records.is_empty() {
            info(format!("No job cards saved yet in {}", store.describe()));
            return Ok(());
        }

        header(format!("Last {} job cards", records.len()));
        print!("{}", HistoryLogic::render(&records));
    }
    Ok(())
}
