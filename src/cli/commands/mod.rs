pub mod add;
pub mod catalog;
pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod session;

use crate::config::Config;
use crate::journal::Journal;
use crate::ui::messages::warning;

/// Open the journal for logging; a broken journal never blocks a command.
pub(crate) fn open_journal(cfg: &Config) -> Option<Journal> {
    match Journal::open(&cfg.journal) {
        Ok(j) => Some(j),
        Err(e) => {
            warning(format!("Journal unavailable ({}): {}", cfg.journal, e));
            None
        }
    }
}
