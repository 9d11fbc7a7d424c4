//! jobcard library root.
//! Exposes the CLI parser, the high-level run() function and the job card
//! core (draft, submission pipeline, sheet stores) for embedding.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod journal;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Catalog => cli::commands::catalog::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Session => cli::commands::session::handle(&cli.command, cfg),
        Commands::History { .. } => cli::commands::history::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta (catalogo validato qui)
    let mut cfg = Config::load()?;

    // 3️⃣ applica eventuale override dello sheet (stessa risoluzione di `init`)
    if let Some(custom_sheet) = &cli.sheet {
        cfg.sheet = Config::resolve_sheet(custom_sheet);
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
