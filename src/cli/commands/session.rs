use crate::cli::commands::add::{log_submission, report_success};
use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft::DraftState;
use crate::core::history::HistoryLogic;
use crate::core::session::{Reply, Session, SessionAction, parse_line};
use crate::core::submit::SubmitOptions;
use crate::errors::AppResult;
use crate::store::open_store;
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::colors::{GREY, RESET, colorize_optional, color_for_job_type};
use crate::utils::formatting::{bold, format_quantity};
use crate::utils::time::format_optional;
use std::io::{self, BufRead, Write};

const PROMPT: &str = "jobcard> ";

/// Interactive job card builder reading one action per line from stdin.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if !matches!(cmd, Commands::Session) {
        return Ok(());
    }

    let store = open_store(&cfg.sheet);
    let journal = open_journal(cfg);
    let mut session = Session::new(
        &cfg.catalog,
        store.as_ref(),
        SubmitOptions::from_config(cfg),
        cfg.history_rows,
    );

    header(format!("New job card ({})", store.describe()));
    info("Type `help` for the list of actions, `quit` to leave.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        io::stdout().flush().ok();

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line?;

        let action = match parse_line(&line) {
            Ok(Some(a)) => a,
            Ok(None) => continue,
            Err(msg) => {
                // clap renders help and usage errors as text already
                println!("{}", msg.trim_end());
                continue;
            }
        };

        let is_submit = matches!(action, SessionAction::Submit);
        let site = session.form().site.clone();
        let result = session.apply(action);

        if is_submit {
            let attempt = match &result {
                Ok(Reply::Submitted(o)) => Some(Ok(o)),
                Ok(_) => None,
                Err(e) => Some(Err(e)),
            };
            if let Some(attempt) = attempt {
                log_submission(journal.as_ref(), &store.describe(), &site, attempt);
            }
        }

        match result {
            Ok(Reply::Quit) => break,
            Ok(reply) => print_reply(&session, &reply, &cfg.none_label),
            Err(e) => error(e),
        }
    }

    if session.draft().state() == DraftState::Building {
        warning("Session closed with unsaved items: the draft was discarded.");
    }

    Ok(())
}

fn print_reply(session: &Session, reply: &Reply, none_label: &str) {
    match reply {
        Reply::MaterialAdded(item) => success(format!(
            "Added {} {} {} (#{})",
            format_quantity(item.quantity),
            item.unit,
            item.name,
            session.draft().materials().len()
        )),
        Reply::MaterialRemoved(Some(item)) => info(format!("Removed {}", item.name)),
        Reply::MaterialRemoved(None) => warning("No such material line; nothing removed."),
        Reply::TechnicianAdded { name, added: true } => success(format!("Added {}", name)),
        Reply::TechnicianAdded { name, added: false } => {
            info(format!("{} is already on this card.", name))
        }
        Reply::TechnicianRemoved(Some(t)) => info(format!("Removed {}", t.name)),
        Reply::TechnicianRemoved(None) => warning("No such technician; nothing removed."),
        Reply::Available(names) if names.is_empty() => {
            info("Every technician is already on this card.")
        }
        Reply::Available(names) => info(format!("Available: {}", names.join(", "))),
        Reply::FieldSet { field, value } => info(format!("{} set to {}", field, value)),
        Reply::Card => print_card(session, none_label),
        Reply::Submitted(outcome) => report_success(outcome),
        Reply::History(records) if records.is_empty() => info("No job cards saved yet."),
        Reply::History(records) => print!("{}", HistoryLogic::render(records)),
        Reply::Quit => {}
    }
}

fn print_card(session: &Session, none_label: &str) {
    let form = session.form();
    let draft = session.draft();
    let type_label = form.job_type.as_str();

    println!(
        "{} {}{}{} | {} | {} | {}-{}",
        bold("Card:"),
        color_for_job_type(type_label),
        type_label,
        RESET,
        form.date,
        form.site,
        colorize_optional(&format_optional(form.start_time), "--:--"),
        colorize_optional(&format_optional(form.end_time), "--:--"),
    );
    println!(
        "{} {}",
        bold("Work:"),
        colorize_optional(form.work_description.trim(), "(no description)")
    );

    println!("{}", bold("Materials:"));
    if draft.materials().is_empty() {
        println!("  {GREY}{none_label}{RESET}");
    }
    for (i, m) in draft.materials().iter().enumerate() {
        println!(
            "  {}. {} ({} {})",
            i + 1,
            m.name,
            format_quantity(m.quantity),
            m.unit
        );
    }

    println!("{}", bold("Technicians:"));
    if draft.technicians().is_empty() {
        println!("  {GREY}none yet{RESET}");
    }
    for (i, t) in draft.technicians().iter().enumerate() {
        println!("  {}. {}", i + 1, t.name);
    }
}
