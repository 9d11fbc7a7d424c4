use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        // Path del file di configurazione
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `jobcard init`.",
                    path.display()
                ));
            } else {
                let missing = Config::missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields (defaults used): {}",
                        missing.join(", ")
                    ));
                }
            }
            // il catalogo è già stato validato al caricamento
            info(format!(
                "Catalog OK: {} sites, {} technicians, {} materials, {} units",
                cfg.catalog.sites.len(),
                cfg.catalog.technicians.len(),
                cfg.catalog.materials.len(),
                cfg.catalog.units.len()
            ));
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit_file(&path, editor.as_deref())?;
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open `path` with the requested editor, then with the default one.
fn edit_file(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let mut candidates = Vec::new();
    if let Some(e) = requested {
        candidates.push(e.to_string());
    }
    if !candidates.contains(&fallback) {
        candidates.push(fallback);
    }

    for (i, editor) in candidates.iter().enumerate() {
        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited with '{}'", editor));
                return Ok(());
            }
            _ if i + 1 < candidates.len() => {
                warning(format!(
                    "Editor '{}' not available, trying '{}'",
                    editor,
                    candidates[i + 1]
                ));
            }
            _ => {}
        }
    }

    Err(AppError::Config(format!(
        "failed to edit {} (tried: {})",
        path.display(),
        candidates.join(", ")
    )))
}
