use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Catalog) {
        let catalog = &cfg.catalog;

        header("Catalog");

        println!("{}", bold("Sites"));
        for s in &catalog.sites {
            println!("  - {s}");
        }

        println!("\n{}", bold("Technicians"));
        for t in &catalog.technicians {
            println!("  - {t}");
        }

        println!("\n{}", bold("Materials"));
        for m in &catalog.materials {
            println!(
                "  - {} [{}, default unit: {}]",
                m.name,
                m.category.as_str(),
                catalog.default_unit(m.category)
            );
        }

        println!("\n{}", bold("Units"));
        println!("  {}", catalog.units.join(", "));
    }
    Ok(())
}
