use std::path::Path;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use bean_counter::cli::{Cli, Command};
use bean_counter::error::Result;
use bean_counter::export::export_receipt;
use bean_counter::interface::{
    build_customization, display_breakdown, display_catalog, display_recipe_summary,
    find_recipe, prompt_new_recipe, prompt_yes_no, select_recipe,
};
use bean_counter::pricing::price_drink;
use bean_counter::state::{load_recipes, read_recipes_or_empty, save_recipes, RecipeCatalog};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set and by `-v` otherwise.
fn init_logging(cli: &Cli) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Price { blend, export } => cmd_price(&cli.file, blend.as_deref(), export.as_deref()),
        Command::Add => cmd_add(&cli.file),
        Command::List => cmd_list(&cli.file),
        Command::Show { name } => cmd_show(&cli.file, &name),
    }
}

/// Price a customized drink against the catalog.
fn cmd_price(file_path: &Path, blend: Option<&str>, export: Option<&Path>) -> Result<()> {
    let catalog = RecipeCatalog::new(load_recipes(file_path));

    if catalog.is_empty() {
        println!(
            "No recipes found in {}. Please add recipes first.",
            file_path.display()
        );
        return Ok(());
    }

    let recipe = match blend {
        Some(name) => find_recipe(&catalog, name)?,
        None => select_recipe(&catalog)?,
    };

    let order = build_customization(recipe)?;
    let breakdown = price_drink(recipe, &order)?;

    display_breakdown(&breakdown);

    if let Some(path) = export {
        export_receipt(&breakdown, path)?;
        println!("Receipt written to {}", path.display());
    }

    Ok(())
}

/// Enter a new recipe, confirm it and save the catalog.
///
/// An existing catalog that cannot be read aborts before any prompt so it is
/// never overwritten.
fn cmd_add(file_path: &Path) -> Result<()> {
    let mut catalog = RecipeCatalog::new(read_recipes_or_empty(file_path)?);

    loop {
        let recipe = prompt_new_recipe(&catalog)?;
        display_recipe_summary(&recipe);

        if prompt_yes_no("Confirm and save?", true)? {
            catalog.add(recipe)?;
            save_recipes(file_path, catalog.recipes())?;
            println!("Recipe saved to {}!", file_path.display());
            return Ok(());
        }

        println!("Restarting entry...");
        println!();
    }
}

/// List the blends in the catalog.
fn cmd_list(file_path: &Path) -> Result<()> {
    let catalog = RecipeCatalog::new(load_recipes(file_path));
    display_catalog(&catalog);
    Ok(())
}

/// Show one recipe in full.
fn cmd_show(file_path: &Path, name: &str) -> Result<()> {
    let catalog = RecipeCatalog::new(load_recipes(file_path));
    let recipe = find_recipe(&catalog, name)?;
    display_recipe_summary(recipe);
    Ok(())
}
