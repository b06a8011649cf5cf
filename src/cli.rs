use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bean Counter: define coffee recipes and price customized drinks.
#[derive(Parser, Debug)]
#[command(name = "bean_counter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the recipe catalog JSON file.
    #[arg(short, long, default_value = "recipes.json")]
    pub file: PathBuf,

    /// Log more detail to stderr (-v for info, -vv for debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Price a customized drink from the catalog.
    Price {
        /// Blend to price instead of choosing from the menu.
        #[arg(short, long)]
        blend: Option<String>,

        /// Also write the breakdown to this CSV file.
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Enter a new recipe and save it to the catalog.
    Add,

    /// List the recipes in the catalog.
    List,

    /// Show one recipe in full.
    Show {
        /// Blend name (case-insensitive).
        name: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Price {
            blend: None,
            export: None,
        }
    }
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
