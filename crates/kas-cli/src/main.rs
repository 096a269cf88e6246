//! CLI frontend for the Kaskade roll-table engine.

mod commands;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kas",
    about = "Kaskade — recursive roll-table resolution",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a table and print the flattened outcomes
    Roll {
        /// Table name (case-insensitive) or ID
        table: String,

        /// RNG seed for deterministic rolls
        #[arg(short, long)]
        seed: Option<u64>,

        /// Mark the draw as visible to privileged viewers only
        #[arg(short, long)]
        blind: bool,

        /// Directory containing table JSON files (default: current directory)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Print a request card asking someone else to roll a table
    Request {
        /// Table name (case-insensitive) or ID
        table: String,

        /// Hide which table is being rolled
        #[arg(short, long)]
        blind: bool,

        /// Include the table's description on the card
        #[arg(long)]
        description: bool,

        /// Directory containing table JSON files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List tables and compendium packs in the library
    List {
        /// Directory containing table JSON files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Show the entries of one table
    Show {
        /// Table name (case-insensitive) or ID
        table: String,

        /// Directory containing table JSON files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Validate formulas, ranges, references, and reference cycles
    Check {
        /// Directory containing table JSON files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            table,
            seed,
            blind,
            dir,
        } => commands::roll::run(&dir, &table, seed, blind).await,
        Commands::Request {
            table,
            blind,
            description,
            dir,
        } => commands::request::run(&dir, &table, blind, description),
        Commands::List { dir } => commands::list::run(&dir),
        Commands::Show { table, dir } => commands::show::run(&dir, &table),
        Commands::Check { dir } => commands::check::run(&dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
