use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "resort-indexer")]
#[command(
    about = "Derive search and filter indexes for resort records and migrate them to a document store",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enrich records and write them into a document-store directory
    Migrate {
        /// JSON file holding an array of authored records
        input: PathBuf,
        /// Target collection name
        #[arg(short, long)]
        collection: String,
        /// Store root; each document lands at <OUT>/<collection>/<id>.json
        #[arg(short, long, default_value = "store")]
        out: PathBuf,
        /// Validate and enrich without writing anything
        #[arg(long)]
        dry_run: bool,
        /// TOML file overriding indexer tunables
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate every record and report the ones a migration would skip
    Check {
        /// JSON file holding an array of authored records
        input: PathBuf,
        /// TOML file overriding indexer tunables
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
