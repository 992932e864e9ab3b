use std::path::Path;

use clap::Parser;
use resort_indexer::cli::{Cli, Commands};
use resort_indexer::config::IndexerConfig;
use resort_indexer::driver::{load_records, run_migration};
use resort_indexer::error::Result;
use resort_indexer::index;
use resort_indexer::store::{DirStore, MemoryStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr so reports on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate {
            input,
            collection,
            out,
            dry_run,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            let records = load_records(&input).await?;
            tracing::info!("Loaded {} records from {}", records.len(), input.display());

            let report = if dry_run {
                let mut store = MemoryStore::new();
                run_migration(records, &mut store, &collection, &config).await
            } else {
                let mut store = DirStore::new(&out);
                run_migration(records, &mut store, &collection, &config).await
            };

            println!("{} written, {} skipped", report.written, report.skipped);
        }
        Commands::Check { input, config } => {
            let config = load_config(config.as_deref())?;
            let records = load_records(&input).await?;
            let total = records.len();
            let mut invalid = 0usize;

            for record in records {
                let id = record.id.clone();
                if let Err(e) = index::enrich(record, &config) {
                    invalid += 1;
                    println!("INVALID {id}: {e}");
                }
            }

            println!("{} of {} records valid", total - invalid, total);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<IndexerConfig> {
    match path {
        Some(path) => IndexerConfig::load(path),
        None => Ok(IndexerConfig::default()),
    }
}
