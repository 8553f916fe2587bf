mod pipeline;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "brandpulse")]
#[command(about = "Brand relevance, sentiment and theme analysis for social posts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Filter, score and summarise posts for every brand (or one)
    Run {
        /// Restrict the run to a single brand (by id)
        #[arg(long)]
        brand: Option<String>,

        /// Classify and log per-brand counts without scoring or writing
        #[arg(long)]
        dry_run: bool,
    },
    /// List the configured brands
    Brands,
    /// Write the quality report and statistics for the raw dataset
    Report,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = brandpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Run { brand, dry_run } => {
            let summary = pipeline::run_pipeline(&config, brand.as_deref(), dry_run).await?;
            if dry_run {
                println!("dry-run: classified {} brands", summary.processed);
            } else {
                println!(
                    "run complete: {} brands processed, {} failed, {} combined rows",
                    summary.processed,
                    summary.failed.len(),
                    summary.combined_rows
                );
            }
        }
        Commands::Brands => pipeline::print_brands(&config)?,
        Commands::Report => {
            let stats = pipeline::run_report(&config)?;
            println!(
                "report written to {}: {} rows, {} duplicates",
                config.output_dir.display(),
                stats.total_rows,
                stats.duplicate_rows
            );
        }
    }

    Ok(())
}
