use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use taigi_db_builder::config::BuildConfig;
use taigi_db_builder::constants;
use taigi_db_builder::error::{BuildError, Result};
use taigi_db_builder::fetcher::Fetcher;
use taigi_db_builder::logging;
use taigi_db_builder::pipeline::Pipeline;
use taigi_db_builder::sources::{create_source, DictionarySource};

#[derive(Parser)]
#[command(name = "taigi_db_builder")]
#[command(about = "Builds the Chha Tai-gi search database from ChhoeTaigi CSV sources")]
#[command(version = "0.1.0")]
struct Cli {
    /// Optional TOML config file overriding the default build/public paths
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full fetch + parse + write pipeline
    Build {
        /// Specific databases to build (comma-separated). Available: maryknoll
        #[arg(long)]
        dbs: Option<String>,
        /// Re-download source CSVs even when a cached copy exists
        #[arg(long)]
        force_refresh: bool,
    },
    /// Only download missing source CSVs into the build directory
    Fetch {
        /// Specific databases to fetch (comma-separated)
        #[arg(long)]
        dbs: Option<String>,
        /// Re-download source CSVs even when a cached copy exists
        #[arg(long)]
        force_refresh: bool,
    },
}

fn resolve_sources(dbs: Option<String>) -> Result<Vec<Box<dyn DictionarySource>>> {
    let names: Vec<String> = match dbs {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => vec![constants::MARYKNOLL_DB.to_string()], // Default
    };

    names
        .into_iter()
        .map(|name| create_source(&name).ok_or_else(|| BuildError::UnknownDatabase(name)))
        .collect()
}

fn load_config(path: Option<&PathBuf>) -> Result<BuildConfig> {
    match path {
        Some(path) => BuildConfig::load(path),
        None => Ok(BuildConfig::default()),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build { dbs, force_refresh } => {
            let mut config = load_config(cli.config.as_ref())?;
            config.force_refresh |= force_refresh;
            let sources = resolve_sources(dbs)?;

            println!("🚀 Building search databases...");
            for source in &sources {
                let result = Pipeline::run_for_source(source.as_ref(), &config)?;
                info!("Build finished for {}", result.database);

                println!("\n📊 Build results for {}:", result.database);
                println!("   Entries: {}", result.entry_count);
                println!("   Fetched from network: {}", result.fetched);
                println!("   Output file: {}", result.output_file.display());
            }
            println!("\n✅ All databases built successfully");
        }
        Commands::Fetch { dbs, force_refresh } => {
            let mut config = load_config(cli.config.as_ref())?;
            config.force_refresh |= force_refresh;
            let sources = resolve_sources(dbs)?;

            println!("📥 Fetching source CSVs...");
            let fetcher = Fetcher::new(&config)?;
            for source in &sources {
                if fetcher.ensure_cached(source.as_ref(), &config)? {
                    println!("   Downloaded {}", source.csv_filename());
                } else {
                    println!("   Reused cached copy of {}", source.csv_filename());
                }
            }
            println!("✅ All source CSVs present");
        }
    }
    Ok(())
}

fn main() {
    logging::init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("Build failed: {}", e);
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}
