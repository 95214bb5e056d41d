use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, instrument};

use crate::config::BuildConfig;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::output;
use crate::parser::Parser;
use crate::sources::DictionarySource;

/// Result of a complete build run for one source database.
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub database: String,
    pub entry_count: usize,
    pub fetched: bool,
    pub output_file: PathBuf,
}

pub struct Pipeline;

impl Pipeline {
    /// Run the complete fetch → parse → serialize → write pipeline for one
    /// source database. Stages run sequentially; the first failure aborts
    /// the run with no partial output.
    #[instrument(skip(source, config), fields(database = %source.name()))]
    pub fn run_for_source(
        source: &dyn DictionarySource,
        config: &BuildConfig,
    ) -> Result<PipelineResult> {
        info!("Starting build");

        // Step 1: make sure a local copy of the source CSV exists
        println!("📡 Checking source CSV for {}...", source.name());
        let fetcher = Fetcher::new(config)?;
        let fetched = fetcher.ensure_cached(source, config)?;

        // Step 2: parse and normalize
        println!("🔍 Parsing {}...", source.csv_filename());
        let content = Parser::read_cached_csv(&config.cache_path(source))?;
        let entries = Parser::parse(source, &content)?;
        println!("✅ Parsed {} entries", entries.len());

        // Step 3: serialize
        let json = output::to_json(&entries)?;

        // Step 4: write the artifact
        let output_file = output::write_artifact(source, &json, config)?;
        println!("💾 Saved database to {}", output_file.display());

        Ok(PipelineResult {
            database: source.name().to_string(),
            entry_count: entries.len(),
            fetched,
            output_file,
        })
    }
}
