use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{BuildError, Result};
use crate::sources::DictionarySource;

/// Build-time settings shared by every pipeline stage.
///
/// Defaults reproduce the layout the frontend build expects: cached source
/// CSVs under `build/`, compiled JSON artifacts under `public/`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory holding cached source CSVs.
    pub build_dir: PathBuf,
    /// Directory the JSON artifacts are published into.
    pub public_dir: PathBuf,
    /// HTTP timeout for source downloads, in seconds.
    pub timeout_seconds: u64,
    /// Re-download source CSVs even when a cached copy exists.
    pub force_refresh: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("build"),
            public_dir: PathBuf::from("public"),
            timeout_seconds: 30,
            force_refresh: false,
        }
    }
}

impl BuildConfig {
    /// Load settings from a TOML file. Fields the file omits fall back to
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            BuildError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: BuildConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Where the cached CSV for `source` lives.
    pub fn cache_path(&self, source: &dyn DictionarySource) -> PathBuf {
        self.build_dir.join(source.csv_filename())
    }

    /// Where the compiled JSON artifact for `source` is written.
    pub fn output_path(&self, source: &dyn DictionarySource) -> PathBuf {
        self.public_dir.join(source.output_filename())
    }
}
