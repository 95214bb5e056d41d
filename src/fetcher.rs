use std::fs;
use std::time::Duration;
use tracing::info;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::sources::DictionarySource;

/// Downloads source CSVs into the build directory, reusing cached copies.
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(config: &BuildConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self { client })
    }

    /// Ensure a local copy of the source CSV exists. Returns `true` when the
    /// network was hit, `false` when the cached copy was reused.
    ///
    /// A cached copy is trusted as-is, with no staleness check; deleting the
    /// file (or `force_refresh`) is the only way to trigger a re-download.
    pub fn ensure_cached(
        &self,
        source: &dyn DictionarySource,
        config: &BuildConfig,
    ) -> Result<bool> {
        let cache_path = config.cache_path(source);
        if cache_path.is_file() && !config.force_refresh {
            info!("Reusing cached copy at {}", cache_path.display());
            return Ok(false);
        }

        let url = source.url();
        info!("Local CSV copy not detected, fetching {}", url);
        let response = self.client.get(&url).send()?.error_for_status()?;
        let body = response.bytes()?;

        if let Some(parent) = cache_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&cache_path, &body)?;
        info!("Cached {} bytes at {}", body.len(), cache_path.display());
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::create_source;
    use crate::constants::MARYKNOLL_DB;

    #[test]
    fn test_existing_cache_is_reused_without_network() {
        let temp = tempfile::tempdir().unwrap();
        let config = BuildConfig {
            build_dir: temp.path().to_path_buf(),
            ..BuildConfig::default()
        };
        let source = create_source(MARYKNOLL_DB).unwrap();

        fs::write(config.cache_path(source.as_ref()), "cached").unwrap();

        let fetcher = Fetcher::new(&config).unwrap();
        let fetched = fetcher.ensure_cached(source.as_ref(), &config).unwrap();
        assert!(!fetched);
        assert_eq!(
            fs::read_to_string(config.cache_path(source.as_ref())).unwrap(),
            "cached"
        );
    }
}
