use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::config::BuildConfig;
use crate::error::Result;
use crate::sources::DictionarySource;
use crate::types::DictionaryEntry;

/// Serialize entries into the compact JSON shape shipped to the frontend:
/// no whitespace between tokens, non-ASCII text emitted as literal UTF-8.
pub fn to_json(entries: &[DictionaryEntry]) -> Result<String> {
    Ok(serde_json::to_string(entries)?)
}

/// Write the serialized database into the public directory, creating it if
/// missing. The artifact is rewritten wholesale on every run.
pub fn write_artifact(
    source: &dyn DictionarySource,
    json: &str,
    config: &BuildConfig,
) -> Result<PathBuf> {
    fs::create_dir_all(&config.public_dir)?;
    let path = config.output_path(source);
    fs::write(&path, json)?;
    info!("Wrote {} bytes to {}", json.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(poj: &str, hoabun: &str, english: &str) -> DictionaryEntry {
        DictionaryEntry {
            poj_unicode: poj.to_string(),
            poj_normalized: crate::normalize::normalize_poj(poj),
            poj_input: String::new(),
            hoabun: hoabun.to_string(),
            english: english.to_string(),
        }
    }

    #[test]
    fn test_json_is_compact() {
        let json = to_json(&[entry("pêng", "平", "flat")]).unwrap();
        assert!(!json.contains(": "));
        assert!(!json.contains(", "));
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_non_ascii_is_literal_utf8() {
        let json = to_json(&[entry("chhiū", "樹", "tree")]).unwrap();
        assert!(json.contains("樹"));
        assert!(json.contains("chhiū"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_serialization_is_deterministic() {
        let entries = vec![entry("tsuiⁿ", "水", "water"), entry("pêng", "平", "flat")];
        assert_eq!(to_json(&entries).unwrap(), to_json(&entries).unwrap());
    }

    #[test]
    fn test_round_trip_preserves_shape() {
        let entries = vec![entry("tsuiⁿ", "水", "water"), entry("pêng", "平", "flat")];
        let json = to_json(&entries).unwrap();

        let parsed: Vec<DictionaryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries);

        let values: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        for value in values {
            let obj = value.as_object().unwrap();
            assert_eq!(obj.len(), 5);
            for key in ["p", "n", "i", "h", "e"] {
                assert!(obj[key].is_string());
            }
        }
    }
}
