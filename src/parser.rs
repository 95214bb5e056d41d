use csv::{ReaderBuilder, StringRecord};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{BuildError, Result};
use crate::sources::DictionarySource;
use crate::types::DictionaryEntry;

/// Reads a cached source CSV and converts it into dictionary entries.
pub struct Parser;

impl Parser {
    /// Read and decode a cached CSV, dropping the UTF-8 BOM the upstream
    /// exports carry.
    pub fn read_cached_csv(path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        let decoded = String::from_utf8(bytes)?;
        Ok(match decoded.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => decoded,
        })
    }

    /// Parse CSV content for `source`. The header must match the source's
    /// expected column list exactly; any drift fails the whole run.
    pub fn parse(source: &dyn DictionarySource, content: &str) -> Result<Vec<DictionaryEntry>> {
        let mut reader = ReaderBuilder::new()
            .flexible(false)
            .from_reader(content.as_bytes());

        let header = reader.headers()?.clone();
        Self::check_header(source, &header)?;

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result.map_err(Self::map_row_error)?;
            entries.push(source.entry_from_record(&header, &record)?);
        }

        info!(
            "Parsed {} entries from {}",
            entries.len(),
            source.csv_filename()
        );
        Ok(entries)
    }

    fn check_header(source: &dyn DictionarySource, header: &StringRecord) -> Result<()> {
        let expected = source.expected_header();
        if header.iter().ne(expected.iter().copied()) {
            return Err(BuildError::SchemaDrift {
                database: source.name().to_string(),
                expected: expected.iter().map(|s| s.to_string()).collect(),
                actual: header.iter().map(|s| s.to_string()).collect(),
            });
        }
        Ok(())
    }

    /// Rows with the wrong field count surface as malformed rows with their
    /// line number; everything else keeps the csv crate's diagnostics.
    fn map_row_error(err: csv::Error) -> BuildError {
        if let csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } = err.kind()
        {
            return BuildError::MalformedRow {
                line: pos.as_ref().map(|p| p.line()).unwrap_or(0),
                expected: *expected_len as usize,
                actual: *len as usize,
            };
        }
        err.into()
    }
}
