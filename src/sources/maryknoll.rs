use csv::StringRecord;
use serde::Deserialize;

use crate::constants::MARYKNOLL_DB;
use crate::error::Result;
use crate::normalize::normalize_poj;
use crate::sources::DictionarySource;
use crate::types::DictionaryEntry;

/// Column layout of ChhoeTaigi_MaryknollTaiengSutian.csv.
pub const MARYKNOLL_HEADER: [&str; 8] = [
    "id",
    "poj_unicode",
    "poj_input",
    "kip_unicode",
    "kip_input",
    "hoabun",
    "english",
    "page_number",
];

/// Full row shape of the Maryknoll table. Only five of the eight columns
/// survive into the output; the rest are still bound by name so the row is
/// validated as a whole.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct MaryknollRow {
    id: String,
    poj_unicode: String,
    poj_input: String,
    kip_unicode: String,
    kip_input: String,
    hoabun: String,
    english: String,
    page_number: String,
}

/// The Maryknoll Taiwanese-English dictionary table.
pub struct MaryknollSource;

impl DictionarySource for MaryknollSource {
    fn name(&self) -> &'static str {
        MARYKNOLL_DB
    }

    fn csv_filename(&self) -> &'static str {
        "ChhoeTaigi_MaryknollTaiengSutian.csv"
    }

    fn output_filename(&self) -> &'static str {
        "maryknoll.json"
    }

    fn expected_header(&self) -> &'static [&'static str] {
        &MARYKNOLL_HEADER
    }

    fn entry_from_record(
        &self,
        header: &StringRecord,
        record: &StringRecord,
    ) -> Result<DictionaryEntry> {
        let row: MaryknollRow = record.deserialize(Some(header))?;

        Ok(DictionaryEntry {
            poj_normalized: normalize_poj(&row.poj_unicode),
            poj_unicode: row.poj_unicode,
            poj_input: row.poj_input,
            hoabun: row.hoabun,
            english: row.english,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maryknoll_record(fields: &[&str]) -> (StringRecord, StringRecord) {
        let header = StringRecord::from(MARYKNOLL_HEADER.to_vec());
        let record = StringRecord::from(fields.to_vec());
        (header, record)
    }

    #[test]
    fn test_entry_keeps_five_of_eight_columns() {
        let (header, record) = maryknoll_record(&[
            "42", "chhiū", "chhiu7", "tshiu", "tshiu7", "樹", "tree", "123",
        ]);

        let source = MaryknollSource;
        let entry = source.entry_from_record(&header, &record).unwrap();

        assert_eq!(entry.poj_unicode, "chhiū");
        assert_eq!(entry.poj_normalized, "chhiu");
        assert_eq!(entry.poj_input, "chhiu7");
        assert_eq!(entry.hoabun, "樹");
        assert_eq!(entry.english, "tree");
    }

    #[test]
    fn test_entry_normalizes_nasal_marker() {
        let (header, record) = maryknoll_record(&[
            "7", "tsuiⁿ", "tsuinn", "tsuinn", "tsuinn", "水", "water", "9",
        ]);

        let source = MaryknollSource;
        let entry = source.entry_from_record(&header, &record).unwrap();
        assert_eq!(entry.poj_normalized, "tsui");
    }

    #[test]
    fn test_empty_fields_are_preserved() {
        let (header, record) =
            maryknoll_record(&["1", "pêng", "peng5", "", "", "", "", ""]);

        let source = MaryknollSource;
        let entry = source.entry_from_record(&header, &record).unwrap();
        assert_eq!(entry.poj_normalized, "peng");
        assert_eq!(entry.hoabun, "");
        assert_eq!(entry.english, "");
    }
}
