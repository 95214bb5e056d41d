pub mod maryknoll;

use csv::StringRecord;

use crate::constants;
use crate::error::Result;
use crate::types::DictionaryEntry;

/// A ChhoeTaigi source table the builder can compile into a search database.
///
/// Each table carries its own column layout, so header validation and row
/// conversion live with the source rather than in the parser.
pub trait DictionarySource {
    /// User-facing database name (used in CLI selection and logs).
    fn name(&self) -> &'static str;

    /// File name of the source CSV within the ChhoeTaigi repository.
    fn csv_filename(&self) -> &'static str;

    /// File name of the JSON artifact this source compiles to.
    fn output_filename(&self) -> &'static str;

    /// The exact header the source CSV must carry, in order.
    fn expected_header(&self) -> &'static [&'static str];

    /// Convert one CSV record into a dictionary entry. The header has
    /// already been validated, so fields are bound by name.
    fn entry_from_record(
        &self,
        header: &StringRecord,
        record: &StringRecord,
    ) -> Result<DictionaryEntry>;

    /// Full download URL for the source CSV.
    fn url(&self) -> String {
        format!("{}{}", constants::CHHOE_TAIGI_BASE_URL, self.csv_filename())
    }
}

/// Look up a source by its user-facing database name.
pub fn create_source(name: &str) -> Option<Box<dyn DictionarySource>> {
    match name {
        constants::MARYKNOLL_DB => Some(Box::new(maryknoll::MaryknollSource)),
        _ => None,
    }
}
