/// Database name constants to ensure consistency across the codebase
/// These constants define the user-facing names of the ChhoeTaigi source
/// tables the builder knows how to compile.

// User-facing database names (used in CLI selection)
pub const MARYKNOLL_DB: &str = "maryknoll";

// Note: ChhoeTaigi publishes further tables (TaioanPehoeKichhooGiku,
// EmbreeTaiengSutian) with their own column layouts. Adding one means a new
// `DictionarySource` impl plus a factory arm in `sources::create_source`.

/// Root of the published ChhoeTaigi CSV tables.
pub const CHHOE_TAIGI_BASE_URL: &str =
    "https://github.com/ChhoeTaigi/ChhoeTaigiDatabase/raw/master/ChhoeTaigiDatabase/";

/// Get all supported database names
pub fn get_supported_dbs() -> Vec<&'static str> {
    vec![MARYKNOLL_DB]
}
