use serde::{Deserialize, Serialize};

/// One dictionary entry in the shape consumed by the search frontend.
///
/// Keys are single letters to keep the shipped artifact small; the frontend
/// indexes `n` for fuzzy ASCII lookup and displays the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Romanized form (POJ), verbatim from the source.
    #[serde(rename = "p")]
    pub poj_unicode: String,
    /// ASCII folding of `p`, used as the fuzzy-search key.
    #[serde(rename = "n")]
    pub poj_normalized: String,
    /// Input-method encoding of the romanized form.
    #[serde(rename = "i")]
    pub poj_input: String,
    /// Mandarin gloss in Han script.
    #[serde(rename = "h")]
    pub hoabun: String,
    /// English gloss.
    #[serde(rename = "e")]
    pub english: String,
}
