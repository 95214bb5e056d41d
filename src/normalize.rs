use deunicode::deunicode;

/// Superscript n (U+207F), the POJ nasalization marker. Stripped rather than
/// transliterated: folding it to a plain `n` would corrupt the search key
/// (`tsuiⁿ` must match `tsui`, not `tsuin`).
const NASAL_MARKER: char = 'ⁿ';

/// Produce the plain-ASCII fuzzy-search key for a romanized POJ form.
///
/// Lossy and one-directional: the nasalization marker is dropped, then every
/// remaining non-ASCII character is folded to its nearest ASCII equivalent.
pub fn normalize_poj(poj_unicode: &str) -> String {
    let stripped: String = poj_unicode.chars().filter(|&c| c != NASAL_MARKER).collect();
    deunicode(&stripped)
}
