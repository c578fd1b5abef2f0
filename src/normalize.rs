use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Default normalizer: compatibility-decompose, drop combining marks,
/// lowercase and keep alphabetic characters only.
///
/// ```rust
/// use fuzzy_replacer::default_normalize;
///
/// assert_eq!(default_normalize("Générale"), "generale");
/// assert_eq!(default_normalize("(GPL)."), "gpl");
/// assert_eq!(default_normalize("v2.0"), "v");
/// ```
#[must_use]
pub fn default_normalize(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.nfkd().filter(|c| !is_combining_mark(*c)) {
        out.extend(ch.to_lowercase().filter(|c| c.is_alphabetic()));
    }
    out
}
