use crate::Match;
use regex::Regex;

/// Input text split into alternating words and separators.
///
/// `words[k]` is followed by `separators[k]` in the original text; the last
/// separator is empty, so both vectors always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'t> {
    pub(crate) words: Vec<&'t str>,
    pub(crate) separators: Vec<&'t str>,
}

impl<'t> Segments<'t> {
    /// Splits `text` around every match of `separator`. Words may be empty,
    /// e.g. before a leading separator.
    ///
    /// ```rust
    /// use fuzzy_replacer::Segments;
    /// use regex::Regex;
    ///
    /// let segments = Segments::split("« GPL », ok", &Regex::new(r"\W+").unwrap());
    /// assert_eq!(segments.words(), ["", "GPL", "ok"]);
    /// assert_eq!(segments.separators(), ["« ", " », ", ""]);
    /// ```
    #[must_use]
    pub fn split(text: &'t str, separator: &Regex) -> Self {
        let mut words = Vec::new();
        let mut separators = Vec::new();
        let mut last = 0;
        for m in separator.find_iter(text) {
            words.push(&text[last..m.start()]);
            separators.push(m.as_str());
            last = m.end();
        }
        words.push(&text[last..]);
        separators.push("");
        Self { words, separators }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[&'t str] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn separators(&self) -> &[&'t str] {
        &self.separators
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn push_range(&self, out: &mut String, from: usize, to: usize) {
        for (word, separator) in self.words[from..to].iter().zip(&self.separators[from..to]) {
            out.push_str(word);
            out.push_str(separator);
        }
    }

    /// Rebuilds the text with each match collapsed to its replacement.
    ///
    /// Separators inside a match are dropped, the one trailing its last word is
    /// kept. Matches must be ordered and non-overlapping; any other match is
    /// skipped.
    #[must_use]
    pub fn render(&self, matches: &[Match<'_>]) -> String {
        self.render_with(matches, |m| Some(m.replacement))
    }

    /// Like [`render`](Self::render), with the replacement chosen by
    /// `callback`. Returning `None` keeps the matched span verbatim.
    pub fn render_with<'a, F, S>(&self, matches: &[Match<'a>], mut callback: F) -> String
    where
        F: FnMut(&Match<'a>) -> Option<S>,
        S: AsRef<str>,
    {
        let mut result = String::new();
        let mut last = 0;
        for m in matches {
            if m.start < last || m.is_empty() || m.end > self.len() {
                continue;
            }
            self.push_range(&mut result, last, m.start);
            match callback(m) {
                Some(replacement) => {
                    result.push_str(replacement.as_ref());
                    result.push_str(self.separators[m.end - 1]);
                }
                None => self.push_range(&mut result, m.start, m.end),
            }
            last = m.end;
        }
        self.push_range(&mut result, last, self.len());
        result
    }
}
