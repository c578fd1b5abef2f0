use crate::{FuzzyReplacer, Match};
use log::debug;

impl FuzzyReplacer {
    /// Performs a **fuzzy** find-and-replace: every selected match is
    /// collapsed to its replacement, everything else is returned untouched.
    ///
    /// ```rust
    /// use fuzzy_replacer::FuzzyReplacer;
    ///
    /// let replacer = FuzzyReplacer::new([("GNU General Public License", "GPL")]).unwrap();
    /// assert_eq!(
    ///     replacer.process("the GNU General Public License is intended"),
    ///     "the GPL is intended"
    /// );
    /// ```
    #[must_use]
    pub fn process(&self, text: &str) -> String {
        self.process_with(text, |m| Some(m.replacement))
    }

    /// Like [`process`](Self::process), but `callback` picks the text for
    /// each selected match. Return `None` to keep the matched span as is.
    ///
    /// ```rust
    /// use fuzzy_replacer::FuzzyReplacer;
    ///
    /// let replacer = FuzzyReplacer::new([("colour", "color")]).unwrap();
    /// let out = replacer.process_with("The Colour, the colur.", |m| {
    ///     Some(format!("[{}:{:.2}]", m.replacement, m.score))
    /// });
    /// assert_eq!(out, "The [color:1.00], the [color:0.91].");
    /// ```
    pub fn process_with<'a, F, S>(&'a self, text: &str, callback: F) -> String
    where
        F: FnMut(&Match<'a>) -> Option<S>,
        S: AsRef<str>,
    {
        let segments = self.segments(text);
        let mut matches = self.search_words(segments.words());
        if matches.is_empty() {
            return text.to_owned();
        }
        let found = matches.len();
        matches.non_overlapping();
        debug!(
            "{} tokens: {found} matches, {} selected",
            segments.len(),
            matches.len()
        );
        segments.render_with(matches.as_slice(), callback)
    }
}
