//! Approximate phrase replacement.
//!
//! A [`FuzzyReplacer`] is built once from `(phrase, replacement)` pairs. It
//! splits its input into words and separators, streams the normalized words
//! through a word-level trie of the phrases, and accepts every trie edge whose
//! word is similar enough to the current token. The best non-overlapping
//! matches are then spliced back into the text, keeping every separator
//! outside of them.
//!
//! ```rust
//! use fuzzy_replacer::FuzzyReplacer;
//!
//! let replacer = FuzzyReplacer::new([("licence publiqu general", "GPL")]).unwrap();
//! assert_eq!(
//!     replacer.process("la licence publique générale GNU"),
//!     "la GPL GNU"
//! );
//! ```
mod builder;
mod error;
mod matches;
mod normalize;
mod replacer;
mod segment;
pub mod similarity;
mod structs;

pub use builder::{DEFAULT_CUTOFF, DEFAULT_SEPARATOR, FuzzyReplacerBuilder};
pub use error::{Error, Result};
pub use normalize::default_normalize;
pub use segment::Segments;
pub use structs::*;

use log::trace;
use similarity::WordProfile;

/// Streaming matcher
impl FuzzyReplacer {
    /// Builds a replacer with the default configuration.
    ///
    /// # Errors
    ///
    /// See [`FuzzyReplacerBuilder::build`].
    pub fn new<P, R>(pairs: impl IntoIterator<Item = (P, R)>) -> Result<Self>
    where
        P: AsRef<str>,
        R: Into<String>,
    {
        FuzzyReplacerBuilder::new().build(pairs)
    }

    #[inline]
    #[must_use]
    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    /// Number of distinct phrases in the trie.
    #[inline]
    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.phrase_count
    }

    /// Number of trie nodes, root included.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Splits `text` into words and separators the way matching sees it.
    #[must_use]
    pub fn segments<'t>(&self, text: &'t str) -> Segments<'t> {
        Segments::split(text, &self.separator)
    }

    #[inline]
    fn emit<'a>(
        &'a self,
        node: usize,
        start: usize,
        end: usize,
        score: f32,
        matches: &mut Vec<Match<'a>>,
    ) {
        for terminal in &self.nodes[node].output {
            trace!("  emit {start}..{end} {:?} score={score:.3}", terminal.replacement);
            matches.push(Match {
                start,
                end,
                replacement: &terminal.replacement,
                score,
            });
        }
    }

    /// Follows every edge out of `node` whose word reaches the cutoff against
    /// `token`.
    #[inline]
    fn advance(
        &self,
        node: usize,
        start: usize,
        score: f32,
        token: &WordProfile,
        next: &mut Vec<State>,
    ) {
        for &child in self.nodes[node].transitions.values() {
            let Some(word) = &self.nodes[child].word else {
                continue;
            };
            if let Some(ratio) = similarity::score(word, token, self.cutoff) {
                next.push(State {
                    start,
                    node: child,
                    score: score * ratio,
                });
            }
        }
    }

    /// One generation of the state machine: consumes the token at index `i`,
    /// emits the matches that end right before it and returns the states that
    /// survive it.
    fn step<'a>(
        &'a self,
        states: &[State],
        i: usize,
        token: &WordProfile,
        matches: &mut Vec<Match<'a>>,
    ) -> Vec<State> {
        let mut next = Vec::with_capacity(states.len() + 1);

        if self.root_terminals == RootTerminals::EveryToken {
            self.emit(0, i, i + 1, 0.0, matches);
        }
        self.advance(0, i, 1.0, token, &mut next);

        for state in states {
            self.emit(state.node, state.start, i, state.score, matches);
            self.advance(state.node, state.start, state.score, token, &mut next);
        }
        next
    }

    /// Every match of the trie over `words`, sorted by start index and then
    /// by descending weighted score.
    pub(crate) fn search_words<'a>(&'a self, words: &[&str]) -> Matches<'a> {
        let mut matches = Vec::new();
        let mut states: Vec<State> = Vec::new();

        for (i, &word) in words.iter().enumerate() {
            let token = WordProfile::new(&(self.normalizer)(word));
            states = self.step(&states, i, &token, &mut matches);
            trace!("token #{i} {word:?}: {} live states", states.len());
        }
        for state in &states {
            self.emit(state.node, state.start, words.len(), state.score, &mut matches);
        }

        let mut matches = Matches { inner: matches };
        matches.sort_by_start();
        matches
    }

    /// Returns all, possibly overlapping, matches in `text`. Match bounds are
    /// token indices into [`segments`](Self::segments).
    ///
    /// ```rust
    /// use fuzzy_replacer::FuzzyReplacer;
    ///
    /// let replacer = FuzzyReplacer::new([("new york city", "NYC"), ("new york", "NY")]).unwrap();
    /// let matches = replacer.search("in new york city");
    /// assert_eq!(matches.spans(), vec![(1, 4), (1, 3)]);
    /// ```
    #[must_use]
    pub fn search<'a>(&'a self, text: &str) -> Matches<'a> {
        self.search_words(&self.segments(text).words)
    }

    /// Like [`search`](Self::search), reduced to the non-overlapping matches
    /// that [`process`](Self::process) applies.
    #[must_use]
    pub fn search_non_overlapping<'a>(&'a self, text: &str) -> Matches<'a> {
        let mut matches = self.search(text);
        matches.non_overlapping();
        matches
    }
}
