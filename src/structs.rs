use crate::similarity::WordProfile;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

/// Maps a raw word to the form used for comparison. Must be pure: the same
/// function is applied to phrase words at build time and to input tokens at
/// match time.
pub type Normalizer = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A replacement attached to a trie node.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Terminal {
    /// Mapping phrase exactly as supplied, used for last-write-wins.
    pub(crate) phrase: String,
    pub(crate) replacement: String,
}

/// A single node of the phrase trie.
#[derive(Debug)]
pub(crate) struct Node {
    /// Outgoing edges keyed by the next normalized word.
    pub(crate) transitions: BTreeMap<String, usize>,
    /// Profile of the word on the edge leading here; `None` for the root.
    pub(crate) word: Option<WordProfile>,
    /// Phrases that end at this node.
    pub(crate) output: Vec<Terminal>,
}

impl Node {
    pub(crate) fn new(word: Option<&str>) -> Node {
        Self {
            transitions: BTreeMap::new(),
            word: word.map(WordProfile::new),
            output: Vec::new(),
        }
    }
}

/// An in-progress multi-word match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct State {
    /// Token index of the first word.
    pub(crate) start: usize,
    pub(crate) node: usize,
    /// Product of the per-word ratios so far.
    pub(crate) score: f32,
}

/// What to do with a mapping entry whose phrase has no words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RootTerminals {
    /// Fail the build with [`Error::EmptyPhrase`](crate::Error::EmptyPhrase).
    #[default]
    Reject,
    /// Accept the entry, never emit it.
    Skip,
    /// Emit a zero-score single-token match at every token position.
    EveryToken,
}

/// A completed match over the token range `start..end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    /// Index of the first matched token.
    pub start: usize,
    /// Exclusive index of the last matched token.
    pub end: usize,
    /// Replacement string of the matched phrase.
    pub replacement: &'a str,
    /// Product of the per-word similarity ratios, in `[0, 1]`.
    pub score: f32,
}

impl Match<'_> {
    /// Number of tokens covered.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Score weighted by the number of covered tokens.
    #[inline]
    #[must_use]
    pub fn weighted_score(&self) -> f32 {
        self.score * self.len() as f32
    }
}

/// Matches produced by [`FuzzyReplacer::search`] and
/// [`FuzzyReplacer::search_non_overlapping`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matches<'a> {
    pub(crate) inner: Vec<Match<'a>>,
}

pub struct FuzzyReplacer {
    pub(crate) nodes: Vec<Node>,
    pub(crate) normalizer: Normalizer,
    pub(crate) separator: Regex,
    pub(crate) cutoff: f32,
    pub(crate) root_terminals: RootTerminals,
    pub(crate) phrase_count: usize,
}

impl fmt::Debug for FuzzyReplacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyReplacer")
            .field("cutoff", &self.cutoff)
            .field("separator", &self.separator.as_str())
            .field("root_terminals", &self.root_terminals)
            .field("phrases", &self.phrase_count)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}
