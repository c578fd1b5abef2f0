use crate::{
    Error, FuzzyReplacer, Node, Normalizer, Result, RootTerminals, Terminal, default_normalize,
};
use log::{debug, warn};
use regex::Regex;
use std::fmt;

/// Separator runs between words: any maximal run of non-word characters.
pub const DEFAULT_SEPARATOR: &str = r"\W+";

/// Default minimum similarity ratio.
pub const DEFAULT_CUTOFF: f32 = 0.85;

/// Builder for [`FuzzyReplacer`].
///
/// ```rust
/// use fuzzy_replacer::FuzzyReplacerBuilder;
///
/// let replacer = FuzzyReplacerBuilder::new()
///     .cutoff(0.8)
///     .build([("hello world", "HW")])
///     .unwrap();
///
/// assert_eq!(replacer.process("  Helo  wrld!! and more"), "  HW!! and more");
/// ```
pub struct FuzzyReplacerBuilder {
    cutoff: f32,
    normalizer: Option<Normalizer>,
    separator: Option<String>,
    root_terminals: RootTerminals,
}

impl Default for FuzzyReplacerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FuzzyReplacerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyReplacerBuilder")
            .field("cutoff", &self.cutoff)
            .field("custom_normalizer", &self.normalizer.is_some())
            .field("separator", &self.separator)
            .field("root_terminals", &self.root_terminals)
            .finish()
    }
}

impl FuzzyReplacerBuilder {
    /// Start with the defaults: cutoff `0.85`, [`default_normalize`],
    /// `\W+` separators, empty phrases rejected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            normalizer: None,
            separator: None,
            root_terminals: RootTerminals::default(),
        }
    }

    /// Minimum ratio every word of a phrase must reach against its token.
    #[must_use]
    pub fn cutoff(mut self, cutoff: f32) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Replace [`default_normalize`] with a custom word normalizer.
    ///
    /// ```rust
    /// use fuzzy_replacer::FuzzyReplacerBuilder;
    ///
    /// // case-sensitive matching
    /// let replacer = FuzzyReplacerBuilder::new()
    ///     .normalizer(|w: &str| w.chars().filter(|c| c.is_alphabetic()).collect())
    ///     .build([("Rust", "Ferris")])
    ///     .unwrap();
    ///
    /// assert_eq!(replacer.process("Rust or RUST"), "Ferris or RUST");
    /// ```
    #[must_use]
    pub fn normalizer<F>(mut self, normalizer: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.normalizer = Some(Box::new(normalizer));
        self
    }

    /// Regular expression matching the separators between words.
    #[must_use]
    pub fn separator(mut self, pattern: impl Into<String>) -> Self {
        self.separator = Some(pattern.into());
        self
    }

    /// How to treat mapping entries whose phrase contains no words.
    #[must_use]
    pub fn root_terminals(mut self, policy: RootTerminals) -> Self {
        self.root_terminals = policy;
        self
    }

    /// Builds an immutable [`FuzzyReplacer`] from `(phrase, replacement)`
    /// pairs.
    ///
    /// Phrases are split on whitespace and each word is normalized into one
    /// trie edge. Phrases sharing a normalized prefix share nodes. An entry
    /// repeating an earlier phrase verbatim overwrites its replacement.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCutoff`] if the cutoff is NaN or outside `[0, 1]`.
    /// - [`Error::InvalidSeparator`] if the separator pattern does not compile.
    /// - [`Error::EmptyPhrase`] for a phrase without words, unless another
    ///   [`RootTerminals`] policy is set.
    pub fn build<P, R>(self, pairs: impl IntoIterator<Item = (P, R)>) -> Result<FuzzyReplacer>
    where
        P: AsRef<str>,
        R: Into<String>,
    {
        if !(0.0..=1.0).contains(&self.cutoff) {
            return Err(Error::InvalidCutoff(self.cutoff));
        }
        let separator = Regex::new(self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR))?;
        let normalizer: Normalizer = match self.normalizer {
            Some(normalizer) => normalizer,
            None => Box::new(default_normalize),
        };

        // Start with root node (index 0)
        let mut nodes = vec![Node::new(None)];
        let mut phrase_count = 0;

        for (index, (phrase, replacement)) in pairs.into_iter().enumerate() {
            let phrase = phrase.as_ref();
            let words: Vec<String> = phrase.split_whitespace().map(|w| normalizer(w)).collect();
            if words.is_empty() && self.root_terminals == RootTerminals::Reject {
                return Err(Error::EmptyPhrase { index });
            }

            let mut current = 0;
            for word in words {
                if word.is_empty() {
                    warn!("phrase {phrase:?} has a word that normalizes to nothing");
                }
                current = match nodes[current].transitions.get(&word) {
                    Some(&next) => next,
                    None => {
                        let next = nodes.len();
                        nodes.push(Node::new(Some(word.as_str())));
                        nodes[current].transitions.insert(word, next);
                        next
                    }
                };
            }

            let replacement = replacement.into();
            let output = &mut nodes[current].output;
            match output.iter_mut().find(|t| t.phrase == phrase) {
                Some(terminal) => terminal.replacement = replacement,
                None => {
                    output.push(Terminal {
                        phrase: phrase.to_owned(),
                        replacement,
                    });
                    phrase_count += 1;
                }
            }
        }

        debug!(
            "built phrase trie: {phrase_count} phrases, {} nodes, cutoff {:.2}",
            nodes.len(),
            self.cutoff
        );

        Ok(FuzzyReplacer {
            nodes,
            normalizer,
            separator,
            cutoff: self.cutoff,
            root_terminals: self.root_terminals,
            phrase_count,
        })
    }
}
