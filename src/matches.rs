use crate::{Match, Matches};
use log::trace;

impl<'a> Matches<'a> {
    /// Stable sort by start index, then by descending weighted score, so the
    /// best candidate of each anchor comes first regardless of the order the
    /// matcher emitted them in.
    #[inline]
    pub fn sort_by_start(&mut self) {
        self.inner.sort_by(|left, right| {
            left.start
                .cmp(&right.start)
                .then_with(|| right.weighted_score().total_cmp(&left.weighted_score()))
        });
    }

    /// Greedy left-to-right selection of non-overlapping matches. Expects the
    /// order of [`sort_by_start`](Self::sort_by_start).
    ///
    /// A candidate sharing the current winner's start replaces it when its
    /// weighted score is strictly higher. A candidate starting at or after the
    /// winner's end commits the winner. Anything else overlaps the winner and
    /// is dropped, even if it scores higher.
    pub fn non_overlapping(&mut self) {
        let mut candidates = std::mem::take(&mut self.inner).into_iter();
        let Some(mut winner) = candidates.next() else {
            return;
        };
        for m in candidates {
            if m.start == winner.start && m.weighted_score() > winner.weighted_score() {
                winner = m;
            } else if m.start >= winner.end {
                self.inner.push(std::mem::replace(&mut winner, m));
            } else {
                trace!("DISCARDING OVERLAPPING: {m:?}");
            }
        }
        self.inner.push(winner);
    }

    /// `true` if every match ends at or before the start of the next one.
    #[must_use]
    pub fn is_non_overlapping(&self) -> bool {
        self.inner.windows(2).all(|w| w[0].end <= w[1].start)
    }

    /// Returns an iterator over the contained [`Match`] items.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Match<'a>> {
        self.inner.iter()
    }

    /// Token ranges `(start, end)` of every match, in order.
    #[must_use]
    pub fn spans(&self) -> Vec<(usize, usize)> {
        self.inner.iter().map(|m| (m.start, m.end)).collect()
    }

    /// Replacement strings of every match, in order.
    #[must_use]
    pub fn replacements(&self) -> Vec<&'a str> {
        self.inner.iter().map(|m| m.replacement).collect()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Match<'a>] {
        &self.inner
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<Match<'a>> {
        self.inner
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<'a> From<Vec<Match<'a>>> for Matches<'a> {
    fn from(inner: Vec<Match<'a>>) -> Self {
        Self { inner }
    }
}

impl<'a> IntoIterator for Matches<'a> {
    type Item = Match<'a>;
    type IntoIter = std::vec::IntoIter<Match<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}
