use std::collections::BTreeMap;

/// A word prepared for repeated similarity checks: its characters plus a
/// multiset of character frequencies.
///
/// Trie words are profiled once at build time, input tokens once per token.
#[derive(Debug, Clone, PartialEq)]
pub struct WordProfile {
    chars: Vec<char>,
    counts: BTreeMap<char, usize>,
}

impl WordProfile {
    #[must_use]
    pub fn new(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let mut counts = BTreeMap::new();
        for &c in &chars {
            *counts.entry(c).or_insert(0) += 1;
        }
        Self { chars, counts }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

#[inline]
fn as_ratio(matched: usize, total: usize) -> f32 {
    if total == 0 {
        1.0
    } else {
        2.0 * matched as f32 / total as f32
    }
}

/// Upper bound on [`ratio`] from the lengths alone.
#[must_use]
pub fn real_quick_ratio(a: &WordProfile, b: &WordProfile) -> f32 {
    as_ratio(a.len().min(b.len()), a.len() + b.len())
}

/// Upper bound on [`ratio`] from the shared character multiset.
#[must_use]
pub fn quick_ratio(a: &WordProfile, b: &WordProfile) -> f32 {
    let (small, large) = if a.counts.len() <= b.counts.len() {
        (&a.counts, &b.counts)
    } else {
        (&b.counts, &a.counts)
    };
    let shared: usize = small
        .iter()
        .map(|(c, &n)| large.get(c).map_or(0, |&m| n.min(m)))
        .sum();
    as_ratio(shared, a.len() + b.len())
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as
/// `(i, j, size)`. Ties go to the smallest `i`, then the smallest `j`.
fn longest_block(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let mut best = (alo, blo, 0);
    // prev[k + 1] is the length of the common run ending at a[i - 1], b[blo + k]
    let mut prev = vec![0usize; bhi - blo + 1];
    let mut cur = vec![0usize; bhi - blo + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let k = j - blo;
            cur[k + 1] = if a[i] == b[j] { prev[k] + 1 } else { 0 };
            let size = cur[k + 1];
            if size > best.2 {
                best = (i + 1 - size, j + 1 - size, size);
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}

/// Number of characters covered by the Ratcliff/Obershelp matching blocks.
fn matched_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![((0, a.len()), (0, b.len()))];
    while let Some(((alo, ahi), (blo, bhi))) = pending.pop() {
        let (i, j, size) = longest_block(a, b, (alo, ahi), (blo, bhi));
        if size == 0 {
            continue;
        }
        matched += size;
        if alo < i && blo < j {
            pending.push(((alo, i), (blo, j)));
        }
        if i + size < ahi && j + size < bhi {
            pending.push(((i + size, ahi), (j + size, bhi)));
        }
    }
    matched
}

/// Exact similarity `2·M / T`, where `M` counts characters in matching
/// blocks and `T` is the combined length. Two empty words score `1.0`.
///
/// ```rust
/// use fuzzy_replacer::similarity::{WordProfile, ratio};
///
/// let r = ratio(&WordProfile::new("colour"), &WordProfile::new("color"));
/// assert!((r - 10.0 / 11.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn ratio(a: &WordProfile, b: &WordProfile) -> f32 {
    as_ratio(matched_chars(&a.chars, &b.chars), a.len() + b.len())
}

/// Similarity of `a` and `b` if it reaches `cutoff`, `None` otherwise.
///
/// Cheap bounds run first so most rejected pairs never reach the
/// quadratic [`ratio`].
#[must_use]
pub fn score(a: &WordProfile, b: &WordProfile, cutoff: f32) -> Option<f32> {
    if real_quick_ratio(a, b) < cutoff || quick_ratio(a, b) < cutoff {
        return None;
    }
    let r = ratio(a, b);
    (r >= cutoff).then_some(r)
}

/// Convenience wrapper over [`ratio`] for plain strings.
#[must_use]
pub fn str_ratio(a: &str, b: &str) -> f32 {
    ratio(&WordProfile::new(a), &WordProfile::new(b))
}
