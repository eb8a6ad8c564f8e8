//! Ranked frequency counts.
//!
//! Used by every listing page to pick its "prominent topics".

use std::collections::BTreeMap;

/// Occurrence counts per key. Counts only ever grow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaderboard<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord> Default for Leaderboard<T> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

impl<T: Ord + Clone> Leaderboard<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&mut self, key: T) {
        *self.counts.entry(key).or_default() += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All keys with their counts, highest count first, ties by ascending key.
    pub fn ranked(&self) -> Vec<(T, usize)> {
        let mut entries: Vec<(T, usize)> = self
            .counts
            .iter()
            .map(|(key, count)| (key.clone(), *count))
            .collect();
        entries.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
        entries
    }

    /// The `n` most frequent keys, ties broken by ascending key.
    pub fn top_n(&self, n: usize) -> Vec<T> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(key, _)| key)
            .collect()
    }
}

impl<T: Ord> FromIterator<(T, usize)> for Leaderboard<T> {
    fn from_iter<I: IntoIterator<Item = (T, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
