use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;

/// Compact set of column ids, used pervasively for dependency tracking.
///
/// Backed by a word array indexed by id. The array never keeps trailing
/// zero words, so derived equality and hash are exact set equality no
/// matter how the set was built up or torn down.
#[derive(Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ColumnRefSet {
    words: Vec<u64>,
}

impl ColumnRefSet {
    pub fn new() -> Self {
        Self { words: vec![] }
    }

    pub fn insert(&mut self, id: u32) {
        let word = id as usize / 64;
        if self.words.len() <= word {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= 1 << (id as usize % 64);
    }

    pub fn remove(&mut self, id: u32) {
        let word = id as usize / 64;
        if word < self.words.len() {
            self.words[word] &= !(1 << (id as usize % 64));
            self.trim();
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        let word = id as usize / 64;
        word < self.words.len() && self.words[word] & 1 << (id as usize % 64) != 0
    }

    pub fn contains_all(&self, other: &ColumnRefSet) -> bool {
        if other.words.len() > self.words.len() {
            return false;
        }
        for i in 0..other.words.len() {
            if other.words[i] & !self.words[i] != 0 {
                return false;
            }
        }
        true
    }

    /// Absorbs the members of `other` into the receiver. Never allocates a
    /// new set; grows the word array in place at most.
    pub fn union_with(&mut self, other: &ColumnRefSet) {
        if self.words.len() < other.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for i in 0..other.words.len() {
            self.words[i] |= other.words[i];
        }
    }

    /// Drops every member not also in `other`.
    pub fn intersect_with(&mut self, other: &ColumnRefSet) {
        if self.words.len() > other.words.len() {
            self.words.truncate(other.words.len());
        }
        for i in 0..self.words.len() {
            self.words[i] &= other.words[i];
        }
        self.trim();
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            (0..64).filter_map(move |bit| {
                if word & 1 << bit != 0 {
                    Some((i * 64 + bit) as u32)
                } else {
                    None
                }
            })
        })
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}

impl FromIterator<u32> for ColumnRefSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = ColumnRefSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl fmt::Debug for ColumnRefSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
