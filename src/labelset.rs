#[cfg(feature = "bitintr")]
use bitintr::{Bzhi, Popcnt};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;
use std::iter::Iterator;

use crate::tiles::{codec, Label};

#[cfg(feature = "bitintr")]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.popcnt()
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn count_ones(n: u32) -> u32 {
    n.count_ones()
}

#[cfg(feature = "bitintr")]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n.bzhi(v)
}

#[cfg(not(feature = "bitintr"))]
#[inline(always)]
fn zero_highbits(n: u32, v: u32) -> u32 {
    n & ((1 << v) - 1)
}

/// A bitset of letter labels, used for the children of a dictionary node
/// and to quickly compare the letters of a word with the available tiles.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelSet(u32);

impl LabelSet {
    pub fn new() -> LabelSet {
        LabelSet(0)
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0 & (1 << label) != 0
    }

    /// Insert `label`, returns true if it was already present.
    pub fn insert(&mut self, label: Label) -> bool {
        assert!(label < 32);
        let r = (self.0 & (1 << label)) != 0;
        self.0 |= 1 << label;
        r
    }

    pub fn len(&self) -> usize {
        count_ones(self.0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True if every label in `self` is also in `other`.
    pub fn is_subset(&self, other: LabelSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn iter(&self) -> IteratorLabelSet {
        IteratorLabelSet::new(self.0)
    }

    /// Return the position of `label` among the labels in the set, if present.
    pub fn index_of(&self, label: Label) -> Option<usize> {
        if !self.contains(label) {
            return None;
        }
        Some(count_ones(zero_highbits(self.0, label as u32)) as usize)
    }
}

impl fmt::Debug for LabelSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let labels: Vec<Label> = self.iter().collect();
        write!(f, "{{{}}}", codec().decode_labels(&labels))
    }
}

pub struct IteratorLabelSet {
    count: u32,
    value: u32,
}

impl IteratorLabelSet {
    pub fn new(value: u32) -> IteratorLabelSet {
        IteratorLabelSet { count: 0, value }
    }
}

impl Iterator for IteratorLabelSet {
    type Item = Label;
    fn next(&mut self) -> Option<Label> {
        while self.count < 32 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some(i as Label);
            }
        }
        None
    }
}

impl FromIterator<Label> for LabelSet {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        let mut c = LabelSet::new();
        for i in iter {
            c.insert(i);
        }
        c
    }
}

impl From<&[Label]> for LabelSet {
    fn from(v: &[Label]) -> Self {
        v.iter().copied().collect()
    }
}
