//! Enumeration of the words a rack can make.
//!
//! Two strategies produce the same set of words:
//! - [`RackPermutations`] arranges the rack tiles and board letters along the dictionary trie,
//!   which is fast for small racks.
//! - [`DictionaryScan`] tests every dictionary word, which is bounded by the dictionary size.
//!
//! [`choose_strategy`] picks the cheaper one from an [`estimate`] of the number of arrangements.
mod blanks;
mod estimate;
mod permutations;
mod scan;

pub use blanks::{resolve, substitutions};
pub use estimate::{estimate, estimate_rack};
pub use permutations::RackPermutations;
pub use scan::DictionaryScan;

use crate::dictionary::Dictionary;
use crate::pattern::BoardConstraint;
use crate::tiles::{Rack, Word};
use log::debug;
use std::collections::HashSet;
use std::fmt;

/// A way to enumerate the words that fit a rack and a board constraint.
pub trait Enumerator {
    /// Return every distinct tagged word. Wildcards are assigned to letters in every possible way.
    fn enumerate(&self, rack: &Rack, constraint: &BoardConstraint) -> HashSet<Word>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    RackPermutations,
    DictionaryScan,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::RackPermutations => write!(f, "rack permutations"),
            Strategy::DictionaryScan => write!(f, "dictionary scan"),
        }
    }
}

impl Strategy {
    /// Return the enumerator for this strategy, working on `dictionary`.
    pub fn enumerator<'a>(&self, dictionary: &'a Dictionary) -> Box<dyn Enumerator + 'a> {
        match self {
            Strategy::RackPermutations => Box::new(RackPermutations::new(dictionary)),
            Strategy::DictionaryScan => Box::new(DictionaryScan::new(dictionary)),
        }
    }
}

/// Use rack permutations if there are fewer arrangements than dictionary words,
/// otherwise scan the dictionary.
/// ## Examples
/// ```
/// use rack_solver::search::{choose_strategy, Strategy};
/// use rack_solver::{BoardConstraint, Dictionary, Error};
/// let dictionary = Dictionary::from_words(&["at", "cat", "act", "tact"])?;
/// let constraint = BoardConstraint::unconstrained();
/// assert_eq!(choose_strategy(&"t".parse()?, &constraint, &dictionary), Strategy::RackPermutations);
/// assert_eq!(choose_strategy(&"tac".parse()?, &constraint, &dictionary), Strategy::DictionaryScan);
/// # Ok::<(), Error>(())
/// ```
pub fn choose_strategy(
    rack: &Rack,
    constraint: &BoardConstraint,
    dictionary: &Dictionary,
) -> Strategy {
    let estimated = estimate_rack(rack, constraint);
    let word_count = dictionary.word_count() as u128;
    let strategy = if estimated < word_count {
        Strategy::RackPermutations
    } else {
        Strategy::DictionaryScan
    };
    debug!(
        "rack {}: estimate {} vs {} words, use {}",
        rack, estimated, word_count, strategy
    );
    strategy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_tie_favours_scan() -> Result<()> {
        // estimate(2, 0) == 4
        let dictionary = Dictionary::from_words(&["a", "b", "c", "d"])?;
        let rack: Rack = "ab".parse()?;
        let constraint = BoardConstraint::unconstrained();
        assert_eq!(choose_strategy(&rack, &constraint, &dictionary), Strategy::DictionaryScan);
        Ok(())
    }

    #[test]
    fn test_board_letters_count() -> Result<()> {
        let dictionary = Dictionary::from_words(&["a", "b", "c", "d", "e"])?;
        let rack: Rack = "a".parse()?;
        assert_eq!(
            choose_strategy(&rack, &BoardConstraint::unconstrained(), &dictionary),
            Strategy::RackPermutations
        );
        assert_eq!(
            choose_strategy(&rack, &"bc".parse()?, &dictionary),
            Strategy::DictionaryScan
        );
        Ok(())
    }

    #[test]
    fn test_strategies_agree() -> Result<()> {
        let dictionary =
            Dictionary::from_words(&["a", "aa", "at", "ta", "tat", "cat", "act", "scat"])?;
        for rack in &["tac", "a*", "t*s", "**"] {
            for pattern in &["", "^c", "a", ".t$"] {
                let rack: Rack = rack.parse()?;
                let constraint: BoardConstraint = pattern.parse()?;
                let permuted = RackPermutations::new(&dictionary).enumerate(&rack, &constraint);
                let scanned = DictionaryScan::new(&dictionary).enumerate(&rack, &constraint);
                assert_eq!(permuted, scanned, "rack {} pattern {}", rack, pattern);
            }
        }
        Ok(())
    }
}
