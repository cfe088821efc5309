use super::blanks::resolve;
use super::Enumerator;
use crate::dictionary::Dictionary;
use crate::pattern::BoardConstraint;
use crate::tiles::{Rack, Tile, Word};
use std::collections::HashSet;

/// Build words by arranging the rack tiles together with the board letters.
///
/// The arrangements are walked along the dictionary trie, so a prefix that
/// starts no word is abandoned at once. The result is the same as trying
/// every permutation of every subset of the tiles.
#[derive(Debug, Clone, Copy)]
pub struct RackPermutations<'a> {
    dictionary: &'a Dictionary,
}

struct Walk<'a> {
    dictionary: &'a Dictionary,
    constraint: &'a BoardConstraint,
    pool: Vec<Tile>,
    used: Vec<bool>,
    word: Word,
    found: HashSet<Word>,
}

impl<'a> Walk<'a> {
    fn new(dictionary: &'a Dictionary, constraint: &'a BoardConstraint, rack: &Rack) -> Walk<'a> {
        let mut pool: Vec<Tile> = rack.tiles().to_vec();
        pool.extend(constraint.board_tiles());
        // equal tiles must be adjacent to skip them
        pool.sort();
        let used = vec![false; pool.len()];
        Walk {
            dictionary,
            constraint,
            pool,
            used,
            word: Word::new(),
            found: HashSet::new(),
        }
    }

    fn walk(&mut self, node: usize) {
        if !self.word.is_empty()
            && self.dictionary.is_terminal(node)
            && self.constraint.fits(&self.word)
        {
            self.found.insert(self.word.clone());
        }
        let mut tried: Option<Tile> = None;
        for i in 0..self.pool.len() {
            let tile = self.pool[i];
            if self.used[i] || tried == Some(tile) {
                continue;
            }
            tried = Some(tile);
            if let Some(child) = self.dictionary.get(node, tile.label()) {
                self.used[i] = true;
                self.word.push(tile);
                self.walk(child);
                self.word.pop();
                self.used[i] = false;
            }
        }
    }
}

impl<'a> RackPermutations<'a> {
    pub fn new(dictionary: &'a Dictionary) -> RackPermutations<'a> {
        RackPermutations { dictionary }
    }

    fn permute(&self, rack: &Rack, constraint: &BoardConstraint) -> HashSet<Word> {
        let mut walk = Walk::new(self.dictionary, constraint, rack);
        walk.walk(self.dictionary.root());
        walk.found
    }
}

impl<'a> Enumerator for RackPermutations<'a> {
    fn enumerate(&self, rack: &Rack, constraint: &BoardConstraint) -> HashSet<Word> {
        let mut found = HashSet::new();
        for rack in resolve(rack) {
            found.extend(self.permute(&rack, constraint));
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    type Result<T> = std::result::Result<T, Error>;

    fn words(found: &HashSet<Word>) -> Vec<String> {
        let mut words: Vec<String> = found.iter().map(Word::to_string).collect();
        words.sort();
        words
    }

    #[test]
    fn test_permutations() -> Result<()> {
        let dictionary = Dictionary::from_words(&["a", "at", "cat", "act", "tact", "cast"])?;
        let found = RackPermutations::new(&dictionary)
            .enumerate(&"tac".parse()?, &BoardConstraint::unconstrained());
        assert_eq!(words(&found), vec!["A", "ACT", "AT", "CAT"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_tiles() -> Result<()> {
        let dictionary = Dictionary::from_words(&["tat", "at"])?;
        let found = RackPermutations::new(&dictionary)
            .enumerate(&"tta".parse()?, &BoardConstraint::unconstrained());
        assert_eq!(words(&found), vec!["AT", "TAT"]);
        Ok(())
    }

    #[test]
    fn test_wildcard() -> Result<()> {
        let dictionary = Dictionary::from_words(&["at", "it"])?;
        let found = RackPermutations::new(&dictionary)
            .enumerate(&"t*".parse()?, &BoardConstraint::unconstrained());
        assert_eq!(words(&found), vec!["aT", "iT"]);
        Ok(())
    }

    #[test]
    fn test_board_letters() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cars", "cats", "at"])?;
        let found = RackPermutations::new(&dictionary).enumerate(&"ats".parse()?, &"^c".parse()?);
        assert_eq!(words(&found), vec!["(C)ATS"]);
        Ok(())
    }
}
