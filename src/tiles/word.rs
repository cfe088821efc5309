use super::codec::codec;
use super::codes::Label;
use super::{Tile, DIM};
use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;
use tinyvec::TinyVec;

/// A list of [`Tile`](crate::Tile)s forming a (candidate) word.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(TinyVec<[Tile; DIM]>);

impl Index<usize> for Word {
    type Output = Tile;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Word {
    pub fn new() -> Word {
        Word(TinyVec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, tile: Tile) {
        self.0.push(tile);
    }

    pub fn pop(&mut self) -> Option<Tile> {
        self.0.pop()
    }

    pub fn iter(&self) -> Iter<'_, Tile> {
        self.0.iter()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    /// The labels of the word, without origin
    pub fn labels(&self) -> Vec<Label> {
        self.0.iter().map(Tile::label).collect()
    }

    /// The word in uppercase, without origin
    pub fn letters(&self) -> String {
        codec().decode_labels(&self.labels())
    }
}

impl FromIterator<Tile> for Word {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

/// Display the word with blanks in lowercase and board letters between parentheses.
/// ## Example
/// ```
/// use rack_solver::{Tile, Word};
/// let word: Word = vec![Tile::board(3), Tile::blank(1), Tile::rack(20)].into_iter().collect();
/// assert_eq!(word.to_string(), "(C)aT");
/// ```
impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut on_board = false;
        for tile in self.0.iter() {
            if tile.is_board() != on_board {
                write!(f, "{}", if on_board { ')' } else { '(' })?;
                on_board = tile.is_board();
            }
            write!(f, "{}", tile)?;
        }
        if on_board {
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let word: Word = vec![
            Tile::rack(2),
            Tile::board(1),
            Tile::board(18),
            Tile::blank(19),
        ]
        .into_iter()
        .collect();
        assert_eq!(word.to_string(), "B(AR)s");
        assert_eq!(word.letters(), "BARS");
        assert_eq!(word.labels(), vec![2, 1, 18, 19]);
    }

    #[test]
    fn test_push_pop() {
        let mut word = Word::new();
        for label in 1..=20 {
            word.push(Tile::rack(label));
        }
        assert_eq!(word.len(), 20);
        assert_eq!(word.pop(), Some(Tile::rack(20)));
        assert_eq!(word[0], Tile::rack(1));
    }
}
