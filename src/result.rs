use crate::tiles::Word;
use crate::tilesets::TileSet;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Sum the points of the tiles in `word`. Blanks score nothing.
/// ## Examples
/// ```
/// use rack_solver::{score, Mode, Tile, TileSet, Word};
/// let tileset = TileSet::new(Mode::Scrabble);
/// let word: Word = vec![Tile::rack(3), Tile::blank(1), Tile::board(20)].into_iter().collect();
/// assert_eq!(score(&word, &tileset), 4);
/// ```
pub fn score(word: &Word, tileset: &TileSet) -> u32 {
    word.iter()
        .filter(|tile| !tile.is_blank())
        .map(|tile| tileset.points(tile.label()))
        .sum()
}

/// A word that can be played, with its score.
///
/// Results are identified by their tagged tiles, so the same letters laid
/// with different tiles are different results.
/// They sort by score (highest first), then alphabetically.
#[derive(Debug, Clone)]
pub struct WordResult {
    word: Word,
    score: u32,
    length: usize,
}

impl WordResult {
    pub fn new(word: Word, tileset: &TileSet) -> WordResult {
        let score = score(&word, tileset);
        let length = word.len();
        WordResult {
            word,
            score,
            length,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// The word in uppercase letters, without origin marks
    pub fn letters(&self) -> String {
        self.word.letters()
    }
}

impl PartialEq for WordResult {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordResult {}

impl Hash for WordResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl Ord for WordResult {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then_with(|| self.word.letters().cmp(&other.word.letters()))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for WordResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for WordResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} - {}", self.word, self.score)
    }
}
