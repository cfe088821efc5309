//! Board constraints: the window of board cells a word has to fit in.
//!
//! A constraint is written as a compact pattern, read left to right:
//! - a letter is a tile that is already on the board,
//! - `.` (or `\w`) is an open cell, to be filled from the rack,
//! - `{n}` repeats the preceding item `n` times, `{m,n}` gives `m` to `n` open cells,
//! - `^` and `$` anchor the word to the start and end of the window.
//!
//! Without anchors the window may lie anywhere inside a longer word.
use crate::tiles::{codec, Label, Tile, Word};
use crate::Error;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

/// The number of cells in a row of the board. A window never spans more.
pub const MAX_WINDOW: usize = 15;

/// One item of a board pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A letter on the board
    Fixed(Label),
    /// `min..=max` cells that are filled by the player
    Open { min: usize, max: usize },
}

/// A match of a pattern in a word: the positions in the word taken by the board letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placement {
    pub board: Vec<usize>,
}

/// A positional pattern over a window of board cells.
/// ## Examples
/// ```
/// use rack_solver::{BoardConstraint, Error};
/// let constraint: BoardConstraint = "^c.{2}s".parse()?;
/// assert_eq!(constraint.board_letters(), "CS");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardConstraint {
    slots: Vec<Slot>,
    anchored_start: bool,
    anchored_end: bool,
}

struct Parser<'a> {
    pattern: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn error<T>(&self, reason: &str) -> Result<T, Error> {
        Err(Error::MalformedConstraint {
            pattern: String::from(self.pattern),
            reason: String::from(reason),
        })
    }

    fn number(&mut self) -> Result<usize, Error> {
        let mut digits = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.chars.next();
        }
        match digits.parse() {
            Ok(n) => Ok(n),
            Err(_) => self.error("expected a number in quantifier"),
        }
    }

    /// Parse `n}` or `m,n}` after an opening brace.
    fn quantifier(&mut self) -> Result<(usize, usize), Error> {
        let min = self.number()?;
        let max = match self.chars.next() {
            Some((_, '}')) => return Ok((min, min)),
            Some((_, ',')) => self.number()?,
            _ => return self.error("unterminated quantifier"),
        };
        match self.chars.next() {
            Some((_, '}')) if min <= max => Ok((min, max)),
            Some((_, '}')) => self.error("quantifier minimum exceeds maximum"),
            _ => self.error("unterminated quantifier"),
        }
    }

    fn parse(mut self) -> Result<BoardConstraint, Error> {
        let mut constraint = BoardConstraint::default();
        // the last item and whether it may still take a quantifier
        let mut last: Option<Slot> = None;
        let mut quantified = false;
        while let Some((i, ch)) = self.chars.next() {
            if constraint.anchored_end {
                return self.error("'$' must be the last character");
            }
            let item = match ch {
                '^' if i == 0 => {
                    constraint.anchored_start = true;
                    continue;
                }
                '^' => return self.error("'^' must be the first character"),
                '$' => {
                    constraint.anchored_end = true;
                    None
                }
                '.' => Some(Slot::Open { min: 1, max: 1 }),
                '\\' => match self.chars.next() {
                    Some((_, 'w')) => Some(Slot::Open { min: 1, max: 1 }),
                    _ => return self.error("only '\\w' may be escaped"),
                },
                '{' => {
                    let slot = match last {
                        Some(slot) if !quantified => slot,
                        Some(_) => return self.error("quantifier follows a quantifier"),
                        None => return self.error("quantifier without a preceding item"),
                    };
                    let (min, max) = self.quantifier()?;
                    if min > MAX_WINDOW {
                        return self.error("window longer than the board");
                    }
                    constraint.slots.pop();
                    match slot {
                        Slot::Open { .. } => {
                            constraint.slots.push(Slot::Open { min, max });
                        }
                        Slot::Fixed(_) if min != max => {
                            return self.error("a board letter can only be repeated a fixed number of times")
                        }
                        Slot::Fixed(_) if min == 0 => {
                            return self.error("a board letter can not be repeated 0 times")
                        }
                        Slot::Fixed(label) => {
                            constraint.slots.extend((0..min).map(|_| Slot::Fixed(label)));
                        }
                    }
                    if constraint.min_cells() > MAX_WINDOW {
                        return self.error("window longer than the board");
                    }
                    quantified = true;
                    continue;
                }
                ch => match codec().encode_char(ch) {
                    Ok(label) => Some(Slot::Fixed(label)),
                    Err(_) => return self.error(&format!("unexpected character '{}'", ch)),
                },
            };
            if let Some(slot) = item {
                constraint.slots.push(slot);
                if constraint.min_cells() > MAX_WINDOW {
                    return self.error("window longer than the board");
                }
            }
            last = item;
            quantified = false;
        }
        Ok(constraint)
    }
}

impl FromStr for BoardConstraint {
    type Err = Error;
    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Parser {
            pattern,
            chars: pattern.char_indices().peekable(),
        }
        .parse()
    }
}

impl fmt::Display for BoardConstraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.anchored_start {
            write!(f, "^")?;
        }
        for slot in &self.slots {
            match *slot {
                Slot::Fixed(label) => write!(f, "{}", codec().decode(label))?,
                Slot::Open { min: 1, max: 1 } => write!(f, ".")?,
                Slot::Open { min, max } if min == max => write!(f, ".{{{}}}", min)?,
                Slot::Open { min, max } => write!(f, ".{{{},{}}}", min, max)?,
            }
        }
        if self.anchored_end {
            write!(f, "$")?;
        }
        Ok(())
    }
}

impl BoardConstraint {
    /// A constraint that accepts any word
    pub fn unconstrained() -> BoardConstraint {
        BoardConstraint::default()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_anchored_start(&self) -> bool {
        self.anchored_start
    }

    pub fn is_anchored_end(&self) -> bool {
        self.anchored_end
    }

    /// The least number of cells the window spans.
    pub fn min_cells(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| match slot {
                Slot::Fixed(_) => 1,
                Slot::Open { min, .. } => *min,
            })
            .sum()
    }

    /// The letters on the board, in order, as board tiles.
    pub fn board_tiles(&self) -> Vec<Tile> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Fixed(label) => Some(Tile::board(*label)),
                Slot::Open { .. } => None,
            })
            .collect()
    }

    /// The letters on the board as an uppercase string
    pub fn board_letters(&self) -> String {
        self.board_tiles().iter().map(Tile::to_char).collect()
    }

    /// Check if the pattern matches the letters of a word somewhere, ignoring where the letters come from.
    pub fn is_match(&self, labels: &[Label]) -> bool {
        !self
            .search(labels.len(), true, |pos, slot| match slot {
                Slot::Fixed(label) => labels[pos] == label,
                Slot::Open { .. } => true,
            })
            .is_empty()
    }

    /// Check if a word fits the board window.
    ///
    /// The letters must match the pattern, and the tiles aligned with board
    /// letters must be board tiles: a rack tile with the same letter does not count.
    /// Open cells only take tiles from the rack.
    /// ## Examples
    /// ```
    /// use rack_solver::{BoardConstraint, Error, Tile, Word};
    /// let constraint: BoardConstraint = "^c".parse()?;
    /// let on_board: Word = vec![Tile::board(3), Tile::rack(1), Tile::rack(20)].into_iter().collect();
    /// let from_rack: Word = vec![Tile::rack(3), Tile::rack(1), Tile::rack(20)].into_iter().collect();
    /// assert!(constraint.fits(&on_board));
    /// assert!(!constraint.fits(&from_rack));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn fits(&self, word: &Word) -> bool {
        if !self.is_match(&word.labels()) {
            return false;
        }
        !self
            .search(word.len(), true, |pos, slot| {
                let tile = word[pos];
                match slot {
                    Slot::Fixed(label) => tile.is_board() && tile.label() == label,
                    Slot::Open { .. } => !tile.is_board(),
                }
            })
            .is_empty()
    }

    /// All distinct ways the pattern matches the letters of a word, at every offset.
    pub fn placements(&self, labels: &[Label]) -> Vec<Placement> {
        self.search(labels.len(), false, |pos, slot| match slot {
            Slot::Fixed(label) => labels[pos] == label,
            Slot::Open { .. } => true,
        })
        .into_iter()
        .collect()
    }

    /// Find placements in a word of length `len`. `accept` checks a single position.
    fn search<F>(&self, len: usize, first: bool, accept: F) -> BTreeSet<Placement>
    where
        F: Fn(usize, Slot) -> bool,
    {
        let mut found = BTreeSet::new();
        let last_start = if self.anchored_start { 0 } else { len };
        let mut board = Vec::new();
        for start in 0..=last_start {
            self.extend(0, start, len, first, &accept, &mut board, &mut found);
            if first && !found.is_empty() {
                break;
            }
        }
        found
    }

    #[allow(clippy::too_many_arguments)]
    fn extend<F>(
        &self,
        slot: usize,
        pos: usize,
        len: usize,
        first: bool,
        accept: &F,
        board: &mut Vec<usize>,
        found: &mut BTreeSet<Placement>,
    ) where
        F: Fn(usize, Slot) -> bool,
    {
        if first && !found.is_empty() {
            return;
        }
        if slot == self.slots.len() {
            if !self.anchored_end || pos == len {
                found.insert(Placement {
                    board: board.clone(),
                });
            }
            return;
        }
        match self.slots[slot] {
            s @ Slot::Fixed(_) => {
                if pos < len && accept(pos, s) {
                    board.push(pos);
                    self.extend(slot + 1, pos + 1, len, first, accept, board, found);
                    board.pop();
                }
            }
            s @ Slot::Open { min, max } => {
                for k in 0..=max {
                    if k >= min {
                        self.extend(slot + 1, pos + k, len, first, accept, board, found);
                    }
                    if k == max || pos + k >= len || !accept(pos + k, s) {
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    fn word(tiles: &[(char, bool)]) -> Word {
        tiles
            .iter()
            .map(|&(ch, on_board)| {
                let label = codec().encode_char(ch).unwrap();
                if on_board {
                    Tile::board(label)
                } else {
                    Tile::rack(label)
                }
            })
            .collect()
    }

    #[test]
    fn test_parse() -> Result<()> {
        let constraint: BoardConstraint = "^a.\\wb{2}.{1,3}$".parse()?;
        assert!(constraint.is_anchored_start());
        assert!(constraint.is_anchored_end());
        assert_eq!(
            constraint.slots(),
            &[
                Slot::Fixed(1),
                Slot::Open { min: 1, max: 1 },
                Slot::Open { min: 1, max: 1 },
                Slot::Fixed(2),
                Slot::Fixed(2),
                Slot::Open { min: 1, max: 3 },
            ]
        );
        assert_eq!(constraint.board_letters(), "ABB");
        assert_eq!(constraint.to_string(), "^A..BB.{1,3}$");
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<()> {
        let constraint: BoardConstraint = "".parse()?;
        assert_eq!(constraint, BoardConstraint::unconstrained());
        assert!(constraint.board_tiles().is_empty());
        assert!(constraint.is_match(&[3, 1, 20]));
        assert_eq!(constraint.placements(&[3, 1, 20]).len(), 1);
        Ok(())
    }

    #[test]
    fn test_malformed() {
        for pattern in &[
            "c{", "{2}", "c{a}", "^^c", "c$a", "c#", ".{3,1}", "c{1,2}", "c{0}", ".{2}{3}", "\\d",
            "c{2", ".{1,}", "c{100000}", "c{1000000000000}", ".{1000000000000,1000000000000}",
            ".{16}", "c{15}a", "abcdefgh.{4,9}cdef",
        ] {
            let result = pattern.parse::<BoardConstraint>();
            assert!(
                matches!(result, Err(Error::MalformedConstraint { .. })),
                "{} should be malformed",
                pattern
            );
        }
    }

    #[test]
    fn test_window_size() -> Result<()> {
        let constraint: BoardConstraint = "c{15}".parse()?;
        assert_eq!(constraint.min_cells(), MAX_WINDOW);
        let constraint: BoardConstraint = "^c.{0,1000}t".parse()?;
        assert_eq!(constraint.min_cells(), 2);
        let constraint: BoardConstraint = ".{2,3}a.".parse()?;
        assert_eq!(constraint.min_cells(), 4);
        Ok(())
    }

    #[test]
    fn test_is_match() -> Result<()> {
        let cats = codec().encode("cats")?;
        let constraint: BoardConstraint = "a.s".parse()?;
        assert!(constraint.is_match(&cats));
        let constraint: BoardConstraint = "^a".parse()?;
        assert!(!constraint.is_match(&cats));
        let constraint: BoardConstraint = "t$".parse()?;
        assert!(!constraint.is_match(&cats));
        let constraint: BoardConstraint = "^.{0,2}t".parse()?;
        assert!(constraint.is_match(&cats));
        let constraint: BoardConstraint = "^.{3,4}$".parse()?;
        assert!(constraint.is_match(&cats));
        let constraint: BoardConstraint = "^.{5}$".parse()?;
        assert!(!constraint.is_match(&cats));
        Ok(())
    }

    #[test]
    fn test_fits_origin() -> Result<()> {
        let constraint: BoardConstraint = "c.t".parse()?;
        assert!(constraint.fits(&word(&[('c', true), ('a', false), ('t', true)])));
        // the letters match, but the c comes from the rack
        assert!(!constraint.fits(&word(&[('c', false), ('a', false), ('t', true)])));
        // an open cell can not hold a board letter
        assert!(!constraint.fits(&word(&[('c', true), ('a', true), ('t', true)])));
        // the window may lie inside a longer word
        assert!(constraint.fits(&word(&[
            ('s', false),
            ('c', true),
            ('a', false),
            ('t', true),
            ('s', false)
        ])));
        Ok(())
    }

    #[test]
    fn test_placements_overlap() -> Result<()> {
        let constraint: BoardConstraint = "a.a".parse()?;
        let labels = codec().encode("banana")?;
        let placements = constraint.placements(&labels);
        assert_eq!(
            placements,
            vec![
                Placement { board: vec![1, 3] },
                Placement { board: vec![3, 5] }
            ]
        );
        Ok(())
    }

    #[test]
    fn test_placements_open_span() -> Result<()> {
        let constraint: BoardConstraint = "^.{0,2}a".parse()?;
        let labels = codec().encode("aaa")?;
        let boards: Vec<Vec<usize>> = constraint
            .placements(&labels)
            .into_iter()
            .map(|p| p.board)
            .collect();
        assert_eq!(boards, vec![vec![0], vec![1], vec![2]]);
        Ok(())
    }
}
