use super::codes::{Label, UNINIT};
use super::codec;
use std::fmt;

/// Where the letter of a [`Tile`](crate::Tile) comes from.
///
/// The derived ordering (`Rack` < `Blank` < `Board`) is only used to break ties
/// between results with the same letters.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Origin {
    /// A regular tile from the player's rack
    Rack,
    /// A wildcard from the rack, assigned to a letter. Scores 0 points.
    Blank,
    /// A letter that is already on the board
    Board,
}

/// A letter tile in a word, tagged with its [`Origin`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    label: Label,
    origin: Origin,
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(UNINIT, Origin::Rack)
    }
}

impl Tile {
    /// Create a tile with `label` and `origin`.
    pub fn new(label: Label, origin: Origin) -> Tile {
        Tile { label, origin }
    }

    /// A regular rack tile.
    pub fn rack(label: Label) -> Tile {
        Tile::new(label, Origin::Rack)
    }

    /// A wildcard assigned to `label`.
    /// ## Example
    /// ```
    /// use rack_solver::{Origin, Tile};
    /// let tile = Tile::blank(1);
    /// assert_eq!(tile.label(), 1);
    /// assert_eq!(tile.origin(), Origin::Blank);
    /// assert_eq!(tile.to_char(), 'a');
    /// ```
    pub fn blank(label: Label) -> Tile {
        Tile::new(label, Origin::Blank)
    }

    /// A letter already on the board.
    pub fn board(label: Label) -> Tile {
        Tile::new(label, Origin::Board)
    }

    /// Get label for tile, ignoring the origin.
    pub fn label(&self) -> Label {
        self.label
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Check if the tile is an assigned wildcard
    pub fn is_blank(&self) -> bool {
        self.origin == Origin::Blank
    }

    /// Check if the tile was already on the board
    pub fn is_board(&self) -> bool {
        self.origin == Origin::Board
    }

    /// The letter as it is displayed: lowercase for blanks, uppercase otherwise.
    pub fn to_char(&self) -> char {
        let ch = codec().decode(self.label);
        if self.is_blank() {
            ch.to_ascii_lowercase()
        } else {
            ch
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_char() {
        assert_eq!(Tile::rack(3).to_char(), 'C');
        assert_eq!(Tile::blank(3).to_char(), 'c');
        assert_eq!(Tile::board(26).to_char(), 'Z');
    }

    #[test]
    fn test_origin() {
        let tile = Tile::board(1);
        assert!(tile.is_board());
        assert!(!tile.is_blank());
        assert_ne!(tile, Tile::rack(1));
    }
}
