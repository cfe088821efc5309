use crate::tiles::Label;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod scrabble;
mod wwf;

/// These game modes are supported. The mode selects both the tile values and the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Scrabble
    Scrabble,
    /// Words With Friends
    Wwf,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Wwf
    }
}

impl Mode {
    /// All supported modes
    pub const ALL: [Mode; 2] = [Mode::Scrabble, Mode::Wwf];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Scrabble => "scrabble",
            Mode::Wwf => "wwf",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse a mode, ignoring case.
/// ## Examples
/// ```
/// use rack_solver::Mode;
/// assert_eq!("Scrabble".parse::<Mode>().unwrap(), Mode::Scrabble);
/// assert!("chess".parse::<Mode>().is_err());
/// ```
impl FromStr for Mode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scrabble" => Ok(Mode::Scrabble),
            "wwf" => Ok(Mode::Wwf),
            _ => Err(Error::InvalidMode(String::from(s))),
        }
    }
}

/// letter, count, points
type TileInfo = (char, u32, u32);

/// The tile distribution for a game mode: the number of tiles and the value of each letter.
/// Index 0 holds the blank tile, 1..=26 the letters `A`..`Z`.
#[derive(Debug, Clone)]
pub struct TileSet {
    mode: Mode,
    tiles: &'static [TileInfo],
}

impl TileSet {
    /// Return a new `TileSet` for `mode`.
    pub fn new(mode: Mode) -> TileSet {
        let tiles = match mode {
            Mode::Scrabble => scrabble::TILESET,
            Mode::Wwf => wwf::TILESET,
        };
        TileSet { mode, tiles }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Return the points for letter `label`, or 0 if not found
    pub fn points(&self, label: Label) -> u32 {
        if let Some(&tile) = self.tiles.get(label as usize) {
            return tile.2;
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tileset() {
        let tileset = TileSet::new(Mode::Scrabble);
        assert_eq!(tileset.points(0), 0);
        assert_eq!(tileset.points(3), 3);
        assert_eq!(tileset.points(26), 10);
        assert_eq!(tileset.points(27), 0);
    }

    #[test]
    fn test_wwf() {
        let tileset = TileSet::new(Mode::Wwf);
        assert_eq!(tileset.points(3), 4);
        assert_eq!(tileset.points(10), 10);
        assert_eq!(tileset.points(0), 0);
    }

    #[test]
    fn test_letters_in_order() {
        for mode in Mode::ALL.iter() {
            let tileset = TileSet::new(*mode);
            for (i, tile) in tileset.tiles.iter().enumerate().skip(1) {
                assert_eq!(tile.0, (b'A' + i as u8 - 1) as char);
            }
        }
    }

    #[test]
    fn test_mode() -> Result<(), Error> {
        assert_eq!("WWF".parse::<Mode>()?, Mode::Wwf);
        assert_eq!(Mode::default(), Mode::Wwf);
        assert_eq!(Mode::Scrabble.to_string(), "scrabble");
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidMode")]
    fn test_invalid_mode() {
        "monopoly".parse::<Mode>().unwrap();
    }
}
