use super::codec::codec;
use super::codes::{Label, WILDCARD};
use super::{Tile, DIM};
use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use tinyvec::TinyVec;

/// The tiles a player can use: letter tiles plus a number of unassigned wildcards.
///
/// Letter tiles have origin [`Rack`](crate::Origin::Rack), or
/// [`Blank`](crate::Origin::Blank) once a wildcard has been assigned a letter.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Rack {
    tiles: TinyVec<[Tile; DIM]>,
    wildcards: usize,
}

impl Rack {
    pub fn new() -> Rack {
        Rack::default()
    }

    pub(crate) fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub(crate) fn push_wildcard(&mut self) {
        self.wildcards += 1;
    }

    /// The letter tiles on the rack
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The number of unassigned wildcards
    pub fn wildcards(&self) -> usize {
        self.wildcards
    }

    pub fn has_wildcards(&self) -> bool {
        self.wildcards > 0
    }

    /// Total number of tiles, wildcards included
    pub fn len(&self) -> usize {
        self.tiles.len() + self.wildcards
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return a copy of this rack with one wildcard assigned to `label`.
    /// Returns `None` if there is no wildcard left.
    /// ## Example
    /// ```
    /// use rack_solver::{Rack, Tile};
    /// let rack: Rack = "t*".parse().unwrap();
    /// let resolved = rack.with_wildcard_as(1).unwrap();
    /// assert_eq!(resolved.tiles(), &[Tile::rack(20), Tile::blank(1)]);
    /// assert!(!resolved.has_wildcards());
    /// ```
    pub fn with_wildcard_as(&self, label: Label) -> Option<Rack> {
        if self.wildcards == 0 {
            return None;
        }
        let mut rack = self.clone();
        rack.wildcards -= 1;
        rack.tiles.push(Tile::blank(label));
        Some(rack)
    }
}

impl FromStr for Rack {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        codec().encode_rack(s)
    }
}

/// Display rack tiles followed by the wildcards, e.g. `CAt**`
impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for tile in self.tiles.iter() {
            write!(f, "{}", tile)?;
        }
        for _ in 0..self.wildcards {
            write!(f, "{}", WILDCARD)?;
        }
        Ok(())
    }
}
