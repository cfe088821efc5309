use crate::tiles::{Rack, Tile};
use multiset::HashMultiSet;
use std::ops::Deref;

/// A multiset of the letter tiles that are still available while a word is being covered.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Tile>);

impl Deref for TileBag {
    type Target = HashMultiSet<Tile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TileBag {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// Put a tile (back) in the bag.
    pub fn insert(&mut self, tile: Tile) {
        self.0.insert(tile);
    }

    /// Take one `tile` out of the bag. Returns false if it was not present.
    pub fn take(&mut self, tile: &Tile) -> bool {
        self.0.remove(tile)
    }
}

impl Default for TileBag {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Rack> for TileBag {
    fn from(rack: &Rack) -> Self {
        let mut bag = TileBag::new();
        for &tile in rack.tiles() {
            bag.insert(tile);
        }
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_bag() -> Result<(), Error> {
        let rack: Rack = "aab*".parse()?;
        let mut bag = TileBag::from(&rack);
        assert_eq!(bag.len(), 3);
        assert_eq!(bag.count_of(&Tile::rack(1)), 2);
        assert!(bag.take(&Tile::rack(2)));
        assert!(!bag.take(&Tile::rack(2)));
        assert_eq!(bag.count_of(&Tile::blank(1)), 0);
        bag.insert(Tile::rack(2));
        assert_eq!(bag.count_of(&Tile::rack(2)), 1);
        Ok(())
    }
}
