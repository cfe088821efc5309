use super::Enumerator;
use crate::dictionary::Dictionary;
use crate::labelset::LabelSet;
use crate::pattern::{BoardConstraint, Placement};
use crate::tilebag::TileBag;
use crate::tiles::{Label, Rack, Tile, Word};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::HashSet;

/// Test every dictionary word against the rack and the board window.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryScan<'a> {
    dictionary: &'a Dictionary,
}

/// The covering state of a single word placement.
struct Cover<'a> {
    labels: &'a [Label],
    tiles: Vec<Tile>,
    bag: TileBag,
    wildcards: usize,
}

impl<'a> Cover<'a> {
    /// Fill position `pos` and all positions after it, skipping the board positions.
    fn fill(&mut self, pos: usize, found: &mut HashSet<Word>) {
        if pos == self.labels.len() {
            found.insert(self.tiles.iter().copied().collect());
            return;
        }
        if self.tiles[pos].is_board() {
            return self.fill(pos + 1, found);
        }
        let label = self.labels[pos];
        for &tile in &[Tile::rack(label), Tile::blank(label)] {
            if self.bag.take(&tile) {
                self.tiles[pos] = tile;
                self.fill(pos + 1, found);
                self.bag.insert(tile);
            }
        }
        if self.wildcards > 0 {
            self.wildcards -= 1;
            self.tiles[pos] = Tile::blank(label);
            self.fill(pos + 1, found);
            self.wildcards += 1;
        }
    }
}

impl<'a> DictionaryScan<'a> {
    pub fn new(dictionary: &'a Dictionary) -> DictionaryScan<'a> {
        DictionaryScan { dictionary }
    }

    /// All ways `labels` can be laid with the rack and the board letters.
    fn cover(
        labels: &[Label],
        placements: &[Placement],
        rack: &Rack,
        found: &mut HashSet<Word>,
    ) {
        for placement in placements {
            let mut tiles = vec![Tile::default(); labels.len()];
            for &pos in &placement.board {
                tiles[pos] = Tile::board(labels[pos]);
            }
            let mut cover = Cover {
                labels,
                tiles,
                bag: TileBag::from(rack),
                wildcards: rack.wildcards(),
            };
            cover.fill(0, found);
        }
    }

    fn scan<I>(words: I, rack: &Rack, constraint: &BoardConstraint) -> HashSet<Word>
    where
        I: Iterator<Item = Vec<Label>>,
    {
        let board_tiles = constraint.board_tiles();
        let needed = board_tiles.len();
        let available: LabelSet = rack
            .tiles()
            .iter()
            .chain(board_tiles.iter())
            .map(Tile::label)
            .collect();
        let mut found = HashSet::new();
        for labels in words {
            if labels.len() > rack.len() + needed {
                continue;
            }
            if !rack.has_wildcards() && !LabelSet::from(&labels[..]).is_subset(available) {
                continue;
            }
            if !constraint.is_match(&labels) {
                continue;
            }
            let placements = constraint.placements(&labels);
            DictionaryScan::cover(&labels, &placements, rack, &mut found);
        }
        found
    }
}

impl<'a> Enumerator for DictionaryScan<'a> {
    #[cfg(feature = "rayon")]
    fn enumerate(&self, rack: &Rack, constraint: &BoardConstraint) -> HashSet<Word> {
        self.dictionary
            .shards()
            .into_par_iter()
            .map(|node| DictionaryScan::scan(self.dictionary.shard_words(node), rack, constraint))
            .reduce(HashSet::new, |mut a, b| {
                a.extend(b);
                a
            })
    }

    #[cfg(not(feature = "rayon"))]
    fn enumerate(&self, rack: &Rack, constraint: &BoardConstraint) -> HashSet<Word> {
        DictionaryScan::scan(self.dictionary.words(), rack, constraint)
    }
}
