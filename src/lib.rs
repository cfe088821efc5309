//! A word finder for Scrabble and Words With Friends.
//! <br>
//! Given the tiles on a rack and a window of cells on the board, this crate finds every
//! dictionary word that can be laid, and scores it with the tile values of the game.
//! Wildcards can stand for any letter. Board letters must be used where they are, and
//! rack tiles fill the open cells.
//! It can use the `rayon` crate to search in parallel.
//!
//! # How to use `rack_solver`
//! Create a [`Finder`] for a game mode and give it a dictionary. The wordfile must be in utf-8
//! and contain one word per line. A small english wordlist is included in `wordlists/words.txt`.
//!
//! # Basic usage
//!  ```
//! use rack_solver::{Finder, Mode};
//!
//! let finder = Finder::new(Mode::Scrabble).with_dictionary_from_words(&["rust", "rest", "rusts"])?;
//! let results = finder.find_words("rust*", "")?;
//! assert_eq!(results[0].to_string(), "RUST - 4");
//! for result in finder.find_words("ut*", "^r.s")? {
//!     println!("{}", result);
//! }
//! # Ok::<(), rack_solver::Error>(())
//! ```
//!
//! # About implementation
//! The dictionary is a trie, flattened to a list of nodes. Two strategies enumerate the words:
//! permutations of the rack tiles along the trie, or a scan of all dictionary words.
//! The cheapest is chosen from an estimate of the number of arrangements of the rack.
//! See [`search`].
mod dictionary;
mod error;
mod finder;
mod input;
mod labelset;
mod pattern;
mod result;
pub mod search;
mod tilebag;
mod tiles;
mod tilesets;

pub use dictionary::{Dictionary, Words};
pub use error::Error;
pub use finder::{DictionaryPaths, Finder, Lexicon, FALLBACK_WORDFILE};
pub use input::{sanitize_constraint, sanitize_rack};
pub use labelset::LabelSet;
pub use pattern::{BoardConstraint, Placement, Slot, MAX_WINDOW};
pub use result::{score, WordResult};
pub use tiles::{codec, Codec, Label, Origin, Rack, Tile, Word};
pub use tilesets::{Mode, TileSet};
