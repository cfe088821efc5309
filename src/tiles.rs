//! Basic types for working with letter tiles.
mod codec;
mod codes;
mod rack;
mod tile;
mod word;

/// Inline capacity of tile lists; longer lists spill to the heap.
pub(crate) const DIM: usize = 16;
pub use codec::{codec, Codec};
pub use codes::{Label, ALPHABET, LETTER_COUNT, WILDCARD};
pub use rack::Rack;
pub use tile::{Origin, Tile};
pub use word::Word;
