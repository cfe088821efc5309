/// Code 1..=26 for the letters `A`..`Z`
pub type Label = u8;

/// Number of letters in the alphabet
pub const LETTER_COUNT: u8 = 26;

/// All valid letter labels, in alphabetic order
pub const ALPHABET: std::ops::RangeInclusive<Label> = 1..=LETTER_COUNT;

/// Character used for an unassigned wildcard (blank tile) on a rack
pub const WILDCARD: char = '*';

/// An uninitialized tile
pub(super) const UNINIT: Label = 0x7f;
