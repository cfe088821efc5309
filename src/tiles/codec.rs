use super::codes::{Label, LETTER_COUNT, WILDCARD};
use super::{Rack, Tile};
use crate::error::Error;
use lazy_static::lazy_static;
use std::collections::HashMap;

const ASCII_UC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

lazy_static! {
    static ref DEFAULT_CODEC: Codec = Codec::new();
}

/// Return the shared default codec.
pub fn codec() -> &'static Codec {
    &DEFAULT_CODEC
}

#[derive(Debug, Clone)]
/// Translate from string to letter labels and vice versa.
/// - 1 .. 26: `A` .. `Z` (case-insensitive on input)
/// - `*`: an unassigned wildcard, only valid on a rack
pub struct Codec {
    encoder: HashMap<char, Label>,
    decoder: Vec<char>,
}

impl Default for Codec {
    fn default() -> Codec {
        Codec::new()
    }
}

impl Codec {
    /// Return a new `Codec` for "A".."Z".
    pub fn new() -> Codec {
        let mut encoder = HashMap::new();
        let mut decoder = vec![' '; LETTER_COUNT as usize + 1];
        for (i, uc) in ASCII_UC.chars().enumerate() {
            let label = i as Label + 1;
            encoder.insert(uc, label);
            encoder.insert(uc.to_ascii_lowercase(), label);
            decoder[label as usize] = uc;
        }
        Codec { encoder, decoder }
    }

    /// Encode a single letter.
    /// ## Errors
    /// If `ch` is not an ascii letter.
    pub fn encode_char(&self, ch: char) -> Result<Label, Error> {
        self.encoder
            .get(&ch)
            .copied()
            .ok_or_else(|| Error::EncodeInvalidToken(String::from(ch)))
    }

    /// Encode a word, and return a list of labels.
    /// ## Errors
    /// An error is returned if the word contains anything but ascii letters.
    /// ## Examples
    /// ```
    /// use rack_solver::{Codec, Error};
    /// let codec = Codec::default();
    /// let labels = codec.encode("azAZ")?;
    /// assert_eq!(labels, vec![1, 26, 1, 26]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(&self, word: &str) -> Result<Vec<Label>, Error> {
        word.chars().map(|ch| self.encode_char(ch)).collect()
    }

    /// Encode a rack. Letters become rack tiles, each `*` adds a wildcard.
    /// ## Errors
    /// An error is returned for any other character.
    /// ## Examples
    /// ```
    /// use rack_solver::{Codec, Error};
    /// let rack = Codec::default().encode_rack("ca*t")?;
    /// assert_eq!(rack.tiles().len(), 3);
    /// assert_eq!(rack.wildcards(), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode_rack(&self, letters: &str) -> Result<Rack, Error> {
        let mut rack = Rack::new();
        for ch in letters.chars() {
            if ch == WILDCARD {
                rack.push_wildcard();
            } else {
                rack.push(Tile::rack(self.encode_char(ch)?));
            }
        }
        Ok(rack)
    }

    /// Decode a label to its uppercase letter.
    /// Labels outside 1..=26 decode to a space.
    pub fn decode(&self, label: Label) -> char {
        self.decoder.get(label as usize).copied().unwrap_or(' ')
    }

    /// Decode labels to an uppercase string.
    pub fn decode_labels(&self, labels: &[Label]) -> String {
        labels.iter().map(|&label| self.decode(label)).collect()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_encode() {
        let codec = Codec::default();
        let codes = codec.encode("azAZ").unwrap();
        assert_eq!(codes, vec![1, 26, 1, 26]);
    }

    #[test]
    #[should_panic(expected = "EncodeInvalidToken")]
    fn test_encode_error() {
        let codec = Codec::default();
        let codes = codec.encode("Illegal!").unwrap();
        println!("{:?}", codes);
    }

    #[test]
    fn test_encode_rack() -> Result<(), Error> {
        let rack = codec().encode_rack("**q")?;
        assert_eq!(rack.wildcards(), 2);
        assert_eq!(rack.tiles(), &[Tile::rack(17)]);
        Ok(())
    }

    #[test]
    fn test_decode() {
        let codec = Codec::default();
        assert_eq!(codec.decode_labels(&[3, 1, 20]), "CAT");
        assert_eq!(codec.decode(0), ' ');
    }
}
