use crate::dictionary::Dictionary;
use crate::pattern::BoardConstraint;
use crate::result::WordResult;
use crate::search::{choose_strategy, substitutions, Strategy};
use crate::tiles::{Rack, Word};
use crate::tilesets::{Mode, TileSet};
use crate::Error;
use log::debug;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;

/// The wordfile shipped with the crate, used when a mode's own wordfile is missing.
pub const FALLBACK_WORDFILE: &str = "wordlists/words.txt";

/// Where to read the dictionary for a game mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPaths {
    pub primary: String,
    pub fallback: String,
}

impl DictionaryPaths {
    /// The default paths for `mode`: `wordlists/scrabble.txt` or `wordlists/wwf.txt`,
    /// falling back to [`FALLBACK_WORDFILE`].
    pub fn new(mode: Mode) -> DictionaryPaths {
        DictionaryPaths {
            primary: format!("wordlists/{}.txt", mode.name()),
            fallback: String::from(FALLBACK_WORDFILE),
        }
    }

    /// Replace the primary wordfile.
    #[must_use]
    pub fn with_primary(mut self, primary: &str) -> DictionaryPaths {
        self.primary = String::from(primary);
        self
    }
}

/// Find all words that can be made from a rack, and score them for one game mode.
#[derive(Debug, Clone)]
pub struct Finder {
    tileset: TileSet,
    dictionary: Dictionary,
}

impl Default for Finder {
    fn default() -> Self {
        Finder::new(Mode::default())
    }
}

impl fmt::Display for Finder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<Finder {}: {}>", self.mode(), self.dictionary)
    }
}

impl Finder {
    /// Return a new `Finder` for `mode`, with an empty dictionary.
    ///```
    /// use rack_solver::{Finder, Mode};
    ///
    /// let finder = Finder::new(Mode::Scrabble);
    ///```
    /// Use a builder function to set the dictionary:
    /// - [`with_dictionary_from_file`](Finder::with_dictionary_from_file)
    /// - [`with_dictionary_from_paths`](Finder::with_dictionary_from_paths)
    /// - [`with_dictionary_from_words`](Finder::with_dictionary_from_words)
    /// - [`with_dictionary`](Finder::with_dictionary)
    #[must_use]
    pub fn new(mode: Mode) -> Finder {
        Finder {
            tileset: TileSet::new(mode),
            dictionary: Dictionary::default(),
        }
    }

    /// Read the dictionary from `wordfile`, and return the modified finder.
    ///
    /// The `wordfile` must contain one word per line.
    /// ## Errors
    /// If the `wordfile` does not exist, or contains anything but letters.
    /// ## Examples
    /// ```
    /// # use rack_solver::{Error, Finder};
    /// let finder = Finder::default().with_dictionary_from_file("wordlists/words.txt")?;
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_dictionary_from_file(self, wordfile: &str) -> Result<Finder, Error> {
        Ok(self.with_dictionary(Dictionary::from_file(wordfile)?))
    }

    /// Read the dictionary from the primary path, or else from the fallback.
    /// ## Errors
    /// [`Error::DictionaryUnavailable`] if neither can be read.
    pub fn with_dictionary_from_paths(self, paths: &DictionaryPaths) -> Result<Finder, Error> {
        Ok(self.with_dictionary(Dictionary::load(&paths.primary, &paths.fallback)?))
    }

    /// Specify the dictionary by a list of words, and return the modified finder.
    /// ## Errors
    /// If the words can not be encoded.
    /// ## Example
    /// ```
    /// # use rack_solver::{Error, Finder};
    /// let finder = Finder::default().with_dictionary_from_words(&["aardvark", "zebra"])?;
    /// # Ok::<(), Error>(())
    ///```
    pub fn with_dictionary_from_words(self, words: &[&str]) -> Result<Finder, Error> {
        Ok(self.with_dictionary(Dictionary::from_words(words)?))
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from the bincoded `wordfile`, and return the modified finder.
    /// ## Errors
    /// If the `wordfile` does not exist, or cannot be decoded.
    pub fn with_dictionary_deserialize_from(self, wordfile: &str) -> Result<Finder, Error> {
        Ok(self.with_dictionary(Dictionary::deserialize_from(wordfile)?))
    }

    /// Use `dictionary`, and return the modified finder.
    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Finder {
        self.dictionary = dictionary;
        self
    }

    pub fn mode(&self) -> Mode {
        self.tileset.mode()
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Find and score all words for a rack and a board pattern.
    ///
    /// The rack holds letters and `*` for a wildcard. See [`BoardConstraint`] for the pattern syntax,
    /// an empty pattern accepts any word.
    /// ## Errors
    /// If the rack contains anything but letters and `*`, or the pattern is malformed.
    /// ## Examples
    /// ```
    /// use rack_solver::{Error, Finder, Mode};
    /// let finder = Finder::new(Mode::Scrabble).with_dictionary_from_words(&["cat", "act", "at"])?;
    /// let results = finder.find_words("tca", "")?;
    /// let words: Vec<String> = results.iter().map(|result| result.to_string()).collect();
    /// assert_eq!(words, vec!["ACT - 5", "CAT - 5", "AT - 2"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn find_words(&self, rack: &str, constraint: &str) -> Result<Vec<WordResult>, Error> {
        let rack: Rack = rack.parse()?;
        let constraint: BoardConstraint = constraint.parse()?;
        Ok(self.find(&rack, &constraint))
    }

    /// Find and score all words for `rack` that fit `constraint`.
    ///
    /// Every rack variant gets its own strategy. When permutations are cheaper for a rack with wildcards,
    /// the first wildcard is assigned to each letter and the variants are estimated again.
    pub fn find(&self, rack: &Rack, constraint: &BoardConstraint) -> Vec<WordResult> {
        let mut jobs: Vec<(Rack, Strategy)> = Vec::new();
        let mut worklist = vec![rack.clone()];
        while let Some(rack) = worklist.pop() {
            let strategy = choose_strategy(&rack, constraint, &self.dictionary);
            if strategy == Strategy::RackPermutations && rack.has_wildcards() {
                worklist.extend(substitutions(&rack));
            } else {
                jobs.push((rack, strategy));
            }
        }
        debug!("rack {} pattern \"{}\": {} jobs", rack, constraint, jobs.len());
        let words = self.run(&jobs, constraint);
        self.results(words)
    }

    /// Find and score all words with a fixed `strategy`.
    pub fn find_with(
        &self,
        strategy: Strategy,
        rack: &Rack,
        constraint: &BoardConstraint,
    ) -> Vec<WordResult> {
        let words = strategy
            .enumerator(&self.dictionary)
            .enumerate(rack, constraint);
        self.results(words)
    }

    #[cfg(feature = "rayon")]
    fn run(&self, jobs: &[(Rack, Strategy)], constraint: &BoardConstraint) -> HashSet<Word> {
        jobs.par_iter()
            .map(|(rack, strategy)| {
                strategy
                    .enumerator(&self.dictionary)
                    .enumerate(rack, constraint)
            })
            .reduce(HashSet::new, |mut a, b| {
                a.extend(b);
                a
            })
    }

    #[cfg(not(feature = "rayon"))]
    fn run(&self, jobs: &[(Rack, Strategy)], constraint: &BoardConstraint) -> HashSet<Word> {
        let mut words = HashSet::new();
        for (rack, strategy) in jobs {
            words.extend(
                strategy
                    .enumerator(&self.dictionary)
                    .enumerate(rack, constraint),
            );
        }
        words
    }

    fn results(&self, words: HashSet<Word>) -> Vec<WordResult> {
        let mut results: Vec<WordResult> = words
            .into_iter()
            .map(|word| WordResult::new(word, &self.tileset))
            .collect();
        results.sort();
        debug!("{} results", results.len());
        results
    }
}

/// The finders for all game modes, each with its own dictionary.
#[derive(Debug, Clone)]
pub struct Lexicon {
    scrabble: Finder,
    wwf: Finder,
}

impl Lexicon {
    /// Load the dictionaries for both modes.
    /// ## Errors
    /// [`Error::DictionaryUnavailable`] if a mode has neither its primary nor its fallback wordfile.
    pub fn load(scrabble: &DictionaryPaths, wwf: &DictionaryPaths) -> Result<Lexicon, Error> {
        Ok(Lexicon {
            scrabble: Finder::new(Mode::Scrabble).with_dictionary_from_paths(scrabble)?,
            wwf: Finder::new(Mode::Wwf).with_dictionary_from_paths(wwf)?,
        })
    }

    /// Combine two finders. The finders keep the mode they were created with.
    pub fn from_finders(scrabble: Finder, wwf: Finder) -> Lexicon {
        Lexicon { scrabble, wwf }
    }

    pub fn finder(&self, mode: Mode) -> &Finder {
        match mode {
            Mode::Scrabble => &self.scrabble,
            Mode::Wwf => &self.wwf,
        }
    }

    /// Find words with the finder for `mode` (`"scrabble"` or `"wwf"`, case is ignored).
    /// ## Errors
    /// [`Error::InvalidMode`] for any other mode, or an error from [`Finder::find_words`].
    pub fn find_words(
        &self,
        rack: &str,
        constraint: &str,
        mode: &str,
    ) -> Result<Vec<WordResult>, Error> {
        let mode: Mode = mode.parse()?;
        self.finder(mode).find_words(rack, constraint)
    }
}
