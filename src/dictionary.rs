mod trievec;

use self::trievec::TrieVec;
use crate::labelset::LabelSet;
use crate::tiles::{codec, Label};
use crate::Error;
use log::{info, warn};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::fs::read_to_string;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// A trie data structure that holds all the valid words for a game mode.
pub struct Dictionary {
    /// List of nodes in trie. Each node is a tuple with the index of the first
    /// child node, and a `LabelSet` with the labels of all child nodes.
    nodes: Vec<(u32, LabelSet)>,
    /// List of labels.
    labels: Vec<Label>,
    /// List indicating terminal nodes
    terminal: Vec<bool>,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    wordfile: String,
    /// The number of words in the dictionary
    word_count: usize,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} nodes from '{}'>",
            self.word_count,
            self.nodes.len(),
            self.wordfile
        )
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::from(TrieVec::new())
    }
}

impl From<TrieVec<Label>> for Dictionary {
    fn from(trie: TrieVec<Label>) -> Self {
        let mut nodes: Vec<(u32, LabelSet)> = Vec::new();
        let mut labels: Vec<Label> = Vec::new();
        let mut terminal: Vec<bool> = Vec::new();
        let mut word_count = 0;

        let mut i: usize = 0;
        let mut queue = VecDeque::new();
        queue.push_back((&trie, i, 0));
        while let Some((node, index, k)) = queue.pop_front() {
            let mut ls = LabelSet::new();
            for (label, t) in node.children() {
                ls.insert(*label);
                queue.push_back((t.as_ref(), i, *label));
            }
            if node.terminal() {
                word_count += 1;
            }
            nodes.push((0, ls));
            terminal.push(node.terminal());
            labels.push(k);
            // children are queued contiguously, the first one sets the start index of its parent
            if nodes[index].0 == 0 {
                nodes[index].0 = i as u32;
            }
            i += 1;
        }
        Dictionary {
            nodes,
            labels,
            terminal,
            wordfile: String::new(),
            word_count,
        }
    }
}

impl Dictionary {
    fn from_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Result<Dictionary, Error> {
        let codec = codec();
        let mut builder = TrieVec::new();
        for word in lines.map(str::trim).filter(|word| !word.is_empty()) {
            builder.insert(codec.encode(word)?);
        }
        Ok(Dictionary::from(builder))
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line. Case is ignored, blank lines are skipped.
    /// ## Errors
    /// Fails if the file can not be read, or a word contains anything but letters.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut dictionary = Dictionary::from_lines(contents.lines())?;
        dictionary.wordfile = String::from(wordfile);
        info!("loaded {}", dictionary);
        Ok(dictionary)
    }

    /// Read the dictionary from `primary`, or from `fallback` if that fails.
    /// ## Errors
    /// [`Error::DictionaryUnavailable`] if neither file can be loaded.
    pub fn load(primary: &str, fallback: &str) -> Result<Dictionary, Error> {
        Dictionary::from_file(primary).or_else(|err| {
            warn!("{}, falling back to \"{}\"", err, fallback);
            Dictionary::from_file(fallback).map_err(|err| {
                warn!("{}", err);
                Error::DictionaryUnavailable {
                    primary: String::from(primary),
                    fallback: String::from(fallback),
                }
            })
        })
    }

    /// Build a dictionary from a list of words.
    /// ## Errors
    /// If a word contains anything but letters.
    /// ## Examples
    /// ```
    /// # use rack_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "CAT", "act"])?;
    /// assert_eq!(dictionary.word_count(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Dictionary, Error> {
        Dictionary::from_lines(words.iter().copied())
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    /// The number of words in the dictionary
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Path of the file the dictionary was read from, if any
    pub fn wordfile(&self) -> &str {
        &self.wordfile
    }

    /// Return the start and end index of the child nodes of node `i`,
    /// or None if node has no children.
    fn range_children(&self, i: usize) -> Option<(usize, usize)> {
        let (start, labels) = &self.nodes[i];
        let s = *start as usize;
        match labels.len() {
            0 => None,
            n => Some((s, s + n - 1)),
        }
    }

    /// The index of the root node.
    pub fn root(&self) -> usize {
        0
    }

    /// Get the index of child with `label` for node `i` if present.
    pub fn get(&self, i: usize, label: Label) -> Option<usize> {
        let (start, labels) = &self.nodes[i];
        labels.index_of(label).map(|index| *start as usize + index)
    }

    /// Returns true if a word ends at node `i`
    pub fn is_terminal(&self, i: usize) -> bool {
        self.terminal[i]
    }

    /// Returns true if `word` is in the dictionary
    pub fn is_word<K: AsRef<[Label]>>(&self, word: K) -> bool {
        let mut i = self.root();
        for &c in word.as_ref() {
            match self.get(i, c) {
                Some(child) => i = child,
                None => return false,
            }
        }
        i != self.root() && self.terminal[i]
    }

    /// Iterate over all words, in alphabetic order.
    pub fn words(&self) -> Words<'_> {
        Words::new(self, self.root(), 0)
    }

    /// The first level nodes of the trie. Each shard holds the words with one first letter.
    pub fn shards(&self) -> Vec<usize> {
        match self.range_children(self.root()) {
            Some((s, e)) => (s..=e).collect(),
            None => Vec::new(),
        }
    }

    /// Iterate over the words in shard `node`, see [`shards`](Dictionary::shards).
    pub fn shard_words(&self, node: usize) -> Words<'_> {
        Words::new(self, node, 1)
    }
}

/// Depth-first iterator over the words below a dictionary node.
pub struct Words<'a> {
    dictionary: &'a Dictionary,
    /// (node, depth) pairs still to visit
    stack: Vec<(usize, usize)>,
    prefix: Vec<Label>,
}

impl<'a> Words<'a> {
    fn new(dictionary: &'a Dictionary, node: usize, depth: usize) -> Words<'a> {
        Words {
            dictionary,
            stack: vec![(node, depth)],
            prefix: Vec::with_capacity(16),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Vec<Label>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, depth)) = self.stack.pop() {
            if depth > 0 {
                self.prefix.truncate(depth - 1);
                self.prefix.push(self.dictionary.labels[node]);
            }
            if let Some((s, e)) = self.dictionary.range_children(node) {
                self.stack.extend((s..=e).rev().map(|child| (child, depth + 1)));
            }
            if depth > 0 && self.dictionary.terminal[node] {
                return Some(self.prefix.clone());
            }
        }
        None
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    fn test_dictionary() -> Dictionary {
        Dictionary::from_words(WORDS).unwrap()
    }

    #[test]
    fn test_range() {
        let dictionary = test_dictionary();
        println!("{:?}", dictionary);
        assert_eq!(dictionary.word_count(), 11);
        assert_eq!(dictionary.nodes.len(), 17);
        assert_eq!(dictionary.range_children(0), Some((1, 2)));
        assert_eq!(dictionary.range_children(1), Some((3, 6)));
        assert_eq!(dictionary.range_children(4), None);
    }

    #[test]
    fn test_is_word() -> Result<(), Error> {
        let dictionary = test_dictionary();
        for &word in WORDS {
            assert!(dictionary.is_word(codec().encode(word)?));
        }
        assert!(dictionary.is_word(codec().encode("BELT")?));
        assert!(!dictionary.is_word(codec().encode("be")?));
        assert!(!dictionary.is_word(codec().encode("belts")?));
        assert!(!dictionary.is_word(Vec::<Label>::new()));
        Ok(())
    }

    #[test]
    fn test_words() {
        let dictionary = test_dictionary();
        let words: Vec<String> = dictionary
            .words()
            .map(|word| codec().decode_labels(&word))
            .collect();
        let mut expected: Vec<String> = WORDS.iter().map(|w| w.to_uppercase()).collect();
        expected.sort();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_shards() {
        let dictionary = test_dictionary();
        let shards = dictionary.shards();
        assert_eq!(shards.len(), 2);
        let counts: Vec<usize> = shards
            .iter()
            .map(|&node| dictionary.shard_words(node).count())
            .collect();
        assert_eq!(counts, vec![5, 6]);
    }

    #[test]
    fn test_empty() -> Result<(), Error> {
        let dictionary = Dictionary::from_words(&["", "  "])?;
        assert_eq!(dictionary.word_count(), 0);
        assert_eq!(dictionary.words().count(), 0);
        assert!(dictionary.shards().is_empty());
        Ok(())
    }

    #[test]
    fn test_load_fallback() -> Result<(), Error> {
        let dictionary = Dictionary::load("no/such/file.txt", "wordlists/words.txt")?;
        assert!(dictionary.word_count() > 0);
        assert_eq!(dictionary.wordfile(), "wordlists/words.txt");
        Ok(())
    }

    #[test]
    #[should_panic(expected = "DictionaryUnavailable")]
    fn test_load_unavailable() {
        Dictionary::load("no/such/file.txt", "no/such/fallback.txt").unwrap();
    }

    #[test]
    #[should_panic(expected = "EncodeInvalidToken")]
    fn test_invalid_word() {
        Dictionary::from_words(&["don't"]).unwrap();
    }
}
