use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::info;

use crate::error::{DictionaryError, Result};

/// External dictionary capability: decides whether a word is a known word
/// of the given locale. The game core treats implementations as black boxes.
pub trait SpellChecker {
    fn is_known_word(&self, word: &str, locale: &str) -> bool;
}

/// A [`SpellChecker`] backed by a newline-delimited word-list file.
///
/// The word list is locale-agnostic, so the locale argument is ignored;
/// ship one list per language you want to play in.
pub struct WordListChecker {
    words: HashSet<String>,
}

impl WordListChecker {
    pub fn new(dictionary_path: &str) -> Result<Self> {
        let mut words = HashSet::new();

        info!("Loading dictionary from {}", dictionary_path);

        let file = File::open(Path::new(dictionary_path)).map_err(DictionaryError::LoadError)?;

        let reader = io::BufReader::new(file);

        for line in reader.lines() {
            let line = line.map_err(DictionaryError::LoadError)?;
            let word = line.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::EmptyDictionary.into());
        }

        info!("Loaded {} words from dictionary", words.len());

        Ok(Self { words })
    }
}

impl SpellChecker for WordListChecker {
    fn is_known_word(&self, word: &str, _locale: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.contains(&word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_word_list_checker() -> std::io::Result<()> {
        // Create a temporary dictionary file
        let mut file = NamedTempFile::new()?;
        writeln!(file, "silk")?;
        writeln!(file, "worm")?;
        writeln!(file, "milk")?;

        let checker = WordListChecker::new(file.path().to_str().unwrap()).unwrap();

        assert!(checker.is_known_word("silk", "en_US"));
        assert!(checker.is_known_word("SILK", "en_US")); // Case insensitive
        assert!(checker.is_known_word("worm", "en_US"));
        assert!(checker.is_known_word("milk", "en_US"));
        assert!(!checker.is_known_word("silks", "en_US"));
        assert!(!checker.is_known_word("", "en_US"));

        Ok(())
    }

    #[test]
    fn test_empty_dictionary() -> std::io::Result<()> {
        // Create an empty dictionary file
        let file = NamedTempFile::new()?;

        let result = WordListChecker::new(file.path().to_str().unwrap());
        assert!(result.is_err());

        if let Err(e) = result {
            match e {
                crate::error::Error::Dictionary(DictionaryError::EmptyDictionary) => {}
                _ => panic!("Expected EmptyDictionary error"),
            }
        }

        Ok(())
    }
}
