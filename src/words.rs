use rand::Rng;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::info;

use crate::error::WordPoolError;

/// The single start word used when no pool can be loaded
pub const FALLBACK_WORD: &str = "silkworm";

/// The ordered, immutable pool of start words a round's target is drawn from.
/// Never empty: construction fails on an empty list and the fallback pool
/// holds [`FALLBACK_WORD`].
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from raw entries, trimming, lowercasing and dropping
    /// blank lines. Fails if nothing usable remains.
    pub fn new(words: Vec<String>) -> std::result::Result<Self, WordPoolError> {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        if words.is_empty() {
            return Err(WordPoolError::EmptyPool);
        }

        Ok(Self { words })
    }

    /// The one-word pool used when loading fails
    pub fn fallback() -> Self {
        Self {
            words: vec![FALLBACK_WORD.to_string()],
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.words.iter().any(|w| *w == word)
    }

    /// Pick a target word uniformly at random
    pub fn pick(&self, rng: &mut impl Rng) -> &str {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

/// Load the start-word pool from a newline-delimited UTF-8 file.
///
/// Failure is reported to the caller rather than papered over; the
/// documented fallback policy (use [`WordPool::fallback`]) is the caller's
/// decision to apply.
pub fn load_word_pool(path: impl AsRef<Path>) -> std::result::Result<WordPool, WordPoolError> {
    let path = path.as_ref();

    info!("Loading start words from {}", path.display());

    let file = File::open(path)?;
    let reader = io::BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        words.push(line?);
    }

    let pool = WordPool::new(words)?;

    info!("Loaded {} start words", pool.len());

    Ok(pool)
}
