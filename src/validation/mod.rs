pub mod dictionary;
pub mod rules;

// Re-export common types
pub use dictionary::{SpellChecker, WordListChecker};
pub use rules::MIN_ANSWER_LEN;
