pub mod config;
pub mod error;
pub mod session;
pub mod validation;
pub mod words;

// Re-export error types for convenience
pub use error::{DictionaryError, Error, Rejection, Result, WordPoolError};

// Re-export the core game types
pub use session::{GamePresenter, GameSession, NoopPresenter, Verdict};
pub use words::{load_word_pool, WordPool, FALLBACK_WORD};
