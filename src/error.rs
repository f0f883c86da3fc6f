use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Primary error type for the game core
#[derive(Error, Debug, Diagnostic)]
pub enum GameError {
    #[error("Word pool error: {0}")]
    #[diagnostic(code(silkworm::word_pool_error))]
    WordPool(#[from] WordPoolError),

    #[error("Dictionary error: {0}")]
    #[diagnostic(code(silkworm::dictionary_error))]
    Dictionary(#[from] DictionaryError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(silkworm::io_error))]
    Io(#[from] io::Error),

    #[error("No active round; call start_round first")]
    #[diagnostic(code(silkworm::no_active_round))]
    NoActiveRound,
}

/// Errors loading the start-word pool
#[derive(Error, Debug, Diagnostic)]
pub enum WordPoolError {
    #[error("Failed to load start-word file: {0}")]
    #[diagnostic(code(silkworm::word_pool::load_error))]
    LoadError(#[from] io::Error),

    #[error("Start-word file contains no words")]
    #[diagnostic(code(silkworm::word_pool::empty))]
    EmptyPool,
}

/// Dictionary-specific errors
#[derive(Error, Debug, Diagnostic)]
pub enum DictionaryError {
    #[error("Failed to load dictionary file: {0}")]
    #[diagnostic(code(silkworm::dictionary::load_error))]
    LoadError(#[from] io::Error),

    #[error("Dictionary is empty")]
    #[diagnostic(code(silkworm::dictionary::empty))]
    EmptyDictionary,
}

/// The three user-correctable reasons a submission is turned down.
///
/// These are ordinary outcomes of play, not failures; `GameSession::submit`
/// returns them inside `Ok(Verdict::Rejected(..))` rather than as `Err`.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("'{word}' cannot be spelled from the letters of '{target}'")]
    #[diagnostic(code(silkworm::rejection::not_possible))]
    NotPossible { word: String, target: String },

    #[error("'{0}' has already been used this round")]
    #[diagnostic(code(silkworm::rejection::already_used))]
    AlreadyUsed(String),

    #[error("'{0}' is not a real word")]
    #[diagnostic(code(silkworm::rejection::not_real))]
    NotReal(String),
}

// Re-export error types for convenience
pub use GameError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;
