/*!
 * Error types for the transtore library.
 *
 * One typed error covers the whole public surface, using the thiserror
 * crate for ergonomic error definitions. A missing translation is never
 * an error: `Translator::translate` reports it by value (see the
 * `translator` module).
 */

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TranslatorError>;

/// Errors raised by the store, repository, and facade layers.
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// The store could not be opened or the schema could not be created.
    /// Raised only during construction; the facade is never usable in a
    /// half-initialized state.
    #[error("initialization failed: {0}")]
    Initialization(String),

    /// Malformed caller input, rejected before any store access.
    #[error("invalid input: {0}")]
    Validation(String),

    /// A statement failed to execute or fetch. Carries the backend
    /// message; retry policy is the caller's.
    #[error("storage error: {0}")]
    Storage(String),
}

impl TranslatorError {
    /// True for errors a caller can recover from by fixing the input
    /// or retrying the call.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, TranslatorError::Initialization(_))
    }
}

impl From<rusqlite::Error> for TranslatorError {
    fn from(error: rusqlite::Error) -> Self {
        Self::Storage(error.to_string())
    }
}
