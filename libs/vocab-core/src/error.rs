//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur while driving a study session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot start a session without cards")]
    NoCards,

    #[error("card {index} has already been answered")]
    AlreadyAnswered { index: usize },

    #[error("session is finished")]
    Finished,
}
