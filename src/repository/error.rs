//! Repository error types.

use thiserror::Error;

/// Faults raised by a [`MovieRepository`](super::MovieRepository).
///
/// The `Display` text is what the user ends up seeing as the search title,
/// so keep it short.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Movie service unavailable for '{title}'")]
    Unavailable { title: String },

    #[error("Movie service error: {message}")]
    Backend { message: String },
}
