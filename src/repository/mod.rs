//! Search capability consumed by the presentation layer.
//!
//! The view model only knows the [`MovieRepository`] trait. The
//! [`CatalogRepository`] answers from an in-memory list and backs the demo
//! binary and the tests.

mod catalog;
mod error;

pub use catalog::{CatalogRepository, INCORRECT_ID_MESSAGE, NOT_FOUND_MESSAGE};
pub use error::RepositoryError;

use async_trait::async_trait;

use crate::domain::Movie;

/// Looks movies up by title.
///
/// Implementations return either a populated [`Movie`] or a
/// [`Movie::failure`] for expected misses (unknown title, malformed query),
/// and an `Err` when the lookup itself could not be performed.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn search_movie(&self, title: &str) -> Result<Movie, RepositoryError>;
}
