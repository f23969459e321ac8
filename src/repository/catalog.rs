//! In-memory movie catalog.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;

use crate::config::CatalogConfig;
use crate::domain::Movie;

use super::{MovieRepository, RepositoryError};

/// Message returned for a title the catalog does not know.
pub const NOT_FOUND_MESSAGE: &str = "Movie not found!";

/// Message returned for a blank query.
pub const INCORRECT_ID_MESSAGE: &str = "Incorrect IMDb ID.";

/// Repository answering from a fixed list of movies.
///
/// Lookups ignore case and surrounding whitespace. Titles registered with
/// [`with_unavailable`](Self::with_unavailable) fault instead of answering.
pub struct CatalogRepository {
    movies: HashMap<String, Movie>,
    unavailable: HashSet<String>,
    latency: Duration,
}

impl CatalogRepository {
    pub fn new(movies: impl IntoIterator<Item = Movie>) -> Self {
        let movies = movies
            .into_iter()
            .map(|movie| (normalize(movie.title()), movie))
            .collect();
        Self {
            movies,
            unavailable: HashSet::new(),
            latency: Duration::ZERO,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(config.movies.iter().map(|entry| {
            Movie::new(
                entry.title.clone(),
                entry.rating_summary.clone(),
                entry.poster_url.clone(),
            )
        }))
        .with_unavailable(config.unavailable.iter().map(String::as_str))
        .with_latency(Duration::from_millis(config.latency_ms))
    }

    /// Delay applied before every answer.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Titles whose lookup fails with [`RepositoryError::Unavailable`].
    pub fn with_unavailable<'a>(mut self, titles: impl IntoIterator<Item = &'a str>) -> Self {
        self.unavailable.extend(titles.into_iter().map(normalize));
        self
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[async_trait]
impl MovieRepository for CatalogRepository {
    async fn search_movie(&self, title: &str) -> Result<Movie, RepositoryError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let key = normalize(title);
        if key.is_empty() {
            return Ok(Movie::failure(INCORRECT_ID_MESSAGE));
        }

        if self.unavailable.contains(&key) {
            tracing::debug!(title = %title, "Catalog lookup faulted");
            return Err(RepositoryError::Unavailable {
                title: title.trim().to_string(),
            });
        }

        let movie = self
            .movies
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Movie::failure(NOT_FOUND_MESSAGE));
        tracing::debug!(title = %title, found = movie.success(), "Catalog lookup");
        Ok(movie)
    }
}

fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}
