//! Intermediate results between event handlers and the reducer.

use crate::domain::Movie;

/// Output of a search screen event handler, always carried inside an
/// [`Lce`](crate::ui::mvi::Lce).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    ScreenLoad,
    /// Also produced when a movie is restored from history.
    SearchMovie { movie: Movie },
    AddToHistory { movie: Movie },
}

impl SearchResult {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchResult::ScreenLoad => "screen_load",
            SearchResult::SearchMovie { .. } => "search_movie",
            SearchResult::AddToHistory { .. } => "add_to_history",
        }
    }
}
