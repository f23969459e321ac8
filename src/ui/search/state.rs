//! State for the search screen.

use crate::domain::Movie;
use crate::ui::mvi::UiState;

/// Everything the search screen renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchViewState {
    /// Text in the search box. `None` leaves the box untouched,
    /// `Some("")` clears it.
    pub search_box_text: Option<String>,
    pub searched_movie_title: String,
    pub searched_movie_rating: String,
    pub searched_movie_poster: String,
    /// Last successfully displayed movie, if any.
    pub searched_movie: Option<Movie>,
    /// Movies added to history, oldest first. Never holds duplicates.
    pub history: Vec<Movie>,
}

impl SearchViewState {
    pub fn in_history(&self, movie: &Movie) -> bool {
        self.history.contains(movie)
    }
}

impl UiState for SearchViewState {}
