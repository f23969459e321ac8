//! Events the search screen accepts.

use crate::domain::Movie;
use crate::ui::mvi::Intent;

/// Events that can be submitted to the search view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The screen became visible.
    ScreenLoad,

    /// The user submitted a search query.
    SearchMovie {
        /// Title typed by the user.
        query: String,
    },

    /// The user saved the displayed movie to history.
    AddToHistory { movie: Movie },

    /// The user tapped a history entry to show it again.
    RestoreFromHistory { movie: Movie },
}

impl SearchEvent {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchEvent::ScreenLoad => "screen_load",
            SearchEvent::SearchMovie { .. } => "search_movie",
            SearchEvent::AddToHistory { .. } => "add_to_history",
            SearchEvent::RestoreFromHistory { .. } => "restore_from_history",
        }
    }
}

impl Intent for SearchEvent {}
