//! Reducer for the search screen.

use thiserror::Error;

use crate::config::ScreenConfig;
use crate::ui::mvi::{Lce, Reducer};

use super::result::SearchResult;
use super::state::SearchViewState;

/// Invariant violations detected while folding a result.
///
/// Both variants mean an event handler produced something it never should;
/// they are not user-facing conditions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReduceError {
    #[error("Error envelope around unexpected '{result}' result")]
    UnexpectedError { result: &'static str },

    #[error("Search error result carries no error message")]
    MissingErrorMessage,
}

/// Reducer for search screen state transitions.
pub struct SearchReducer {
    searching_placeholder: String,
}

impl SearchReducer {
    pub fn new(searching_placeholder: impl Into<String>) -> Self {
        Self {
            searching_placeholder: searching_placeholder.into(),
        }
    }

    pub fn from_config(config: &ScreenConfig) -> Self {
        Self::new(config.searching_placeholder.clone())
    }
}

impl Reducer for SearchReducer {
    type State = SearchViewState;
    type Result = Lce<SearchResult>;
    type Error = ReduceError;

    fn reduce(
        &self,
        state: Self::State,
        result: Self::Result,
    ) -> Result<Self::State, Self::Error> {
        match result {
            Lce::Content(SearchResult::ScreenLoad) => Ok(SearchViewState {
                search_box_text: Some(String::new()),
                ..state
            }),

            Lce::Content(SearchResult::SearchMovie { movie }) => Ok(SearchViewState {
                search_box_text: Some(String::new()),
                searched_movie_title: movie.title().to_string(),
                searched_movie_rating: movie.rating_summary().to_string(),
                searched_movie_poster: movie.poster_url().to_string(),
                searched_movie: Some(movie),
                ..state
            }),

            Lce::Content(SearchResult::AddToHistory { movie }) => {
                let mut state = state;
                if !state.in_history(&movie) {
                    state.history.push(movie);
                }
                Ok(state)
            }

            Lce::Loading => Ok(SearchViewState {
                search_box_text: None,
                searched_movie_title: self.searching_placeholder.clone(),
                searched_movie_rating: String::new(),
                searched_movie_poster: String::new(),
                searched_movie: None,
                ..state
            }),

            Lce::Error(SearchResult::SearchMovie { movie }) => {
                let message = movie
                    .error_message()
                    .ok_or(ReduceError::MissingErrorMessage)?;
                Ok(SearchViewState {
                    searched_movie_title: message.to_string(),
                    ..state
                })
            }

            Lce::Error(other) => Err(ReduceError::UnexpectedError {
                result: other.kind(),
            }),
        }
    }
}
