//! One-shot effects for the search screen.

use crate::ui::mvi::{Lce, UiEffect};

use super::result::SearchResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchViewEffect {
    /// Show the "added to history" toast.
    AddedToHistoryToast,
}

impl UiEffect for SearchViewEffect {}

/// Derive the effect, if any, carried by a result.
pub fn effect_for(result: &Lce<SearchResult>) -> Option<SearchViewEffect> {
    match result {
        Lce::Content(SearchResult::AddToHistory { .. }) => {
            Some(SearchViewEffect::AddedToHistoryToast)
        }
        _ => None,
    }
}
