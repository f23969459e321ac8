//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_repository;

use std::time::Duration;

use moviefinder::domain::Movie;
use moviefinder::ui::mvi::{EffectSubscription, StateSubscription};
use moviefinder::ui::search::{SearchViewEffect, SearchViewState};

pub use mock_repository::{PanickingRepository, ScriptedRepository, SearchGate};

pub const PLACEHOLDER: &str = "Searching Movie...";
pub const WAIT: Duration = Duration::from_secs(2);

pub fn heat() -> Movie {
    Movie::new("Heat", "IMDB: 8.3", "https://img/heat.jpg")
}

pub fn arrival() -> Movie {
    Movie::new("Arrival", "IMDB: 7.9", "https://img/arrival.jpg")
}

/// Receive states until one matches, returning every state seen on the way
/// (the matching one last).
pub async fn states_until(
    states: &mut StateSubscription<SearchViewState>,
    predicate: impl Fn(&SearchViewState) -> bool,
) -> Vec<SearchViewState> {
    let mut seen = Vec::new();
    loop {
        let state = tokio::time::timeout(WAIT, states.next())
            .await
            .expect("timed out waiting for state")
            .expect("state stream ended");
        let matched = predicate(&state);
        seen.push(state);
        if matched {
            return seen;
        }
    }
}

/// Receive states until one matches and return it.
pub async fn wait_for(
    states: &mut StateSubscription<SearchViewState>,
    predicate: impl Fn(&SearchViewState) -> bool,
) -> SearchViewState {
    states_until(states, predicate)
        .await
        .pop()
        .expect("at least one state")
}

pub async fn next_effect(effects: &mut EffectSubscription<SearchViewEffect>) -> SearchViewEffect {
    tokio::time::timeout(WAIT, effects.next())
        .await
        .expect("timed out waiting for effect")
        .expect("effect stream ended")
}

/// Give the pipeline a moment to process anything already queued.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

/// Wait until the repository has been asked for `title`.
pub async fn wait_for_call(repository: &ScriptedRepository, title: &str) {
    tokio::time::timeout(WAIT, async {
        while !repository.calls().iter().any(|call| call == title) {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("repository never called");
}
