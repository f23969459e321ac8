//! Reducer trait for MVI architecture.

use super::state::UiState;

/// Reducer folds results into state.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Result) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The result type this reducer folds.
    type Result;

    /// Raised when a result violates an invariant the reducer relies on.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fold one result into the previous state and return the new state.
    ///
    /// This should be a pure function with no side effects. `self` only
    /// carries presentation constants, never mutable state.
    fn reduce(&self, state: Self::State, result: Self::Result)
        -> Result<Self::State, Self::Error>;
}
