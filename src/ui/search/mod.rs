//! Movie search screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `event.rs` - User events submitted by the view
//! - `result.rs` - Intermediate results produced by event handlers
//! - `state.rs` - View state snapshot
//! - `effect.rs` - One-shot view effects and the result filter
//! - `reducer.rs` - Pure fold of results into state
//! - `view_model.rs` - Pipeline runtime tying it all together

mod effect;
mod event;
mod reducer;
mod result;
mod state;
mod view_model;

pub use effect::{effect_for, SearchViewEffect};
pub use event::SearchEvent;
pub use reducer::{ReduceError, SearchReducer};
pub use result::SearchResult;
pub use state::SearchViewState;
pub use view_model::SearchViewModel;
