//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides the building blocks for unidirectional data flow
//! in the presentation layer.
//!
//! # Architecture
//!
//! ```text
//!                     ┌──→ Reducer ──→ State ──→ View
//! Intent ──→ Result ──┤                           │
//!    ↑                └──→ Effect ──→ View        │
//!    └────────────────────────────────────────────┘
//! ```
//!
//! - **Intent**: User actions submitted by the view
//! - **Lce**: Loading/Content/Error envelope around intermediate results
//! - **Reducer**: Pure fold of (State, Result) into a new State
//! - **State**: Immutable, replayable snapshot of what the view shows
//! - **Effect**: One-shot signal to the view, never replayed

mod effect;
mod intent;
mod lce;
mod reducer;
mod relay;
mod state;

pub use effect::UiEffect;
pub use intent::Intent;
pub use lce::Lce;
pub use reducer::Reducer;
pub use relay::{EffectRelay, EffectSubscription, StateRelay, StateSubscription};
pub use state::UiState;
