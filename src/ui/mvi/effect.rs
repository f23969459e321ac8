//! Base trait for one-shot view effects.

/// Marker trait for effects.
///
/// Effects are transient instructions to the view (show a toast, play a
/// sound). They are never part of the durable state and are never replayed
/// to late subscribers.
pub trait UiEffect: Clone + Send + Sync + 'static {}
