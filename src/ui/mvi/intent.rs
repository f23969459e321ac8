//! Base trait for intents (user actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent user actions such as typing a query or tapping a
/// history entry. Each intent is consumed exactly once by the view model
/// that receives it.
pub trait Intent: Send + 'static {}
