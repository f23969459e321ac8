//! Loading/Content/Error envelope.

/// Multiplexes the status of an asynchronous operation through a single
/// result channel.
///
/// `Error` carries a payload of the same type as `Content` so the reducer
/// can render domain failures with the same shape it renders successes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lce<T> {
    /// Operation in flight, nothing to show yet.
    Loading,
    /// Operation succeeded.
    Content(T),
    /// Operation failed.
    Error(T),
}

impl<T> Lce<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Lce::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Lce::Error(_))
    }

    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Lce::Loading => "loading",
            Lce::Content(_) => "content",
            Lce::Error(_) => "error",
        }
    }
}
