//! Movie value record.

/// A movie as returned by a search.
///
/// A movie is either a successful record (title, rating and poster set) or
/// a failure record carrying only an error message. The two shapes are
/// built through [`Movie::new`] and [`Movie::failure`]; fields are read-only
/// so nothing downstream can produce an ambiguous mix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Movie {
    title: String,
    rating_summary: String,
    poster_url: String,
    success: bool,
    error_message: Option<String>,
}

impl Movie {
    /// Successful search result.
    pub fn new(
        title: impl Into<String>,
        rating_summary: impl Into<String>,
        poster_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            rating_summary: rating_summary.into(),
            poster_url: poster_url.into(),
            success: true,
            error_message: None,
        }
    }

    /// Failed search: every display field empty, only the message set.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            title: String::new(),
            rating_summary: String::new(),
            poster_url: String::new(),
            success: false,
            error_message: Some(message.into()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating_summary(&self) -> &str {
        &self.rating_summary
    }

    pub fn poster_url(&self) -> &str {
        &self.poster_url
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// True when the record carries a non-blank error message.
    pub fn is_failure(&self) -> bool {
        self.error_message
            .as_deref()
            .is_some_and(|message| !message.trim().is_empty())
    }
}
