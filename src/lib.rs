//! Presentation core for a movie search screen.
//!
//! Events submitted by the view flow through a single pipeline that folds
//! results into an immutable [`SearchViewState`](ui::search::SearchViewState)
//! and derives one-shot [`SearchViewEffect`](ui::search::SearchViewEffect)s.
//! The movie lookup itself is an injected [`MovieRepository`](repository::MovieRepository).

pub mod config;
pub mod domain;
pub mod logging;
pub mod repository;
pub mod shutdown;
pub mod ui;
