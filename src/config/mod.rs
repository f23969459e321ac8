//! Configuration for the movie search screen and its demo catalog.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{CatalogConfig, CatalogEntry, Config, LoggingConfig, ScreenConfig};
