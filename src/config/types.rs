use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Presentation settings for the search screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Title shown while a search is in flight (default: "Searching Movie...").
    #[serde(default = "default_searching_placeholder")]
    pub searching_placeholder: String,
}

/// In-memory catalog used by the demo repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Artificial delay before each lookup answers, in milliseconds (default: 0).
    #[serde(default)]
    pub latency_ms: u64,
    /// Titles whose lookup fails outright instead of answering.
    #[serde(default)]
    pub unavailable: Vec<String>,
    /// Movies the catalog knows about.
    #[serde(default)]
    pub movies: Vec<CatalogEntry>,
}

/// One movie in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    /// Free-form rating line (e.g., "IMDB: 8.1").
    #[serde(default)]
    pub rating_summary: String,
    #[serde(default)]
    pub poster_url: String,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Fallback filter when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub(crate) const DEFAULT_SEARCHING_PLACEHOLDER: &str = "Searching Movie...";

fn default_searching_placeholder() -> String {
    DEFAULT_SEARCHING_PLACEHOLDER.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            searching_placeholder: default_searching_placeholder(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: 0,
            unavailable: Vec::new(),
            movies: vec![
                CatalogEntry {
                    title: "Blade Runner".to_string(),
                    rating_summary: "IMDB: 8.1 | Rotten Tomatoes: 89%".to_string(),
                    poster_url: "https://posters.example.com/blade-runner.jpg".to_string(),
                },
                CatalogEntry {
                    title: "Arrival".to_string(),
                    rating_summary: "IMDB: 7.9 | Rotten Tomatoes: 94%".to_string(),
                    poster_url: "https://posters.example.com/arrival.jpg".to_string(),
                },
                CatalogEntry {
                    title: "Heat".to_string(),
                    rating_summary: "IMDB: 8.3 | Rotten Tomatoes: 83%".to_string(),
                    poster_url: "https://posters.example.com/heat.jpg".to_string(),
                },
            ],
        }
    }
}
