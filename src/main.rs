use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;

use moviefinder::config::Config;
use moviefinder::logging::init_tracing;
use moviefinder::repository::CatalogRepository;
use moviefinder::ui::mvi::{EffectSubscription, StateSubscription};
use moviefinder::ui::search::{SearchEvent, SearchViewEffect, SearchViewModel, SearchViewState};

/// Upper bound on how long the demo waits for the pipeline to settle.
const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Parser)]
#[command(
    name = "moviefinder",
    version,
    about = "Drive the movie search screen from the command line"
)]
struct Cli {
    /// Config file (default: ~/.config/moviefinder/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Add every movie found to history
    #[arg(long)]
    add: bool,

    /// Restore the oldest history entry after all searches
    #[arg(long)]
    restore: bool,

    /// Titles to search, in order
    #[arg(required = true)]
    titles: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("Config file '{}' not found", path.display());
            }
            Config::load_from(path)?
        }
        None => Config::load()?,
    };
    init_tracing(&config.logging);

    let repository = Arc::new(CatalogRepository::from_config(&config.catalog));
    let view_model = SearchViewModel::new(repository, &config.screen);
    let mut screen = Screen::attach(&view_model, config.screen.searching_placeholder.clone());

    screen.print_pending();
    view_model.submit(SearchEvent::ScreenLoad);
    screen.until(|state| state.search_box_text.is_some()).await?;

    for title in &cli.titles {
        view_model.submit(SearchEvent::SearchMovie {
            query: title.clone(),
        });
        let placeholder = screen.placeholder.clone();
        screen
            .until(|state| state.searched_movie_title == placeholder)
            .await?;
        let settled = screen
            .until(|state| state.searched_movie_title != placeholder)
            .await?
            .clone();

        if cli.add {
            if let Some(movie) = settled.searched_movie {
                view_model.submit(SearchEvent::AddToHistory { movie });
                screen.expect_effect().await?;
            }
        }
    }

    if cli.restore {
        let last = screen.last.clone();
        match last.history.first() {
            Some(movie) if last.searched_movie.as_ref() != Some(movie) => {
                let movie = movie.clone();
                view_model.submit(SearchEvent::RestoreFromHistory {
                    movie: movie.clone(),
                });
                screen
                    .until(|state| state.searched_movie.as_ref() == Some(&movie))
                    .await?;
            }
            Some(_) => println!("(restored movie is already displayed)"),
            None => println!("(history is empty, nothing to restore)"),
        }
    }

    view_model.shutdown().await;
    Ok(())
}

/// Prints everything the view model emits and lets the demo wait for
/// specific states.
struct Screen {
    states: StateSubscription<SearchViewState>,
    effects: EffectSubscription<SearchViewEffect>,
    last: SearchViewState,
    placeholder: String,
}

impl Screen {
    fn attach(view_model: &SearchViewModel, placeholder: String) -> Self {
        Self {
            states: view_model.states(),
            effects: view_model.effects(),
            last: view_model.current_state(),
            placeholder,
        }
    }

    /// Print states already delivered without waiting.
    fn print_pending(&mut self) {
        while let Some(state) = self.states.try_next() {
            print_state(&state);
            self.last = state;
        }
    }

    /// Wait for a state matching `predicate`, printing every state seen.
    async fn until(
        &mut self,
        predicate: impl Fn(&SearchViewState) -> bool,
    ) -> anyhow::Result<&SearchViewState> {
        loop {
            let state = tokio::time::timeout(SETTLE_TIMEOUT, self.states.next())
                .await
                .context("Timed out waiting for the search screen")?
                .context("Search pipeline stopped")?;
            print_state(&state);
            let matched = predicate(&state);
            self.last = state;
            if matched {
                return Ok(&self.last);
            }
        }
    }

    /// Wait for the next effect. States published before it are printed.
    async fn expect_effect(&mut self) -> anyhow::Result<()> {
        let effect = tokio::time::timeout(SETTLE_TIMEOUT, self.effects.next())
            .await
            .context("Timed out waiting for an effect")?
            .context("Search pipeline stopped")?;
        self.print_pending();
        match effect {
            SearchViewEffect::AddedToHistoryToast => println!("[toast] Movie added to history"),
        }
        Ok(())
    }
}

fn print_state(state: &SearchViewState) {
    let search_box = match &state.search_box_text {
        Some(text) => format!("{text:?}"),
        None => "<unset>".to_string(),
    };
    let history: Vec<&str> = state.history.iter().map(|movie| movie.title()).collect();
    println!(
        "[state] box={} title={:?} rating={:?} poster={:?} history={:?}",
        search_box,
        state.searched_movie_title,
        state.searched_movie_rating,
        state.searched_movie_poster,
        history
    );
}
