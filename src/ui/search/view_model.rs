//! Runtime for the search screen.
//!
//! A single pipeline task owns the fold. Events arrive over an unbounded
//! queue, searches run on their own tasks and post their outcome back to the
//! pipeline tagged with a generation number. Only the outcome of the most
//! recent search is folded; older ones are dropped on arrival.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::ScreenConfig;
use crate::domain::Movie;
use crate::repository::MovieRepository;
use crate::shutdown::{PipelinePhase, ShutdownCoordinator, ShutdownHandle};
use crate::ui::mvi::{EffectRelay, EffectSubscription, Lce, Reducer, StateRelay, StateSubscription};

use super::effect::{effect_for, SearchViewEffect};
use super::event::SearchEvent;
use super::reducer::{ReduceError, SearchReducer};
use super::result::SearchResult;
use super::state::SearchViewState;

/// Presentation-layer component for the movie search screen.
///
/// Owned by the UI layer for the lifetime of one screen session. Must be
/// created inside a tokio runtime. Call [`dispose`](Self::dispose) or
/// [`shutdown`](Self::shutdown) when the screen goes away; dropping the
/// view model signals shutdown as well.
pub struct SearchViewModel {
    events: mpsc::UnboundedSender<SearchEvent>,
    states: Arc<StateRelay<SearchViewState>>,
    effects: Arc<EffectRelay<SearchViewEffect>>,
    lifecycle: ShutdownCoordinator,
    pipeline: Option<JoinHandle<()>>,
}

impl SearchViewModel {
    /// Build the view model and start its pipeline.
    ///
    /// State production starts immediately, whether or not anyone is
    /// subscribed.
    pub fn new(repository: Arc<dyn MovieRepository>, config: &ScreenConfig) -> Self {
        let (events, receiver) = mpsc::unbounded_channel();
        let states = Arc::new(StateRelay::new(SearchViewState::default()));
        let effects = Arc::new(EffectRelay::new());
        let lifecycle = ShutdownCoordinator::new();

        let pipeline = Pipeline {
            reducer: SearchReducer::from_config(config),
            repository,
            states: Arc::clone(&states),
            effects: Arc::clone(&effects),
            shutdown: lifecycle.handle(),
            generation: 0,
            in_flight: None,
        };
        let pipeline = tokio::spawn(pipeline.run(receiver));
        tracing::info!("Search pipeline started");

        Self {
            events,
            states,
            effects,
            lifecycle,
            pipeline: Some(pipeline),
        }
    }

    /// Schedule an event for processing. Never blocks.
    ///
    /// Events submitted after shutdown are dropped.
    pub fn submit(&self, event: SearchEvent) {
        if self.lifecycle.is_shutting_down() {
            tracing::warn!(event = event.kind(), "Event submitted after shutdown, dropping");
            return;
        }
        if let Err(rejected) = self.events.send(event) {
            tracing::warn!(
                event = rejected.0.kind(),
                "Search pipeline has stopped, dropping event"
            );
        }
    }

    /// Subscribe to view states. The current state is delivered first,
    /// then every state that differs from its predecessor.
    pub fn states(&self) -> StateSubscription<SearchViewState> {
        self.states.subscribe()
    }

    pub fn current_state(&self) -> SearchViewState {
        self.states.current()
    }

    /// Subscribe to view effects. Effects emitted before subscribing are
    /// not replayed.
    pub fn effects(&self) -> EffectSubscription<SearchViewEffect> {
        self.effects.subscribe()
    }

    pub fn phase(&self) -> PipelinePhase {
        self.lifecycle.phase()
    }

    /// Signal the pipeline to stop without waiting for it.
    pub fn dispose(&self) {
        self.lifecycle.signal();
    }

    /// Stop the pipeline and wait until it has released everything.
    pub async fn shutdown(mut self) {
        self.lifecycle.signal();
        if let Some(pipeline) = self.pipeline.take() {
            if let Err(err) = pipeline.await {
                tracing::error!(error = %err, "Search pipeline task failed");
            }
        }
    }
}

impl Drop for SearchViewModel {
    fn drop(&mut self) {
        self.lifecycle.signal();
    }
}

/// Outcome of one search task.
struct SearchOutcome {
    generation: u64,
    result: Lce<SearchResult>,
}

struct Pipeline {
    reducer: SearchReducer,
    repository: Arc<dyn MovieRepository>,
    states: Arc<StateRelay<SearchViewState>>,
    effects: Arc<EffectRelay<SearchViewEffect>>,
    shutdown: ShutdownHandle,
    /// Bumped on every search; outcomes tagged with an older value are stale.
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
}

impl Pipeline {
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<SearchEvent>) {
        let (outcomes, mut outcome_receiver) = mpsc::unbounded_channel();
        let shutdown = self.shutdown.clone();

        loop {
            let step = tokio::select! {
                biased;
                _ = shutdown.wait() => break,
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event, &outcomes),
                    None => break,
                },
                Some(outcome) = outcome_receiver.recv() => self.handle_outcome(outcome),
            };

            if let Err(err) = step {
                tracing::error!(error = %err, "Search reducer invariant violated, stopping pipeline");
                break;
            }
        }

        self.stop();
    }

    fn handle_event(
        &mut self,
        event: SearchEvent,
        outcomes: &mpsc::UnboundedSender<SearchOutcome>,
    ) -> Result<(), ReduceError> {
        tracing::debug!(event = event.kind(), "Event received");
        match event {
            SearchEvent::ScreenLoad => self.apply(Lce::Content(SearchResult::ScreenLoad)),
            SearchEvent::SearchMovie { query } => {
                self.apply(Lce::Loading)?;
                self.start_search(query, outcomes);
                Ok(())
            }
            SearchEvent::AddToHistory { movie } => {
                self.apply(Lce::Content(SearchResult::AddToHistory { movie }))
            }
            SearchEvent::RestoreFromHistory { movie } => {
                self.apply(Lce::Content(SearchResult::SearchMovie { movie }))
            }
        }
    }

    fn start_search(&mut self, query: String, outcomes: &mpsc::UnboundedSender<SearchOutcome>) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(previous) = self.in_flight.take() {
            tracing::debug!(generation = self.generation, "Superseding in-flight search");
            previous.abort();
        }

        let generation = self.generation;
        let repository = Arc::clone(&self.repository);
        let outcomes = outcomes.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = search(repository, query).await;
            // Pipeline gone means nobody cares about the outcome.
            let _ = outcomes.send(SearchOutcome { generation, result });
        }));
    }

    fn handle_outcome(&mut self, outcome: SearchOutcome) -> Result<(), ReduceError> {
        if outcome.generation != self.generation {
            tracing::debug!(
                generation = outcome.generation,
                current = self.generation,
                "Discarding superseded search result"
            );
            return Ok(());
        }
        self.in_flight = None;
        self.apply(outcome.result)
    }

    /// Fold one result, publish the new state, then emit its effect.
    fn apply(&mut self, result: Lce<SearchResult>) -> Result<(), ReduceError> {
        tracing::debug!(lce = result.kind(), "Folding result");
        let effect = effect_for(&result);
        let next = self.reducer.reduce(self.states.current(), result)?;
        if !self.states.publish(next) {
            tracing::trace!("State unchanged, not re-emitted");
        }
        if let Some(effect) = effect {
            let delivered = self.effects.emit(effect.clone());
            tracing::debug!(?effect, delivered, "Effect emitted");
        }
        Ok(())
    }

    fn stop(mut self) {
        if let Some(search) = self.in_flight.take() {
            search.abort();
        }
        // Stopped must be observable by the time subscribers see their
        // streams end.
        self.shutdown.mark_stopped();
        self.states.close();
        self.effects.close();
        tracing::info!("Search pipeline stopped");
    }
}

/// Run one lookup and wrap its outcome.
///
/// The lookup runs on its own task so a panicking repository becomes an
/// error result instead of taking the pipeline down. It is aborted if this
/// future is dropped (superseded search or shutdown).
async fn search(repository: Arc<dyn MovieRepository>, query: String) -> Lce<SearchResult> {
    let lookup = tokio::spawn(async move { repository.search_movie(&query).await });
    let _abort_on_drop = scopeguard::guard(lookup.abort_handle(), |handle| handle.abort());

    let movie = match lookup.await {
        Ok(Ok(movie)) => movie,
        Ok(Err(err)) => {
            tracing::warn!(error = %err, "Movie search failed");
            Movie::failure(err.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "Movie search task died");
            Movie::failure(format!("Movie search failed: {err}"))
        }
    };

    if movie.is_failure() {
        Lce::Error(SearchResult::SearchMovie { movie })
    } else {
        Lce::Content(SearchResult::SearchMovie { movie })
    }
}
