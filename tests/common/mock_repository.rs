//! Repositories whose answers are controlled by the test.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;

use moviefinder::domain::Movie;
use moviefinder::repository::{MovieRepository, RepositoryError, NOT_FOUND_MESSAGE};

pub type SearchGate = oneshot::Sender<Result<Movie, RepositoryError>>;

/// Repository that answers a title only when the test releases its gate.
///
/// Titles without a gate answer "not found" immediately.
#[derive(Default)]
pub struct ScriptedRepository {
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<Movie, RepositoryError>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Hold the next lookup of `title` until the returned sender fires.
    pub fn gate(&self, title: &str) -> SearchGate {
        let (sender, receiver) = oneshot::channel();
        self.gates.lock().insert(title.to_string(), receiver);
        sender
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl MovieRepository for ScriptedRepository {
    async fn search_movie(&self, title: &str) -> Result<Movie, RepositoryError> {
        self.calls.lock().push(title.to_string());
        let gate = self.gates.lock().remove(title);
        match gate {
            Some(gate) => gate.await.unwrap_or_else(|_| {
                Err(RepositoryError::Backend {
                    message: "gate dropped".to_string(),
                })
            }),
            None => Ok(Movie::failure(NOT_FOUND_MESSAGE)),
        }
    }
}

/// Repository that panics on every non-blank lookup.
pub struct PanickingRepository;

#[async_trait]
impl MovieRepository for PanickingRepository {
    async fn search_movie(&self, title: &str) -> Result<Movie, RepositoryError> {
        if !title.trim().is_empty() {
            panic!("lookup of '{title}' exploded");
        }
        Ok(Movie::failure(NOT_FOUND_MESSAGE))
    }
}
