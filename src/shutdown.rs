use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Lifecycle of a view model pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PipelinePhase {
    Running = 0,
    Signaled = 1,
    Stopped = 2,
}

/// Owner side of a pipeline shutdown signal.
pub struct ShutdownCoordinator {
    shutdown: Arc<AtomicBool>,
    phase: Arc<AtomicU8>,
    notify: Arc<Notify>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(AtomicBool::new(false)),
            phase: Arc::new(AtomicU8::new(PipelinePhase::Running as u8)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Signal shutdown start. Returns `false` if it was already signaled.
    pub fn signal(&self) -> bool {
        if self.shutdown.swap(true, Ordering::SeqCst) {
            return false;
        }
        // Never move a stopped pipeline back to Signaled.
        let _ = self.phase.compare_exchange(
            PipelinePhase::Running as u8,
            PipelinePhase::Signaled as u8,
            Ordering::SeqCst,
            Ordering::SeqCst,
        );
        tracing::info!("Pipeline shutdown initiated");
        self.notify.notify_waiters();
        true
    }

    /// Check if shutdown is in progress
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Get current phase
    pub fn phase(&self) -> PipelinePhase {
        phase_from(self.phase.load(Ordering::SeqCst))
    }

    /// Create a handle for the pipeline task
    pub fn handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            shutdown: Arc::clone(&self.shutdown),
            phase: Arc::clone(&self.phase),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipeline side of the shutdown signal.
#[derive(Clone)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
    phase: Arc<AtomicU8>,
    notify: Arc<Notify>,
}

impl ShutdownHandle {
    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Record that the pipeline has released everything it owned.
    pub fn mark_stopped(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
        self.phase
            .store(PipelinePhase::Stopped as u8, Ordering::SeqCst);
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag to avoid TOCTOU race:
        // without this, signal() could fire between the check and the await,
        // and notify_waiters() would have no subscribers, losing the notification.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }
}

fn phase_from(raw: u8) -> PipelinePhase {
    match raw {
        0 => PipelinePhase::Running,
        1 => PipelinePhase::Signaled,
        _ => PipelinePhase::Stopped,
    }
}
