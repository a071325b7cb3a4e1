//! Simulated generation backend.
//!
//! Drives the [`GenerationState`] machine with timed progress events, the
//! way the real backend will drive it with completion events. Each run is a
//! spawned task owned by a [`GenerationHandle`]; dropping the handle cancels
//! the task, so a run can never outlive the view that started it.

use appforge_core::generation::{GenerationConfig, GenerationEvent, GenerationState};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Spawns simulated generation runs.
pub struct GenerationDriver {
    config: GenerationConfig,
}

impl GenerationDriver {
    /// Creates a driver with the given run configuration.
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Starts a run from 0%.
    pub fn start(&self) -> GenerationHandle {
        self.start_from(0)
    }

    /// Starts a run from the given percentage.
    ///
    /// "Request changes" uses this to restart the simulation part-way
    /// through instead of from scratch.
    pub fn start_from(&self, initial_progress: u8) -> GenerationHandle {
        let mut state = GenerationState::new();
        state.start_from(initial_progress);

        let (tx, rx) = watch::channel(state.clone());
        let cancel = CancellationToken::new();
        let config = self.config.clone();

        let task = tokio::spawn({
            let cancel = cancel.clone();
            async move {
                let mut interval = tokio::time::interval(config.tick_interval);
                // The first tick resolves immediately; progress starts after
                // one full interval, like the original timer.
                interval.tick().await;

                loop {
                    tokio::select! {
                        _ = cancel.cancelled() => {
                            tracing::debug!(progress = state.progress, "generation cancelled");
                            break;
                        }
                        _ = interval.tick() => {
                            let status = state.apply(GenerationEvent::Progress(config.step));
                            if tx.send(state.clone()).is_err() {
                                // Every handle and subscriber is gone
                                break;
                            }
                            if state.is_terminal() {
                                tracing::info!(%status, "generation finished");
                                break;
                            }
                        }
                    }
                }
            }
        });

        GenerationHandle {
            receiver: rx,
            cancel,
            task,
        }
    }
}

/// Owner handle for one generation run.
///
/// Cancellation is tied to this handle's lifetime: dropping it stops the
/// underlying task, which is what keeps a torn-down view from receiving
/// further updates.
pub struct GenerationHandle {
    receiver: watch::Receiver<GenerationState>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl GenerationHandle {
    /// Returns a receiver that observes every state update of this run.
    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.receiver.clone()
    }

    /// Returns the most recent state of this run.
    pub fn snapshot(&self) -> GenerationState {
        self.receiver.borrow().clone()
    }

    /// Stops the run. Safe to call more than once.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the driving task has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the run to end and returns its final state.
    pub async fn wait(mut self) -> GenerationState {
        let _ = (&mut self.task).await;
        self.receiver.borrow().clone()
    }
}

impl Drop for GenerationHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
