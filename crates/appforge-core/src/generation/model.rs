//! Generation progress state machine.
//!
//! Code generation is reported to the UI as a percentage walking through a
//! fixed checklist of phases. The state machine here is event-driven: it does
//! not own a timer. Whatever drives it (the simulated ticker today, a real
//! generation backend eventually) feeds it [`GenerationEvent`]s and reads the
//! resulting state.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Status of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GenerationStatus {
    /// No run in progress.
    Idle,
    /// A run is in progress and accepting events.
    Running,
    /// The run reached 100%.
    Completed,
    /// The run was aborted by a failure event.
    Failed,
}

/// The checklist phases a run walks through, with the progress percentage at
/// which each one counts as done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    AnalyzingRequirements,
    GeneratingFrontend,
    GeneratingBackend,
    SettingUpDatabase,
    Finalizing,
}

impl GenerationPhase {
    /// All phases in checklist order.
    pub const ALL: [GenerationPhase; 5] = [
        GenerationPhase::AnalyzingRequirements,
        GenerationPhase::GeneratingFrontend,
        GenerationPhase::GeneratingBackend,
        GenerationPhase::SettingUpDatabase,
        GenerationPhase::Finalizing,
    ];

    /// Progress percentage at which this phase counts as completed.
    pub fn threshold(&self) -> u8 {
        match self {
            GenerationPhase::AnalyzingRequirements => 20,
            GenerationPhase::GeneratingFrontend => 40,
            GenerationPhase::GeneratingBackend => 60,
            GenerationPhase::SettingUpDatabase => 80,
            GenerationPhase::Finalizing => 100,
        }
    }

    /// Human-readable checklist label.
    pub fn label(&self) -> &'static str {
        match self {
            GenerationPhase::AnalyzingRequirements => "Analyzing requirements",
            GenerationPhase::GeneratingFrontend => "Generating frontend code",
            GenerationPhase::GeneratingBackend => "Generating backend code",
            GenerationPhase::SettingUpDatabase => "Setting up database",
            GenerationPhase::Finalizing => "Finalizing project",
        }
    }
}

/// Events a generation backend (or the simulated ticker) can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GenerationEvent {
    /// Progress advanced by the given number of percentage points.
    Progress(u8),
    /// The backend finished; progress jumps to 100.
    Completed,
    /// The backend failed with a reason.
    Failed(String),
}

/// State of one generation run.
///
/// Transitions:
/// - `start` moves any state to `Running` at 0%
/// - `Progress` events accumulate while `Running`; at 100 the run flips to
///   `Completed` and stops accepting events
/// - `Failed` events flip a `Running` run to `Failed`
/// - `reset` returns to `Idle` at 0% (partial progress is never resumed)
///
/// Events arriving outside `Running` are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationState {
    /// Current status
    pub status: GenerationStatus,
    /// Progress percentage, 0..=100
    pub progress: u8,
    /// Failure reason, set iff status is `Failed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl Default for GenerationState {
    fn default() -> Self {
        Self {
            status: GenerationStatus::Idle,
            progress: 0,
            failure: None,
        }
    }
}

impl GenerationState {
    /// Creates an idle state at 0%.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a run from 0%.
    pub fn start(&mut self) {
        self.start_from(0);
    }

    /// Starts a run from a given percentage.
    ///
    /// Used by "request changes", which restarts the simulation part-way
    /// through rather than from scratch. Values above 100 are clamped.
    pub fn start_from(&mut self, progress: u8) {
        self.status = GenerationStatus::Running;
        self.progress = progress.min(100);
        self.failure = None;
    }

    /// Applies an event and returns the resulting status.
    ///
    /// Events are ignored unless the run is `Running`.
    pub fn apply(&mut self, event: GenerationEvent) -> GenerationStatus {
        if self.status != GenerationStatus::Running {
            return self.status;
        }

        match event {
            GenerationEvent::Progress(step) => {
                self.progress = self.progress.saturating_add(step).min(100);
                if self.progress >= 100 {
                    self.status = GenerationStatus::Completed;
                }
            }
            GenerationEvent::Completed => {
                self.progress = 100;
                self.status = GenerationStatus::Completed;
            }
            GenerationEvent::Failed(reason) => {
                self.failure = Some(reason);
                self.status = GenerationStatus::Failed;
            }
        }

        self.status
    }

    /// Returns to `Idle` at 0%.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Phases completed at the current progress, in checklist order.
    pub fn completed_phases(&self) -> Vec<GenerationPhase> {
        GenerationPhase::ALL
            .iter()
            .copied()
            .filter(|phase| self.progress >= phase.threshold())
            .collect()
    }

    /// Whether the run has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            GenerationStatus::Completed | GenerationStatus::Failed
        )
    }
}
