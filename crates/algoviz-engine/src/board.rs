//! Observable state of one visualizer instance.

use serde::{Deserialize, Serialize};

use crate::token::RunToken;

/// Whether a run is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// No run active; `start` is accepted.
    #[default]
    Idle,
    /// A run owns the board.
    Running,
}

/// How the most recent run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The procedure reached its terminal step.
    Completed,
    /// The run was stopped, reset, or superseded before finishing.
    Cancelled,
}

/// Snapshot of a visualizer: its dataset, the run state the active (or last)
/// run produced, and the controller's bookkeeping.
///
/// Only the controller writes the phase and dataset; only the active run
/// writes the state. Renderers get clones through the watch channel.
#[derive(Debug, Clone, Serialize)]
pub struct Board<D, S> {
    dataset: D,
    state: S,
    phase: RunPhase,
    run_id: u64,
    outcome: Option<RunOutcome>,
    steps: u64,
    #[serde(skip)]
    pub(crate) token: Option<RunToken>,
}

impl<D, S> Board<D, S> {
    pub(crate) fn new(dataset: D, state: S) -> Self {
        Self {
            dataset,
            state,
            phase: RunPhase::Idle,
            run_id: 0,
            outcome: None,
            steps: 0,
            token: None,
        }
    }

    /// The dataset being visualized.
    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    /// Run state as of the latest applied step.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Whether a run is active.
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Identifier of the active or most recent run; 0 before the first.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// How the most recent run ended, if one has.
    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    /// Mutations applied by the active or most recent run.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub(crate) fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    pub(crate) fn set_dataset(&mut self, dataset: D) {
        self.dataset = dataset;
    }

    pub(crate) fn set_state(&mut self, state: S) {
        self.state = state;
    }

    pub(crate) fn record_step(&mut self) -> u64 {
        self.steps += 1;
        self.steps
    }

    /// Enter `Running` under a fresh token. Caller guarantees the board is idle.
    pub(crate) fn begin(&mut self, run_id: u64, token: RunToken, state: S) {
        self.state = state;
        self.phase = RunPhase::Running;
        self.run_id = run_id;
        self.outcome = None;
        self.steps = 0;
        self.token = Some(token);
    }

    /// Leave `Running`, cancelling the token. Returns false if already idle.
    pub(crate) fn halt(&mut self, outcome: RunOutcome) -> bool {
        if self.phase != RunPhase::Running {
            return false;
        }
        if let Some(token) = self.token.take() {
            token.cancel();
        }
        self.phase = RunPhase::Idle;
        self.outcome = Some(outcome);
        true
    }
}
