//! Playback controller: single-flight execution for one visualizer instance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::board::{Board, RunOutcome};
use crate::config::EngineConfig;
use crate::family::{Family, FamilyBoard};
use crate::speed::{Speed, SpeedControl};
use crate::step::Stepper;
use crate::token::RunToken;

/// Owns the dataset, run state and run token of one visualizer.
///
/// At most one run is active at a time. `stop`, `reset`, `set_dataset` and
/// `algorithm_changed` are plain synchronous calls; after any of them returns,
/// the previous run can no longer touch the board.
pub struct Controller<F: Family> {
    board: Arc<watch::Sender<FamilyBoard<F>>>,
    speed: SpeedControl,
    next_run: AtomicU64,
}

impl<F: Family> Controller<F> {
    /// Create an idle controller over `dataset`.
    pub fn new(dataset: F::Dataset, speed: Speed) -> Self {
        let state = F::initial_state(&dataset);
        let (board, _) = watch::channel(Board::new(dataset, state));
        Self {
            board: Arc::new(board),
            speed: SpeedControl::new(speed),
            next_run: AtomicU64::new(0),
        }
    }

    /// Create an idle controller using the configured initial speed.
    pub fn with_config(dataset: F::Dataset, config: &EngineConfig) -> Self {
        Self::new(dataset, config.speed)
    }

    /// Receiver notified after every change to the board.
    pub fn subscribe(&self) -> watch::Receiver<FamilyBoard<F>> {
        self.board.subscribe()
    }

    /// Snapshot of the board.
    pub fn board(&self) -> FamilyBoard<F> {
        self.board.borrow().clone()
    }

    /// Current dataset.
    pub fn dataset(&self) -> F::Dataset {
        self.board.borrow().dataset().clone()
    }

    /// Current run state.
    pub fn state(&self) -> F::State {
        self.board.borrow().state().clone()
    }

    /// Whether a run is active.
    pub fn is_running(&self) -> bool {
        self.board.borrow().is_running()
    }

    /// Current speed.
    pub fn speed(&self) -> Speed {
        self.speed.get()
    }

    /// Change the speed. Takes effect from the next step.
    pub fn set_speed(&self, speed: impl Into<Speed>) {
        let speed = speed.into();
        self.speed.set(speed);
        debug!(family = F::NAME, speed = speed.value(), "speed changed");
    }

    /// Start `procedure` on the current tokio runtime.
    ///
    /// Returns `None`, changing nothing, if a run is already active.
    pub fn start(&self, procedure: F::Procedure) -> Option<RunHandle> {
        let run = self.prepare(procedure)?;
        let run_id = run.stepper.run_id();
        let task = tokio::spawn(run.drive());
        Some(RunHandle { run_id, task })
    }

    /// Start the procedure called `name`.
    ///
    /// Returns `None` if the name is not a procedure of this family or a run
    /// is already active.
    pub fn start_named(&self, name: &str) -> Option<RunHandle> {
        let procedure = Self::lookup(name)?;
        self.start(procedure)
    }

    /// Drive `procedure` on the calling task until it completes or is cancelled.
    ///
    /// Returns `None` if a run is already active.
    pub async fn run(&self, procedure: F::Procedure) -> Option<RunOutcome> {
        let run = self.prepare(procedure)?;
        Some(run.drive().await)
    }

    /// Drive the procedure called `name` on the calling task.
    pub async fn run_named(&self, name: &str) -> Option<RunOutcome> {
        let procedure = Self::lookup(name)?;
        self.run(procedure).await
    }

    /// Cancel the active run, freezing the state at its last applied step.
    ///
    /// Returns false if nothing was running.
    pub fn stop(&self) -> bool {
        let stopped = self
            .board
            .send_if_modified(|board| board.halt(RunOutcome::Cancelled));
        if stopped {
            debug!(family = F::NAME, "run stopped");
        }
        stopped
    }

    /// Stop any run and return the run state to "nothing examined".
    pub fn reset(&self) {
        self.clear();
        debug!(family = F::NAME, "visualizer reset");
    }

    /// Stop any run and clear its state because the selected algorithm changed.
    pub fn algorithm_changed(&self) {
        self.clear();
        debug!(family = F::NAME, "algorithm changed");
    }

    /// Stop any run, replace the dataset and clear the run state.
    pub fn set_dataset(&self, dataset: F::Dataset) {
        self.board.send_modify(|board| {
            board.halt(RunOutcome::Cancelled);
            let state = F::initial_state(&dataset);
            board.set_dataset(dataset);
            board.set_state(state);
        });
        debug!(family = F::NAME, "dataset replaced");
    }

    /// Apply `edit` to a copy of the dataset; if it reports a change, install
    /// the copy as with [`set_dataset`](Self::set_dataset).
    ///
    /// A refused edit (returning false) leaves everything untouched, including
    /// any active run.
    pub fn edit_dataset(&self, edit: impl FnOnce(&mut F::Dataset) -> bool) -> bool {
        let mut dataset = self.dataset();
        if !edit(&mut dataset) {
            debug!(family = F::NAME, "dataset edit refused");
            return false;
        }
        self.set_dataset(dataset);
        true
    }

    fn clear(&self) {
        self.board.send_modify(|board| {
            board.halt(RunOutcome::Cancelled);
            let state = F::initial_state(board.dataset());
            board.set_state(state);
        });
    }

    fn lookup(name: &str) -> Option<F::Procedure> {
        match name.parse() {
            Ok(procedure) => Some(procedure),
            Err(_) => {
                debug!(family = F::NAME, name, "start refused: unknown procedure");
                None
            }
        }
    }

    fn prepare(&self, procedure: F::Procedure) -> Option<PreparedRun<F>> {
        let run_id = self.next_run.fetch_add(1, Ordering::Relaxed) + 1;
        let token = RunToken::new();
        let mut dataset = None;

        self.board.send_if_modified(|board| {
            if board.is_running() {
                return false;
            }
            let state = F::initial_state(board.dataset());
            board.begin(run_id, token.clone(), state);
            dataset = Some(board.dataset().clone());
            true
        });

        let Some(dataset) = dataset else {
            debug!(family = F::NAME, %procedure, "start refused: run already active");
            return None;
        };

        info!(family = F::NAME, %procedure, run = run_id, "run started");
        Some(PreparedRun {
            procedure,
            dataset,
            completion: Completion {
                board: Arc::clone(&self.board),
                token: token.clone(),
                outcome: RunOutcome::Cancelled,
            },
            stepper: Stepper::new(run_id, token, Arc::clone(&self.board), self.speed.clone()),
        })
    }
}

impl<F: Family> Drop for Controller<F> {
    fn drop(&mut self) {
        // A spawned run must not outlive the visualizer that owns it.
        self.stop();
    }
}

/// A run that has entered `Running` but not yet been polled.
struct PreparedRun<F: Family> {
    procedure: F::Procedure,
    dataset: F::Dataset,
    stepper: Stepper<F>,
    completion: Completion<F>,
}

impl<F: Family> PreparedRun<F> {
    async fn drive(self) -> RunOutcome {
        let PreparedRun {
            procedure,
            dataset,
            stepper,
            mut completion,
        } = self;
        let run_id = stepper.run_id();

        if F::run(procedure, dataset, stepper).await.is_ok() {
            completion.outcome = RunOutcome::Completed;
        }
        let outcome = completion.settle();
        info!(family = F::NAME, %procedure, run = run_id, ?outcome, "run finished");
        outcome
    }
}

/// Returns the board to idle when a run ends, however it ends.
///
/// Settling only touches the board if it still belongs to this run; a run
/// already halted by `stop` or superseded by a newer run is left alone.
struct Completion<F: Family> {
    board: Arc<watch::Sender<FamilyBoard<F>>>,
    token: RunToken,
    outcome: RunOutcome,
}

impl<F: Family> Completion<F> {
    fn settle(&self) -> RunOutcome {
        let mut settled = RunOutcome::Cancelled;
        self.board.send_if_modified(|board| {
            let ours = board
                .token
                .as_ref()
                .is_some_and(|token| token.same_run(&self.token));
            if ours && board.halt(self.outcome) {
                settled = self.outcome;
                true
            } else {
                false
            }
        });
        settled
    }
}

impl<F: Family> Drop for Completion<F> {
    fn drop(&mut self) {
        // Covers a dropped or aborted run future; a no-op after `settle`.
        self.outcome = RunOutcome::Cancelled;
        self.settle();
    }
}

/// Handle to a run spawned by [`Controller::start`].
#[derive(Debug)]
pub struct RunHandle {
    run_id: u64,
    task: JoinHandle<RunOutcome>,
}

impl RunHandle {
    /// Identifier of the run.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Wait for the run to end.
    pub async fn finished(self) -> RunOutcome {
        self.task.await.unwrap_or(RunOutcome::Cancelled)
    }
}
