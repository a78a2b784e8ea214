//! The step protocol every algorithm procedure follows.
//!
//! A step checks the run token, applies one mutation to the run state, then
//! suspends for the current delay. Cancellation surfaces as [`Cancelled`] so
//! procedures can bail out of any depth of recursion with `?`.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::trace;

use crate::family::{Family, FamilyBoard};
use crate::speed::SpeedControl;
use crate::token::RunToken;

/// The run's token was cleared; the procedure must return without mutating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("run cancelled")]
pub struct Cancelled;

/// Result of a step or of a whole procedure.
pub type StepResult<T = ()> = std::result::Result<T, Cancelled>;

/// Handle through which one run mutates its board.
pub struct Stepper<F: Family> {
    run_id: u64,
    token: RunToken,
    board: Arc<watch::Sender<FamilyBoard<F>>>,
    speed: SpeedControl,
}

impl<F: Family> Stepper<F> {
    pub(crate) fn new(
        run_id: u64,
        token: RunToken,
        board: Arc<watch::Sender<FamilyBoard<F>>>,
        speed: SpeedControl,
    ) -> Self {
        Self {
            run_id,
            token,
            board,
            speed,
        }
    }

    /// Identifier of the run this stepper belongs to.
    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Whether the run is still live.
    pub fn is_live(&self) -> bool {
        self.token.is_live()
    }

    /// Token check without mutation. Recursive procedures call this on entry.
    pub fn checkpoint(&self) -> StepResult {
        if self.token.is_live() {
            Ok(())
        } else {
            Err(Cancelled)
        }
    }

    /// Apply a mutation without suspending.
    ///
    /// The token is checked under the board lock, so a mutation can never
    /// land after the controller has cancelled the run.
    pub fn apply(&self, mutate: impl FnOnce(&mut F::State)) -> StepResult {
        let token = &self.token;
        let mut step = 0;
        let applied = self.board.send_if_modified(|board| {
            if !token.is_live() {
                return false;
            }
            mutate(board.state_mut());
            step = board.record_step();
            true
        });

        if applied {
            trace!(family = F::NAME, run = self.run_id, step, "step applied");
            Ok(())
        } else {
            Err(Cancelled)
        }
    }

    /// Apply a mutation, then suspend for one delay period.
    pub async fn step(&self, mutate: impl FnOnce(&mut F::State) + Send) -> StepResult {
        self.step_for(1, mutate).await
    }

    /// Apply a mutation, then suspend for `beats` delay periods.
    pub async fn step_for(
        &self,
        beats: u32,
        mutate: impl FnOnce(&mut F::State) + Send,
    ) -> StepResult {
        self.apply(mutate)?;
        self.suspend(beats).await
    }

    /// Suspend for `beats` delay periods without mutating.
    pub async fn pause(&self, beats: u32) -> StepResult {
        self.checkpoint()?;
        self.suspend(beats).await
    }

    async fn suspend(&self, beats: u32) -> StepResult {
        // Speed is sampled once; changes apply from the next step.
        let delay = self.speed.delay() * beats;
        tokio::time::sleep(delay).await;
        self.checkpoint()
    }
}
