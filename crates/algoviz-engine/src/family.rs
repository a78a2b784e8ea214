//! The seam between the controller and an algorithm family.

use std::fmt;
use std::str::FromStr;

use futures::future::BoxFuture;

use crate::board::Board;
use crate::step::{StepResult, Stepper};

/// Board type a family's controller publishes.
pub type FamilyBoard<F> = Board<<F as Family>::Dataset, <F as Family>::State>;

/// A group of algorithms sharing one data model and one run-state shape.
///
/// Implementations turn a named procedure into a future that drives the
/// procedure step by step through the supplied [`Stepper`].
pub trait Family: Sized + Send + Sync + 'static {
    /// Subject of the visualization.
    type Dataset: Clone + fmt::Debug + Send + Sync + 'static;

    /// Observable run state, written only through the stepper.
    type State: Clone + fmt::Debug + Send + Sync + 'static;

    /// Procedures this family implements.
    type Procedure: Copy + fmt::Debug + fmt::Display + FromStr + Send + Sync + 'static;

    /// Short family name used in logs.
    const NAME: &'static str;

    /// Run state before anything has been examined.
    fn initial_state(dataset: &Self::Dataset) -> Self::State;

    /// Drive `procedure` over `dataset` to completion or cancellation.
    fn run(
        procedure: Self::Procedure,
        dataset: Self::Dataset,
        stepper: Stepper<Self>,
    ) -> BoxFuture<'static, StepResult>;
}
