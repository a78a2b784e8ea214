//! Searching family: four searches over a sorted sequence.

mod bisect;
mod scan;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use algoviz_engine::{Family, StepResult, Stepper};
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};

use crate::error::UnknownProcedure;

/// A sorted sequence and the value to look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDataset {
    values: Vec<u32>,
    target: u32,
}

impl SearchDataset {
    /// Build a dataset, sorting `values` ascending.
    pub fn new(mut values: Vec<u32>, target: u32) -> Self {
        values.sort_unstable();
        Self { values, target }
    }

    /// The sorted values.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// The value searched for.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Same values, different target.
    #[must_use]
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }
}

/// Terminal result of a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Not yet run, or still running.
    #[default]
    Pending,
    /// Target found at this index.
    Found(usize),
    /// Every candidate eliminated.
    Exhausted,
}

/// Run state of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Index under examination.
    pub current: Option<usize>,
    /// Indices ruled out.
    pub eliminated: BTreeSet<usize>,
    /// Active `[low, high]` window, for searches that keep one.
    pub window: Option<(usize, usize)>,
    /// Every probed index in probe order.
    pub probes: Vec<usize>,
    pub outcome: SearchOutcome,
}

impl SearchState {
    fn probe(&mut self, index: usize) {
        self.current = Some(index);
        self.probes.push(index);
    }

    /// Rule out `indices`. An eliminated index is no longer under examination.
    fn eliminate(&mut self, indices: impl IntoIterator<Item = usize>) {
        self.eliminated.extend(indices);
        if self.current.is_some_and(|i| self.eliminated.contains(&i)) {
            self.current = None;
        }
    }

    fn found(&mut self, index: usize) {
        self.current = Some(index);
        self.outcome = SearchOutcome::Found(index);
    }

    fn exhausted(&mut self) {
        self.current = None;
        self.outcome = SearchOutcome::Exhausted;
    }
}

/// Searching procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchProcedure {
    Linear,
    Binary,
    Jump,
    Interpolation,
}

impl SearchProcedure {
    /// Every searching procedure in catalog order.
    pub const ALL: [SearchProcedure; 4] = [
        SearchProcedure::Linear,
        SearchProcedure::Binary,
        SearchProcedure::Jump,
        SearchProcedure::Interpolation,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SearchProcedure::Linear => "Linear Search",
            SearchProcedure::Binary => "Binary Search",
            SearchProcedure::Jump => "Jump Search",
            SearchProcedure::Interpolation => "Interpolation Search",
        }
    }
}

impl fmt::Display for SearchProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchProcedure {
    type Err = UnknownProcedure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::procedure::lookup(&Self::ALL, s)
    }
}

/// The searching family.
#[derive(Debug)]
pub struct Searching;

impl Family for Searching {
    type Dataset = SearchDataset;
    type State = SearchState;
    type Procedure = SearchProcedure;

    const NAME: &'static str = "searching";

    fn initial_state(_: &SearchDataset) -> SearchState {
        SearchState::default()
    }

    fn run(
        procedure: SearchProcedure,
        dataset: SearchDataset,
        stepper: Stepper<Self>,
    ) -> BoxFuture<'static, StepResult> {
        async move {
            let st = &stepper;
            let (values, target) = (dataset.values(), dataset.target());
            let found = match procedure {
                SearchProcedure::Linear => scan::linear(st, values, target).await?,
                SearchProcedure::Binary => bisect::binary(st, values, target).await?,
                SearchProcedure::Jump => scan::jump(st, values, target).await?,
                SearchProcedure::Interpolation => {
                    bisect::interpolation(st, values, target).await?
                }
            };
            match found {
                Some(index) => stepper.apply(move |s| s.found(index)),
                None => stepper.apply(SearchState::exhausted),
            }
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_engine::{Controller, RunOutcome, Speed};
    use proptest::prelude::*;

    fn search_with(procedure: SearchProcedure, dataset: SearchDataset) -> SearchState {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        rt.block_on(async {
            let ctl = Controller::<Searching>::new(dataset, Speed::MAX);
            assert_eq!(ctl.run(procedure).await, Some(RunOutcome::Completed));
            ctl.state()
        })
    }

    fn scenario() -> SearchDataset {
        SearchDataset::new(vec![11, 22, 25, 33, 34, 45, 55, 64], 45)
    }

    #[test]
    fn dataset_is_sorted_on_construction() {
        let dataset = SearchDataset::new(vec![9, 3, 5], 5);
        assert_eq!(dataset.values(), &[3, 5, 9]);
        assert_eq!(dataset.with_target(9).target(), 9);
    }

    #[test]
    fn binary_scenario() {
        let state = search_with(SearchProcedure::Binary, scenario());
        assert_eq!(state.outcome, SearchOutcome::Found(5));
        assert_eq!(state.probes, vec![3, 5]);
        assert!(!state.eliminated.contains(&5));
    }

    #[test]
    fn jump_finds_in_every_block() {
        let dataset = scenario();
        for (index, &value) in dataset.values().iter().enumerate() {
            let state = search_with(SearchProcedure::Jump, dataset.clone().with_target(value));
            assert_eq!(state.outcome, SearchOutcome::Found(index), "target {value}");
        }
    }

    #[test]
    fn jump_reports_missing_past_the_end() {
        let state = search_with(SearchProcedure::Jump, scenario().with_target(99));
        assert_eq!(state.outcome, SearchOutcome::Exhausted);
        assert_eq!(state.eliminated.len(), 8);

        let state = search_with(SearchProcedure::Jump, scenario().with_target(30));
        assert_eq!(state.outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn interpolation_handles_flat_windows() {
        let flat = SearchDataset::new(vec![7, 7, 7, 7], 7);
        let state = search_with(SearchProcedure::Interpolation, flat.clone());
        assert!(matches!(state.outcome, SearchOutcome::Found(_)));

        let state = search_with(SearchProcedure::Interpolation, flat.with_target(8));
        assert_eq!(state.outcome, SearchOutcome::Exhausted);
        assert!(state.probes.is_empty());

        let single = SearchDataset::new(vec![42], 42);
        let state = search_with(SearchProcedure::Interpolation, single);
        assert_eq!(state.outcome, SearchOutcome::Found(0));
    }

    #[test]
    fn empty_dataset_is_exhausted() {
        for procedure in SearchProcedure::ALL {
            let state = search_with(procedure, SearchDataset::new(Vec::new(), 1));
            assert_eq!(state.outcome, SearchOutcome::Exhausted, "{procedure}");
            assert!(state.probes.is_empty());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn searches_are_correct_and_in_bounds(
            values in prop::collection::vec(1u32..=100, 1..=20),
            target in 1u32..=100,
            which in 0usize..4,
        ) {
            let procedure = SearchProcedure::ALL[which];
            let dataset = SearchDataset::new(values, target);
            let present = dataset.values().contains(&target);
            let len = dataset.values().len();

            let state = search_with(procedure, dataset.clone());
            prop_assert!(state.probes.iter().all(|&i| i < len));
            match state.outcome {
                SearchOutcome::Found(i) => {
                    prop_assert!(present);
                    prop_assert_eq!(dataset.values()[i], target);
                }
                SearchOutcome::Exhausted => prop_assert!(!present),
                SearchOutcome::Pending => prop_assert!(false, "search did not finish"),
            }
        }
    }
}
