//! Sorting family: six comparison sorts over a sequence of bars.

mod divide;
mod simple;

use std::fmt;
use std::str::FromStr;

use algoviz_engine::{Family, StepResult, Stepper};
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};

use crate::error::UnknownProcedure;

/// Visual role of one bar. Every index holds exactly one mark, so a bar can
/// never be both under comparison and final.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarMark {
    /// Not examined, or examined and released.
    #[default]
    Unsorted,
    /// One side of the comparison in progress.
    Comparing,
    /// About to move.
    Swapping,
    /// In its final position.
    Sorted,
}

impl BarMark {
    fn is_transient(self) -> bool {
        matches!(self, BarMark::Comparing | BarMark::Swapping)
    }
}

/// Run state of a sort: the working sequence and a mark per index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub values: Vec<u32>,
    pub marks: Vec<BarMark>,
}

impl SortState {
    /// Fresh state over `values`, nothing examined.
    pub fn new(values: Vec<u32>) -> Self {
        let marks = vec![BarMark::Unsorted; values.len()];
        Self { values, marks }
    }

    /// Indices currently holding `mark`, ascending.
    pub fn indices(&self, mark: BarMark) -> Vec<usize> {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == mark)
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether every bar is final.
    pub fn is_sorted(&self) -> bool {
        self.marks.iter().all(|m| *m == BarMark::Sorted)
    }

    /// Move the transient `mark` to exactly `indices`. Sorted bars keep their mark.
    fn highlight(&mut self, indices: &[usize], mark: BarMark) {
        self.release(mark);
        for &i in indices {
            if let Some(slot) = self.marks.get_mut(i) {
                if *slot != BarMark::Sorted {
                    *slot = mark;
                }
            }
        }
    }

    /// Drop `mark` from every bar holding it.
    fn release(&mut self, mark: BarMark) {
        for slot in self.marks.iter_mut().filter(|m| **m == mark) {
            *slot = BarMark::Unsorted;
        }
    }

    fn release_transient(&mut self) {
        for slot in self.marks.iter_mut().filter(|m| m.is_transient()) {
            *slot = BarMark::Unsorted;
        }
    }

    fn settle(&mut self, index: usize) {
        if let Some(slot) = self.marks.get_mut(index) {
            *slot = BarMark::Sorted;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
        self.release(BarMark::Swapping);
    }

    fn finish(&mut self) {
        self.marks.fill(BarMark::Sorted);
    }
}

/// Sorting procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortProcedure {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortProcedure {
    /// Every sorting procedure in catalog order.
    pub const ALL: [SortProcedure; 6] = [
        SortProcedure::Bubble,
        SortProcedure::Selection,
        SortProcedure::Insertion,
        SortProcedure::Merge,
        SortProcedure::Quick,
        SortProcedure::Heap,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SortProcedure::Bubble => "Bubble Sort",
            SortProcedure::Selection => "Selection Sort",
            SortProcedure::Insertion => "Insertion Sort",
            SortProcedure::Merge => "Merge Sort",
            SortProcedure::Quick => "Quick Sort",
            SortProcedure::Heap => "Heap Sort",
        }
    }
}

impl fmt::Display for SortProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortProcedure {
    type Err = UnknownProcedure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::procedure::lookup(&Self::ALL, s)
    }
}

/// The sorting family. Dataset: the bars to sort.
#[derive(Debug)]
pub struct Sorting;

impl Family for Sorting {
    type Dataset = Vec<u32>;
    type State = SortState;
    type Procedure = SortProcedure;

    const NAME: &'static str = "sorting";

    fn initial_state(dataset: &Vec<u32>) -> SortState {
        SortState::new(dataset.clone())
    }

    fn run(
        procedure: SortProcedure,
        dataset: Vec<u32>,
        stepper: Stepper<Self>,
    ) -> BoxFuture<'static, StepResult> {
        async move {
            let mut values = dataset;
            let st = &stepper;
            match procedure {
                SortProcedure::Bubble => simple::bubble(st, &mut values).await?,
                SortProcedure::Selection => simple::selection(st, &mut values).await?,
                SortProcedure::Insertion => simple::insertion(st, &mut values).await?,
                SortProcedure::Merge => divide::merge_sort(st, &mut values).await?,
                SortProcedure::Quick => divide::quick_sort(st, &mut values).await?,
                SortProcedure::Heap => divide::heap_sort(st, &mut values).await?,
            }
            stepper.apply(SortState::finish)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_engine::{Controller, RunOutcome, Speed};
    use proptest::prelude::*;

    fn sort_with(procedure: SortProcedure, values: Vec<u32>) -> (SortState, Option<RunOutcome>) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        rt.block_on(async {
            let ctl = Controller::<Sorting>::new(values, Speed::MAX);
            let outcome = ctl.run(procedure).await;
            (ctl.state(), outcome)
        })
    }

    #[test]
    fn names_round_trip() {
        for procedure in SortProcedure::ALL {
            assert_eq!(procedure.name().parse::<SortProcedure>(), Ok(procedure));
        }
        assert_eq!("quick-sort".parse::<SortProcedure>(), Ok(SortProcedure::Quick));
        assert!("Bogo Sort".parse::<SortProcedure>().is_err());
    }

    #[test]
    fn highlight_never_overwrites_sorted() {
        let mut state = SortState::new(vec![3, 2, 1]);
        state.settle(2);
        state.highlight(&[1, 2], BarMark::Comparing);
        assert_eq!(
            state.marks,
            vec![BarMark::Unsorted, BarMark::Comparing, BarMark::Sorted]
        );

        state.highlight(&[0], BarMark::Comparing);
        assert_eq!(state.indices(BarMark::Comparing), vec![0]);
        state.release_transient();
        assert!(state.indices(BarMark::Comparing).is_empty());
    }

    #[test]
    fn bubble_scenario() {
        let (state, outcome) = sort_with(SortProcedure::Bubble, vec![5, 3, 8, 1]);
        assert_eq!(outcome, Some(RunOutcome::Completed));
        assert_eq!(state.values, vec![1, 3, 5, 8]);
        assert_eq!(state.indices(BarMark::Sorted), vec![0, 1, 2, 3]);
    }

    #[test]
    fn every_sort_handles_degenerate_inputs() {
        for procedure in SortProcedure::ALL {
            let (state, outcome) = sort_with(procedure, Vec::new());
            assert_eq!(outcome, Some(RunOutcome::Completed), "{procedure} on empty");
            assert!(state.values.is_empty());

            let (state, _) = sort_with(procedure, vec![7]);
            assert_eq!(state.values, vec![7]);
            assert!(state.is_sorted());

            let (state, _) = sort_with(procedure, vec![4, 4, 4, 1]);
            assert_eq!(state.values, vec![1, 4, 4, 4], "{procedure} with duplicates");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn every_sort_sorts(
            values in prop::collection::vec(1u32..=100, 0..=20),
            which in 0usize..6,
        ) {
            let procedure = SortProcedure::ALL[which];
            let mut expected = values.clone();
            expected.sort_unstable();

            let (state, outcome) = sort_with(procedure, values);
            prop_assert_eq!(outcome, Some(RunOutcome::Completed));
            prop_assert_eq!(&state.values, &expected);
            prop_assert!(state.is_sorted());
        }
    }
}
