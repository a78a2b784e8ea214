//! Tree family: search and traversals over a binary search tree that is
//! rebuilt from its value set whenever the set changes.

mod bst;
mod walk;

pub use bst::{Bst, BstNode, NodePlacement};

use std::fmt;
use std::str::FromStr;

use algoviz_engine::{Family, StepResult, Stepper};
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};

use crate::error::UnknownProcedure;
use walk::Order;

/// Values the tree starts from.
pub const DEFAULT_VALUES: [u32; 7] = [50, 30, 70, 20, 40, 60, 80];

/// Unique values in insertion order plus the value `Search` looks for.
///
/// Always holds at least one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstDataset {
    values: Vec<u32>,
    target: u32,
}

impl BstDataset {
    /// Keeps the first occurrence of each value. `None` if no values remain.
    pub fn new(values: impl IntoIterator<Item = u32>, target: u32) -> Option<Self> {
        let mut unique = Vec::new();
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        (!unique.is_empty()).then_some(Self {
            values: unique,
            target,
        })
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn set_target(&mut self, target: u32) {
        self.target = target;
    }

    #[must_use]
    pub fn with_target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    pub fn contains(&self, value: u32) -> bool {
        self.values.contains(&value)
    }

    /// Add a value. Returns false, changing nothing, if it is already present.
    pub fn insert(&mut self, value: u32) -> bool {
        if self.contains(value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Remove a value. Refused when it is absent or is the last one left.
    pub fn delete(&mut self, value: u32) -> bool {
        if self.values.len() <= 1 || !self.contains(value) {
            return false;
        }
        self.values.retain(|&v| v != value);
        true
    }

    /// The tree these values build.
    pub fn tree(&self) -> Bst {
        Bst::from_values(&self.values)
    }
}

impl Default for BstDataset {
    fn default() -> Self {
        Self {
            values: DEFAULT_VALUES.to_vec(),
            target: DEFAULT_VALUES[5],
        }
    }
}

/// Result of a tree search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lookup {
    #[default]
    Pending,
    Found(u32),
    Missing(u32),
}

/// Run state of a tree procedure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeState {
    /// Search path so far, or every node visited by a traversal.
    pub highlighted: Vec<u32>,
    /// Traversal output in visit order.
    pub order: Vec<u32>,
    pub lookup: Lookup,
}

/// Tree procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeProcedure {
    Search,
    Inorder,
    Preorder,
    Postorder,
}

impl TreeProcedure {
    /// Every tree procedure in catalog order.
    pub const ALL: [TreeProcedure; 4] = [
        TreeProcedure::Search,
        TreeProcedure::Inorder,
        TreeProcedure::Preorder,
        TreeProcedure::Postorder,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            TreeProcedure::Search => "BST Search",
            TreeProcedure::Inorder => "Inorder Traversal",
            TreeProcedure::Preorder => "Preorder Traversal",
            TreeProcedure::Postorder => "Postorder Traversal",
        }
    }
}

impl fmt::Display for TreeProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TreeProcedure {
    type Err = UnknownProcedure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::procedure::lookup(&Self::ALL, s)
    }
}

/// The tree family.
#[derive(Debug)]
pub struct Trees;

impl Family for Trees {
    type Dataset = BstDataset;
    type State = TreeState;
    type Procedure = TreeProcedure;

    const NAME: &'static str = "tree";

    fn initial_state(_: &BstDataset) -> TreeState {
        TreeState::default()
    }

    fn run(
        procedure: TreeProcedure,
        dataset: BstDataset,
        stepper: Stepper<Self>,
    ) -> BoxFuture<'static, StepResult> {
        async move {
            let tree = dataset.tree();
            let root = tree.root();
            let st = &stepper;
            match procedure {
                TreeProcedure::Search => walk::search(st, &tree, dataset.target()).await,
                TreeProcedure::Inorder => walk::traverse(st, &tree, root, Order::In).await,
                TreeProcedure::Preorder => walk::traverse(st, &tree, root, Order::Pre).await,
                TreeProcedure::Postorder => walk::traverse(st, &tree, root, Order::Post).await,
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

    fn run_on(procedure: TreeProcedure, dataset: BstDataset) -> TreeState {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        rt.block_on(async {
            let ctl = Controller::<Trees>::new(dataset, Speed::MAX);
            assert_eq!(ctl.run(procedure).await, Some(RunOutcome::Completed));
            ctl.state()
        })
    }

    fn dataset(values: &[u32], target: u32) -> BstDataset {
        BstDataset::new(values.iter().copied(), target).unwrap()
    }

    #[test]
    fn preorder_scenario() {
        let state = run_on(TreeProcedure::Preorder, dataset(&[50, 30, 70, 20, 40], 0));
        assert_eq!(state.order, vec![50, 30, 20, 40, 70]);
        assert_eq!(state.highlighted, state.order);
        assert_eq!(state.lookup, Lookup::Pending);
    }

    #[test]
    fn postorder_and_inorder() {
        let data = dataset(&[50, 30, 70, 20, 40], 0);
        let post = run_on(TreeProcedure::Postorder, data.clone());
        assert_eq!(post.order, vec![20, 40, 30, 70, 50]);
        let inorder = run_on(TreeProcedure::Inorder, data);
        assert_eq!(inorder.order, vec![20, 30, 40, 50, 70]);
    }

    #[test]
    fn search_highlights_the_path() {
        let state = run_on(TreeProcedure::Search, BstDataset::default().with_target(60));
        assert_eq!(state.highlighted, vec![50, 70, 60]);
        assert_eq!(state.lookup, Lookup::Found(60));
        assert!(state.order.is_empty());
    }

    #[test]
    fn search_for_missing_value() {
        let state = run_on(TreeProcedure::Search, BstDataset::default().with_target(45));
        assert_eq!(state.highlighted, vec![50, 30, 40]);
        assert_eq!(state.lookup, Lookup::Missing(45));
    }

    #[test]
    fn insert_and_delete_keep_the_set_valid() {
        let mut data = dataset(&[10, 10, 5], 0);
        assert_eq!(data.values(), &[10, 5]);

        assert!(!data.insert(5));
        assert!(data.insert(7));
        assert_eq!(data.values(), &[10, 5, 7]);

        assert!(!data.delete(99));
        assert!(data.delete(10));
        assert!(data.delete(5));
        assert!(!data.delete(7));
        assert_eq!(data.values(), &[7]);

        assert!(BstDataset::new([], 1).is_none());
    }

    #[test]
    fn procedure_names_parse() {
        assert_eq!("bst search".parse::<TreeProcedure>().unwrap(), TreeProcedure::Search);
        assert_eq!(
            "postorder-traversal".parse::<TreeProcedure>().unwrap(),
            TreeProcedure::Postorder
        );
        assert!("levelorder".parse::<TreeProcedure>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn inorder_is_strictly_ascending(values in prop::collection::vec(1u32..=100, 1..15)) {
            let data = BstDataset::new(values, 0).unwrap();
            let mut expected = data.values().to_vec();
            expected.sort_unstable();

            let state = run_on(TreeProcedure::Inorder, data);
            prop_assert!(state.order.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(state.order, expected);
        }
    }
}
