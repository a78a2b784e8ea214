//! Algoviz Algorithms
//!
//! The algorithm families the playback engine drives, plus the non-animated
//! linear structures and the dataset helpers that feed them.
//!
//! # Architecture
//!
//! - **Sorting**: bubble, selection, insertion, merge, quick and heap sort
//! - **Searching**: linear, binary, jump and interpolation search
//! - **Graph**: BFS, DFS, Dijkstra, Bellman-Ford and Kruskal over a sample graph
//! - **Tree**: BST search and the three depth-first traversals
//! - **Linear**: stack, queue, priority queue and deque (atomic, not animated)
//! - **Input / Dataset**: custom input validation and random generation
//!
//! # Usage
//!
//! ```ignore
//! let values = parse_values("5, 3, 8, 1", &DatasetConfig::default())?;
//! let ctl = Controller::<Sorting>::new(values, Speed::new(80));
//! ctl.run(SortProcedure::Bubble).await;
//! assert_eq!(ctl.state().values, vec![1, 3, 5, 8]);
//! ```

mod dataset;
mod error;
mod input;
mod procedure;

pub mod graph;
pub mod linear;
pub mod searching;
pub mod sorting;
pub mod tree;

pub use dataset::{DatasetConfig, DatasetGenerator};
pub use error::{InputError, Result, UnknownProcedure};
pub use input::{parse_search_values, parse_values};

pub use graph::{Graph, GraphProcedure, GraphState, Graphs};
pub use linear::{Deque, PriorityQueue, Queue, Stack};
pub use searching::{SearchDataset, SearchOutcome, SearchProcedure, SearchState, Searching};
pub use sorting::{BarMark, SortProcedure, SortState, Sorting};
pub use tree::{BstDataset, Lookup, TreeProcedure, TreeState, Trees};
