//! One-line text frames for each family's run state.

use std::fmt::Write;

use algoviz_algorithms::graph::{EdgeRef, NodeId};
use algoviz_algorithms::{
    BarMark, GraphState, Lookup, SearchDataset, SearchOutcome, SearchState, SortState, TreeState,
};

/// `(v)` comparing, `<v>` swapping, `v*` sorted.
pub fn sort_frame(state: &SortState) -> String {
    let bars: Vec<String> = state
        .values
        .iter()
        .zip(&state.marks)
        .map(|(v, mark)| match mark {
            BarMark::Unsorted => v.to_string(),
            BarMark::Comparing => format!("({v})"),
            BarMark::Swapping => format!("<{v}>"),
            BarMark::Sorted => format!("{v}*"),
        })
        .collect();
    bars.join(" ")
}

/// `[v]` current probe, `-` eliminated, `|` around the live window.
pub fn search_frame(dataset: &SearchDataset, state: &SearchState) -> String {
    let mut line = String::new();
    for (i, v) in dataset.values().iter().enumerate() {
        if state.window.is_some_and(|(low, _)| low == i) {
            line.push_str("| ");
        }
        if state.current == Some(i) {
            let _ = write!(line, "[{v}] ");
        } else if state.eliminated.contains(&i) {
            line.push_str("- ");
        } else {
            let _ = write!(line, "{v} ");
        }
        if state.window.is_some_and(|(_, high)| high == i) {
            line.push_str("| ");
        }
    }
    match state.outcome {
        SearchOutcome::Pending => {}
        SearchOutcome::Found(i) => {
            let _ = write!(line, "=> found {} at {i}", dataset.target());
        }
        SearchOutcome::Exhausted => {
            let _ = write!(line, "=> {} not found", dataset.target());
        }
    }
    line.trim_end().to_string()
}

pub fn graph_frame(state: &GraphState) -> String {
    let nodes = |ids: &[NodeId]| -> String {
        ids.iter().map(|n| n.0.to_string()).collect::<Vec<_>>().join(",")
    };
    let edges = |refs: &[EdgeRef]| -> String {
        refs.iter()
            .map(|e| format!("{}-{}", e.from.0, e.to.0))
            .collect::<Vec<_>>()
            .join(",")
    };

    let mut line = match state.current {
        Some(node) => format!("at {}  ", node.0),
        None => String::new(),
    };
    let _ = write!(line, "visited [{}]", nodes(&state.visited));
    let _ = write!(line, "  edges [{}]", edges(&state.traversed));
    if !state.queue.is_empty() {
        let _ = write!(line, "  queue [{}]", nodes(&state.queue));
    }
    if let Some(edge) = state.examining {
        let _ = write!(line, "  examining {}-{}", edge.from.0, edge.to.0);
    }
    if state.distances.iter().any(Option::is_some) {
        let dist: Vec<String> = state
            .distances
            .iter()
            .map(|d| d.map_or("∞".to_string(), |d| d.to_string()))
            .collect();
        let _ = write!(line, "  dist [{}]", dist.join(","));
    }
    line
}

pub fn tree_frame(state: &TreeState) -> String {
    let join = |values: &[u32]| values.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
    let mut line = format!("path [{}]", join(&state.highlighted));
    if !state.order.is_empty() {
        let _ = write!(line, "  order [{}]", join(&state.order));
    }
    match state.lookup {
        Lookup::Pending => {}
        Lookup::Found(v) => {
            let _ = write!(line, "  => found {v}");
        }
        Lookup::Missing(v) => {
            let _ = write!(line, "  => {v} not found");
        }
    }
    line
}
