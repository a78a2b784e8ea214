//! Graph family: traversals, shortest paths and a minimum spanning tree over a
//! small fixed undirected weighted graph.

mod mst;
mod paths;
mod traverse;

use std::fmt;
use std::str::FromStr;

use algoviz_engine::{Family, StepResult, Stepper};
use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};

use crate::error::UnknownProcedure;

/// Index of a node within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

/// A node and where a renderer should draw it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
}

/// Weighted undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: u32,
}

/// Oriented reference to an edge, as walked by a procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    pub from: NodeId,
    pub to: NodeId,
}

impl EdgeRef {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// Whether this refers to the undirected edge `{a, b}`.
    pub fn joins(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// A static graph with a fixed source node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
    source: NodeId,
}

impl Graph {
    /// Build a graph. Node ids must equal their position, edges must join two
    /// existing nodes, and the source must exist.
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>, source: NodeId) -> Option<Self> {
        let n = nodes.len();
        let ids_match = nodes.iter().enumerate().all(|(i, node)| node.id == NodeId(i));
        let edges_valid = edges.iter().all(|e| e.from.0 < n && e.to.0 < n);
        (ids_match && edges_valid && source.0 < n).then_some(Self {
            nodes,
            edges,
            source,
        })
    }

    /// The six-node demonstration graph.
    pub fn sample() -> Self {
        let nodes = [(150.0, 50.0), (50.0, 150.0), (250.0, 150.0), (50.0, 280.0), (150.0, 200.0), (250.0, 280.0)]
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| GraphNode { id: NodeId(i), x, y })
            .collect();
        let edges = [(0, 1, 4), (0, 2, 2), (1, 3, 5), (1, 4, 1), (2, 4, 3), (2, 5, 6), (3, 4, 2), (4, 5, 4)]
            .into_iter()
            .map(|(from, to, weight)| GraphEdge {
                from: NodeId(from),
                to: NodeId(to),
                weight,
            })
            .collect();
        Self {
            nodes,
            edges,
            source: NodeId(0),
        }
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Node every traversal starts from.
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Neighbors of each node with the connecting weight, in edge order.
    pub fn adjacency(&self) -> Vec<Vec<(NodeId, u32)>> {
        let mut adj = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            adj[edge.from.0].push((edge.to, edge.weight));
            adj[edge.to.0].push((edge.from, edge.weight));
        }
        adj
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::sample()
    }
}

/// Run state of a graph procedure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphState {
    /// Node being processed. Never also in `visited`.
    pub current: Option<NodeId>,
    /// Nodes in the order they were settled.
    pub visited: Vec<NodeId>,
    /// Edges that discovered a node or improved a distance, in order.
    pub traversed: Vec<EdgeRef>,
    /// Live work queue (BFS).
    pub queue: Vec<NodeId>,
    /// Tentative distance per node; `None` is unreached.
    pub distances: Vec<Option<u32>>,
    /// Edge under consideration (Bellman-Ford, Kruskal).
    pub examining: Option<EdgeRef>,
}

impl GraphState {
    fn new(node_count: usize) -> Self {
        Self {
            distances: vec![None; node_count],
            ..Self::default()
        }
    }

    fn visit(&mut self, node: NodeId) {
        if !self.visited.contains(&node) {
            self.visited.push(node);
        }
    }

    /// Start processing `node`, settling whichever node came before it.
    fn focus(&mut self, node: NodeId) {
        if let Some(previous) = self.current.replace(node) {
            self.visit(previous);
        }
    }

    fn finish(&mut self) {
        if let Some(last) = self.current.take() {
            self.visit(last);
        }
        self.examining = None;
        self.queue.clear();
    }
}

/// Graph procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphProcedure {
    Bfs,
    Dfs,
    Dijkstra,
    BellmanFord,
    Kruskal,
}

impl GraphProcedure {
    /// Every graph procedure in catalog order.
    pub const ALL: [GraphProcedure; 5] = [
        GraphProcedure::Bfs,
        GraphProcedure::Dfs,
        GraphProcedure::Dijkstra,
        GraphProcedure::BellmanFord,
        GraphProcedure::Kruskal,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            GraphProcedure::Bfs => "BFS",
            GraphProcedure::Dfs => "DFS",
            GraphProcedure::Dijkstra => "Dijkstra",
            GraphProcedure::BellmanFord => "Bellman-Ford",
            GraphProcedure::Kruskal => "Kruskal's MST",
        }
    }
}

impl fmt::Display for GraphProcedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphProcedure {
    type Err = UnknownProcedure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::procedure::lookup(&Self::ALL, s)
    }
}

/// The graph family.
#[derive(Debug)]
pub struct Graphs;

impl Family for Graphs {
    type Dataset = Graph;
    type State = GraphState;
    type Procedure = GraphProcedure;

    const NAME: &'static str = "graph";

    fn initial_state(graph: &Graph) -> GraphState {
        GraphState::new(graph.node_count())
    }

    fn run(
        procedure: GraphProcedure,
        graph: Graph,
        stepper: Stepper<Self>,
    ) -> BoxFuture<'static, StepResult> {
        async move {
            let st = &stepper;
            match procedure {
                GraphProcedure::Bfs => traverse::bfs(st, &graph).await?,
                GraphProcedure::Dfs => traverse::dfs(st, &graph).await?,
                GraphProcedure::Dijkstra => paths::dijkstra(st, &graph).await?,
                GraphProcedure::BellmanFord => paths::bellman_ford(st, &graph).await?,
                GraphProcedure::Kruskal => mst::kruskal(st, &graph).await?,
            }
            stepper.apply(GraphState::finish)
        }
        .boxed()
    }
}
