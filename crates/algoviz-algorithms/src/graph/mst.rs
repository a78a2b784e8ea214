//! Kruskal's minimum spanning forest.

use algoviz_engine::{StepResult, Stepper};

use super::{EdgeRef, Graph, Graphs};

/// Disjoint-set forest with path halving.
struct Components {
    parent: Vec<usize>,
}

impl Components {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn root(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets holding `a` and `b`. False if they were already one.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.root(a), self.root(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Examine edges by ascending weight (ties in edge order) and keep each one
/// that joins two components.
pub(super) async fn kruskal(st: &Stepper<Graphs>, graph: &Graph) -> StepResult {
    let mut edges = graph.edges().to_vec();
    edges.sort_by_key(|e| e.weight);
    let mut components = Components::new(graph.node_count());

    for edge in edges {
        let link = EdgeRef::new(edge.from, edge.to);
        st.step(move |s| s.examining = Some(link)).await?;
        if components.union(edge.from.0, edge.to.0) {
            st.step(move |s| {
                s.traversed.push(link);
                s.visit(link.from);
                s.visit(link.to);
            })
            .await?;
        }
    }
    Ok(())
}
