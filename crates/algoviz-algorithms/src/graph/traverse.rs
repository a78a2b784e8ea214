//! Unweighted traversals from the source node.

use std::collections::VecDeque;

use algoviz_engine::{StepResult, Stepper};
use futures::future::{BoxFuture, FutureExt};

use super::{EdgeRef, Graph, Graphs, NodeId};

/// Delay periods spent on each settled node.
pub(super) const VISIT_BEATS: u32 = 2;

pub(super) async fn bfs(st: &Stepper<Graphs>, graph: &Graph) -> StepResult {
    let adj = graph.adjacency();
    let source = graph.source();
    let mut seen = vec![false; graph.node_count()];
    seen[source.0] = true;
    let mut queue = VecDeque::from([source]);

    while let Some(node) = queue.pop_front() {
        let waiting: Vec<NodeId> = queue.iter().copied().collect();
        st.step_for(VISIT_BEATS, move |s| {
            s.focus(node);
            s.queue = waiting;
        })
        .await?;

        for &(next, _) in &adj[node.0] {
            if seen[next.0] {
                continue;
            }
            seen[next.0] = true;
            queue.push_back(next);
            let waiting: Vec<NodeId> = queue.iter().copied().collect();
            st.step(move |s| {
                s.queue = waiting;
                s.traversed.push(EdgeRef::new(node, next));
            })
            .await?;
        }
    }
    Ok(())
}

pub(super) async fn dfs(st: &Stepper<Graphs>, graph: &Graph) -> StepResult {
    let adj = graph.adjacency();
    let mut seen = vec![false; graph.node_count()];
    dfs_visit(st, &adj, &mut seen, graph.source()).await
}

fn dfs_visit<'a>(
    st: &'a Stepper<Graphs>,
    adj: &'a [Vec<(NodeId, u32)>],
    seen: &'a mut [bool],
    node: NodeId,
) -> BoxFuture<'a, StepResult> {
    async move {
        st.checkpoint()?;
        if seen[node.0] {
            return Ok(());
        }
        seen[node.0] = true;
        st.step_for(VISIT_BEATS, move |s| s.focus(node)).await?;

        for &(next, _) in &adj[node.0] {
            if seen[next.0] {
                continue;
            }
            st.step(move |s| s.traversed.push(EdgeRef::new(node, next)))
                .await?;
            dfs_visit(st, adj, &mut *seen, next).await?;
        }
        Ok(())
    }
    .boxed()
}
