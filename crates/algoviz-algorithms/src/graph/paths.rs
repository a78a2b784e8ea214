//! Single-source shortest paths.

use algoviz_engine::{StepResult, Stepper};

use super::traverse::VISIT_BEATS;
use super::{EdgeRef, Graph, Graphs, NodeId};

/// Settle the closest unsettled node until none is reachable. Ties go to the
/// lowest node id.
pub(super) async fn dijkstra(st: &Stepper<Graphs>, graph: &Graph) -> StepResult {
    let adj = graph.adjacency();
    let source = graph.source();
    let mut dist: Vec<Option<u32>> = vec![None; graph.node_count()];
    let mut settled = vec![false; graph.node_count()];
    dist[source.0] = Some(0);
    st.apply(|s| s.distances[source.0] = Some(0))?;

    loop {
        st.checkpoint()?;
        let closest = dist
            .iter()
            .enumerate()
            .filter(|(i, _)| !settled[*i])
            .filter_map(|(i, d)| d.map(|d| (i, d)))
            .fold(None, |best: Option<(usize, u32)>, (i, d)| match best {
                Some((_, bd)) if bd <= d => best,
                _ => Some((i, d)),
            });
        let Some((u, du)) = closest else {
            break;
        };
        let node = NodeId(u);

        st.step_for(VISIT_BEATS, move |s| s.focus(node)).await?;
        settled[u] = true;

        for &(next, weight) in &adj[u] {
            // A path longer than u32::MAX never improves a distance.
            let Some(candidate) = du.checked_add(weight) else {
                continue;
            };
            if dist[next.0].is_some_and(|d| d <= candidate) {
                continue;
            }
            dist[next.0] = Some(candidate);
            st.step(move |s| {
                s.distances[next.0] = Some(candidate);
                s.traversed.push(EdgeRef::new(node, next));
            })
            .await?;
        }
    }
    Ok(())
}

/// Relax every edge in both directions, round after round, until a round
/// changes nothing or `n - 1` rounds have run.
pub(super) async fn bellman_ford(st: &Stepper<Graphs>, graph: &Graph) -> StepResult {
    let source = graph.source();
    let mut dist: Vec<Option<u32>> = vec![None; graph.node_count()];
    dist[source.0] = Some(0);
    st.apply(|s| {
        s.distances[source.0] = Some(0);
        s.visit(source);
    })?;

    for _ in 1..graph.node_count() {
        let mut changed = false;
        for edge in graph.edges() {
            for (from, to) in [(edge.from, edge.to), (edge.to, edge.from)] {
                st.checkpoint()?;
                let Some(d_from) = dist[from.0] else {
                    continue;
                };
                st.step(move |s| s.examining = Some(EdgeRef::new(from, to)))
                    .await?;

                let Some(candidate) = d_from.checked_add(edge.weight) else {
                    continue;
                };
                if dist[to.0].is_some_and(|d| d <= candidate) {
                    continue;
                }
                dist[to.0] = Some(candidate);
                changed = true;
                st.step(move |s| {
                    s.distances[to.0] = Some(candidate);
                    s.traversed.push(EdgeRef::new(from, to));
                    s.visit(to);
                })
                .await?;
            }
        }
        if !changed {
            break;
        }
    }
    Ok(())
}
