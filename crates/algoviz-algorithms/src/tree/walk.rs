//! Root-to-leaf search and the depth-first traversals.

use algoviz_engine::{StepResult, Stepper};
use futures::future::{BoxFuture, FutureExt};

use super::{Bst, Lookup, Trees};

/// Delay periods spent on each visited node.
const VISIT_BEATS: u32 = 2;

/// Where a traversal emits the current node relative to its subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Order {
    Pre,
    In,
    Post,
}

pub(super) async fn search(st: &Stepper<Trees>, tree: &Bst, target: u32) -> StepResult {
    let mut cursor = tree.root();
    while let Some(&node) = cursor.and_then(|id| tree.node(id)) {
        st.step_for(VISIT_BEATS, move |s| s.highlighted.push(node.value))
            .await?;

        cursor = match target.cmp(&node.value) {
            std::cmp::Ordering::Equal => {
                return st.apply(move |s| s.lookup = Lookup::Found(target));
            }
            std::cmp::Ordering::Less => node.left,
            std::cmp::Ordering::Greater => node.right,
        };
    }
    st.apply(move |s| s.lookup = Lookup::Missing(target))
}

pub(super) fn traverse<'a>(
    st: &'a Stepper<Trees>,
    tree: &'a Bst,
    node: Option<usize>,
    order: Order,
) -> BoxFuture<'a, StepResult> {
    async move {
        st.checkpoint()?;
        let Some(&current) = node.and_then(|id| tree.node(id)) else {
            return Ok(());
        };

        if order == Order::Pre {
            visit(st, current.value).await?;
        }
        traverse(st, tree, current.left, order).await?;
        if order == Order::In {
            visit(st, current.value).await?;
        }
        traverse(st, tree, current.right, order).await?;
        if order == Order::Post {
            visit(st, current.value).await?;
        }
        Ok(())
    }
    .boxed()
}

async fn visit(st: &Stepper<Trees>, value: u32) -> StepResult {
    st.step_for(VISIT_BEATS, move |s| {
        s.highlighted.push(value);
        s.order.push(value);
    })
    .await
}
