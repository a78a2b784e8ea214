//! Sequential searches: linear and jump.

use algoviz_engine::{StepResult, Stepper};

use super::Searching;

pub(super) async fn linear(
    st: &Stepper<Searching>,
    values: &[u32],
    target: u32,
) -> StepResult<Option<usize>> {
    for (index, &value) in values.iter().enumerate() {
        st.step(move |s| s.probe(index)).await?;
        if value == target {
            return Ok(Some(index));
        }
        st.apply(move |s| s.eliminate([index]))?;
    }
    Ok(None)
}

/// Block-scan for the block that could hold `target`, then scan it linearly.
pub(super) async fn jump(
    st: &Stepper<Searching>,
    values: &[u32],
    target: u32,
) -> StepResult<Option<usize>> {
    let block = (values.len() as f64).sqrt().floor().max(1.0) as usize;
    match find_block(st, values, target, block).await? {
        Some((start, end)) => scan_block(st, values, target, start, end).await,
        None => Ok(None),
    }
}

/// Probe the last element of each block until one is not below `target`.
///
/// Returns the half-open block bounds, or `None` once every block is below.
async fn find_block(
    st: &Stepper<Searching>,
    values: &[u32],
    target: u32,
    block: usize,
) -> StepResult<Option<(usize, usize)>> {
    let mut start = 0;
    while start < values.len() {
        let end = (start + block).min(values.len());
        let last = end - 1;
        st.step(move |s| s.probe(last)).await?;

        if values[last] >= target {
            return Ok(Some((start, end)));
        }
        st.apply(move |s| s.eliminate(start..end))?;
        start = end;
    }
    Ok(None)
}

async fn scan_block(
    st: &Stepper<Searching>,
    values: &[u32],
    target: u32,
    start: usize,
    end: usize,
) -> StepResult<Option<usize>> {
    for index in start..end {
        st.step(move |s| s.probe(index)).await?;
        if values[index] == target {
            return Ok(Some(index));
        }
        if values[index] > target {
            break;
        }
        st.apply(move |s| s.eliminate([index]))?;
    }
    Ok(None)
}
