//! Window-narrowing searches: binary and interpolation.

use algoviz_engine::{StepResult, Stepper};

use super::Searching;

/// Beats a probe stays highlighted before the window moves.
const PROBE_BEATS: u32 = 2;

pub(super) async fn binary(
    st: &Stepper<Searching>,
    values: &[u32],
    target: u32,
) -> StepResult<Option<usize>> {
    let (mut lo, mut end) = (0, values.len());
    while lo < end {
        let hi = end - 1;
        let mid = lo + (hi - lo) / 2;
        st.step_for(PROBE_BEATS, move |s| {
            s.window = Some((lo, hi));
            s.probe(mid);
        })
        .await?;

        if values[mid] == target {
            return Ok(Some(mid));
        }
        if values[mid] < target {
            st.step(move |s| s.eliminate(lo..=mid)).await?;
            lo = mid + 1;
        } else {
            st.step(move |s| s.eliminate(mid..=hi)).await?;
            end = mid;
        }
    }
    Ok(None)
}

pub(super) async fn interpolation(
    st: &Stepper<Searching>,
    values: &[u32],
    target: u32,
) -> StepResult<Option<usize>> {
    let (mut lo, mut end) = (0, values.len());
    while lo < end {
        let hi = end - 1;
        if target < values[lo] || target > values[hi] {
            break;
        }

        // A flat window has no slope to interpolate along; test its first
        // element directly.
        if values[lo] == values[hi] {
            st.step_for(PROBE_BEATS, move |s| {
                s.window = Some((lo, hi));
                s.probe(lo);
            })
            .await?;
            return Ok((values[lo] == target).then_some(lo));
        }

        let span = u64::from(values[hi] - values[lo]);
        let offset = u64::from(target - values[lo]) * (hi - lo) as u64 / span;
        let pos = lo + offset as usize;
        st.step_for(PROBE_BEATS, move |s| {
            s.window = Some((lo, hi));
            s.probe(pos);
        })
        .await?;

        if values[pos] == target {
            return Ok(Some(pos));
        }
        if values[pos] < target {
            st.step(move |s| s.eliminate(lo..=pos)).await?;
            lo = pos + 1;
        } else {
            st.step(move |s| s.eliminate(pos..=hi)).await?;
            end = pos;
        }
    }
    Ok(None)
}
