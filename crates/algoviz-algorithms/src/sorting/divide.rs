//! Recursive sorts: merge, quick, heap.
//!
//! Every recursive entry re-checks the token, and a cancelled step unwinds the
//! whole recursion through `?` rather than returning a partial result.

use algoviz_engine::{StepResult, Stepper};
use futures::future::{BoxFuture, FutureExt};

use super::{BarMark, Sorting};

pub(super) async fn merge_sort(st: &Stepper<Sorting>, values: &mut [u32]) -> StepResult {
    if values.is_empty() {
        return Ok(());
    }
    let last = values.len() - 1;
    merge_range(st, values, 0, last).await
}

fn merge_range<'a>(
    st: &'a Stepper<Sorting>,
    values: &'a mut [u32],
    lo: usize,
    hi: usize,
) -> BoxFuture<'a, StepResult> {
    async move {
        st.checkpoint()?;
        if lo >= hi {
            return Ok(());
        }
        let mid = lo + (hi - lo) / 2;
        merge_range(st, values, lo, mid).await?;
        merge_range(st, values, mid + 1, hi).await?;
        merge(st, values, lo, mid, hi).await
    }
    .boxed()
}

async fn merge(
    st: &Stepper<Sorting>,
    values: &mut [u32],
    lo: usize,
    mid: usize,
    hi: usize,
) -> StepResult {
    let left = values[lo..=mid].to_vec();
    let right = values[mid + 1..=hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        let (a, b) = (lo + i, mid + 1 + j);
        st.step(move |s| s.highlight(&[a, b], BarMark::Comparing))
            .await?;

        let value = if left[i] <= right[j] {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        values[k] = value;
        st.step(move |s| {
            s.values[k] = value;
            s.highlight(&[k], BarMark::Swapping);
        })
        .await?;
        st.apply(|s| s.release(BarMark::Swapping))?;
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        values[k] = value;
        st.step(move |s| s.values[k] = value).await?;
        k += 1;
    }

    st.apply(|s| s.release(BarMark::Comparing))
}

pub(super) async fn quick_sort(st: &Stepper<Sorting>, values: &mut [u32]) -> StepResult {
    if values.is_empty() {
        return Ok(());
    }
    let last = values.len() - 1;
    quick_range(st, values, 0, last).await
}

fn quick_range<'a>(
    st: &'a Stepper<Sorting>,
    values: &'a mut [u32],
    lo: usize,
    hi: usize,
) -> BoxFuture<'a, StepResult> {
    async move {
        st.checkpoint()?;
        if lo >= hi {
            return Ok(());
        }
        let pivot = partition(st, values, lo, hi).await?;
        st.apply(move |s| s.settle(pivot))?;

        if pivot > lo {
            quick_range(st, values, lo, pivot - 1).await?;
        }
        quick_range(st, values, pivot + 1, hi).await
    }
    .boxed()
}

/// Lomuto partition around `values[hi]`; returns the pivot's final index.
async fn partition(
    st: &Stepper<Sorting>,
    values: &mut [u32],
    lo: usize,
    hi: usize,
) -> StepResult<usize> {
    let pivot = values[hi];
    let mut store = lo;

    for j in lo..hi {
        st.step(move |s| s.highlight(&[j, hi], BarMark::Comparing))
            .await?;

        if values[j] < pivot {
            let at = store;
            st.step(move |s| s.highlight(&[at, j], BarMark::Swapping))
                .await?;
            values.swap(at, j);
            st.apply(move |s| s.swap(at, j))?;
            store += 1;
        }
        st.apply(|s| s.release(BarMark::Comparing))?;
    }

    st.step(move |s| s.highlight(&[store, hi], BarMark::Swapping))
        .await?;
    values.swap(store, hi);
    st.apply(move |s| s.swap(store, hi))?;
    Ok(store)
}

pub(super) async fn heap_sort(st: &Stepper<Sorting>, values: &mut [u32]) -> StepResult {
    let n = values.len();
    for root in (0..n / 2).rev() {
        st.checkpoint()?;
        heapify(st, values, n, root).await?;
    }

    for end in (1..n).rev() {
        st.step(move |s| s.highlight(&[0, end], BarMark::Swapping))
            .await?;
        values.swap(0, end);
        st.apply(move |s| {
            s.swap(0, end);
            s.settle(end);
        })?;
        heapify(st, values, end, 0).await?;
    }
    Ok(())
}

/// Sift `values[root]` down within the heap `values[..size]`.
fn heapify<'a>(
    st: &'a Stepper<Sorting>,
    values: &'a mut [u32],
    size: usize,
    root: usize,
) -> BoxFuture<'a, StepResult> {
    async move {
        st.checkpoint()?;
        let mut largest = root;

        for child in [2 * root + 1, 2 * root + 2] {
            if child < size {
                let current = largest;
                st.step(move |s| s.highlight(&[current, child], BarMark::Comparing))
                    .await?;
                if values[child] > values[largest] {
                    largest = child;
                }
            }
        }

        if largest != root {
            st.step(move |s| s.highlight(&[root, largest], BarMark::Swapping))
                .await?;
            values.swap(root, largest);
            st.apply(move |s| s.swap(root, largest))?;
            heapify(st, values, size, largest).await?;
        }
        st.apply(|s| s.release(BarMark::Comparing))
    }
    .boxed()
}
