//! Quadratic sorts: bubble, selection, insertion.

use algoviz_engine::{StepResult, Stepper};

use super::{BarMark, SortState, Sorting};

pub(super) async fn bubble(st: &Stepper<Sorting>, values: &mut [u32]) -> StepResult {
    let n = values.len();
    for pass in 0..n.saturating_sub(1) {
        for j in 0..n - pass - 1 {
            st.step(move |s| s.highlight(&[j, j + 1], BarMark::Comparing))
                .await?;

            if values[j] > values[j + 1] {
                st.step(move |s| s.highlight(&[j, j + 1], BarMark::Swapping))
                    .await?;
                values.swap(j, j + 1);
                st.apply(move |s| s.swap(j, j + 1))?;
            }
            st.apply(SortState::release_transient)?;
        }
        st.apply(move |s| s.settle(n - 1 - pass))?;
    }
    Ok(())
}

pub(super) async fn selection(st: &Stepper<Sorting>, values: &mut [u32]) -> StepResult {
    let n = values.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            let probe = min;
            st.step(move |s| s.highlight(&[probe, j], BarMark::Comparing))
                .await?;
            if values[j] < values[min] {
                min = j;
            }
        }

        if min != i {
            st.step(move |s| s.highlight(&[i, min], BarMark::Swapping))
                .await?;
            values.swap(i, min);
            st.apply(move |s| s.swap(i, min))?;
        }
        st.apply(move |s| {
            s.release_transient();
            s.settle(i);
        })?;
    }
    Ok(())
}

pub(super) async fn insertion(st: &Stepper<Sorting>, values: &mut [u32]) -> StepResult {
    for i in 1..values.len() {
        let key = values[i];
        let mut hole = i;

        st.step(move |s| s.highlight(&[i], BarMark::Comparing))
            .await?;

        while hole > 0 && values[hole - 1] > key {
            let from = hole - 1;
            st.step(move |s| s.highlight(&[from, hole], BarMark::Swapping))
                .await?;
            values[hole] = values[from];
            let shifted = values[from];
            st.apply(move |s| s.values[hole] = shifted)?;
            hole -= 1;
        }

        values[hole] = key;
        st.apply(move |s| {
            s.values[hole] = key;
            s.release_transient();
        })?;
    }
    Ok(())
}
