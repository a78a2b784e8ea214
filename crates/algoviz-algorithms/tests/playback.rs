//! End-to-end playback through the controller.
//!
//! Every test runs on a paused clock, so step delays elapse in virtual time.

use std::time::Duration;

use algoviz_algorithms::graph::NodeId;
use algoviz_algorithms::{
    parse_values, BarMark, BstDataset, DatasetConfig, Graph, GraphProcedure, Graphs, InputError,
    SearchDataset, SearchOutcome, SearchProcedure, Searching, SortProcedure, SortState, Sorting,
    TreeProcedure, Trees,
};
use algoviz_engine::{Controller, Family, RunHandle, RunOutcome, RunPhase, Speed};

fn descending(n: u32) -> Vec<u32> {
    (1..=n).rev().collect()
}

/// Every run state a subscriber sees while `procedure` runs to completion.
async fn frames<F: Family>(dataset: F::Dataset, procedure: F::Procedure) -> Vec<F::State> {
    let ctl = Controller::<F>::new(dataset, Speed::MAX);
    let mut boards = ctl.subscribe();
    let run = ctl.start(procedure).unwrap();

    let mut seen = Vec::new();
    while boards.changed().await.is_ok() {
        let board = boards.borrow_and_update().clone();
        seen.push(board.state().clone());
        if !board.is_running() {
            break;
        }
    }
    assert_eq!(run.finished().await, RunOutcome::Completed);
    seen
}

/// Stop `run` partway and check the board stays exactly where it stopped.
async fn stop_freezes<F: Family>(ctl: &Controller<F>, run: RunHandle, after: Duration)
where
    F::State: PartialEq,
{
    tokio::time::sleep(after).await;
    assert!(ctl.stop(), "run ended before it could be stopped");
    let frozen = ctl.board();
    assert!(frozen.steps() > 0);

    assert_eq!(run.finished().await, RunOutcome::Cancelled);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(ctl.board().steps(), frozen.steps());
    assert_eq!(&ctl.state(), frozen.state());
}

#[tokio::test(start_paused = true)]
async fn bubble_sort_scenario() {
    let ctl = Controller::<Sorting>::new(vec![5, 3, 8, 1], Speed::DEFAULT);
    let outcome = ctl.run_named("Bubble Sort").await;

    assert_eq!(outcome, Some(RunOutcome::Completed));
    let state = ctl.state();
    assert_eq!(state.values, vec![1, 3, 5, 8]);
    assert_eq!(state.indices(BarMark::Sorted), vec![0, 1, 2, 3]);
    assert_eq!(ctl.dataset(), vec![5, 3, 8, 1]);
}

#[tokio::test(start_paused = true)]
async fn binary_search_scenario() {
    let data = SearchDataset::new(vec![11, 22, 25, 33, 34, 45, 55, 64], 45);
    let ctl = Controller::<Searching>::new(data, Speed::DEFAULT);

    assert_eq!(
        ctl.run(SearchProcedure::Binary).await,
        Some(RunOutcome::Completed)
    );
    assert_eq!(ctl.state().outcome, SearchOutcome::Found(5));
}

#[tokio::test(start_paused = true)]
async fn rejected_input_leaves_dataset_alone() {
    let ctl = Controller::<Sorting>::new(vec![4, 2], Speed::DEFAULT);
    let before = ctl.board();

    let err = parse_values("200, 5, 10", &DatasetConfig::default()).unwrap_err();
    assert_eq!(
        err,
        InputError::OutOfRange {
            value: 200,
            min: 1,
            max: 100
        }
    );

    assert_eq!(ctl.dataset(), before.dataset().clone());
    assert_eq!(ctl.state(), before.state().clone());
}

#[tokio::test(start_paused = true)]
async fn accepted_input_replaces_dataset_and_resets() {
    let ctl = Controller::<Sorting>::new(descending(30), Speed::MAX);
    ctl.start(SortProcedure::Bubble).unwrap();
    tokio::time::sleep(Duration::from_millis(45)).await;

    let values = parse_values("9 4 7", &DatasetConfig::default()).unwrap();
    ctl.set_dataset(values);

    assert!(!ctl.is_running());
    assert_eq!(ctl.dataset(), vec![9, 4, 7]);
    assert_eq!(ctl.state(), SortState::new(vec![9, 4, 7]));
}

#[tokio::test(start_paused = true)]
async fn preorder_scenario() {
    let data = BstDataset::new([50, 30, 70, 20, 40], 0).unwrap();
    let ctl = Controller::<Trees>::new(data, Speed::DEFAULT);

    ctl.run(TreeProcedure::Preorder).await;
    assert_eq!(ctl.state().order, vec![50, 30, 20, 40, 70]);
}

#[tokio::test(start_paused = true)]
async fn stop_then_restart_from_fresh_state() {
    let ctl = Controller::<Sorting>::new(descending(20), Speed::MAX);
    let first = ctl.start(SortProcedure::Bubble).unwrap();

    tokio::time::sleep(Duration::from_millis(55)).await;
    assert!(ctl.stop());
    assert!(!ctl.is_running());
    let frozen = ctl.board();
    assert!(frozen.steps() > 0);

    assert_eq!(first.finished().await, RunOutcome::Cancelled);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(ctl.state(), frozen.state().clone());
    assert_eq!(ctl.board().steps(), frozen.steps());

    let second = ctl.start(SortProcedure::Bubble).unwrap();
    assert_eq!(ctl.state(), SortState::new(descending(20)));
    assert_eq!(ctl.board().steps(), 0);
    assert_eq!(second.finished().await, RunOutcome::Completed);
    assert_eq!(ctl.state().values, (1..=20).collect::<Vec<_>>());
}

#[tokio::test(start_paused = true)]
async fn stopping_recursive_sorts_freezes_the_board() {
    for procedure in [SortProcedure::Merge, SortProcedure::Quick, SortProcedure::Heap] {
        let ctl = Controller::<Sorting>::new(descending(20), Speed::MAX);
        let run = ctl.start(procedure).unwrap();
        stop_freezes(&ctl, run, Duration::from_millis(55)).await;
        assert!(!ctl.state().is_sorted(), "{procedure}");
    }
}

#[tokio::test(start_paused = true)]
async fn stopping_a_deep_dfs_freezes_the_board() {
    let ctl = Controller::<Graphs>::new(Graph::sample(), Speed::MAX);
    let run = ctl.start(GraphProcedure::Dfs).unwrap();
    stop_freezes(&ctl, run, Duration::from_millis(55)).await;
    assert!(ctl.state().visited.len() < 6);
}

#[tokio::test(start_paused = true)]
async fn no_frame_examines_an_eliminated_index() {
    let data = SearchDataset::new(vec![11, 22, 25, 33, 34, 45, 55, 64], 45);
    for procedure in SearchProcedure::ALL {
        for target in [45, 11, 64, 30, 5, 99] {
            let dataset = data.clone().with_target(target);
            for state in frames::<Searching>(dataset, procedure).await {
                if let Some(index) = state.current {
                    assert!(
                        !state.eliminated.contains(&index),
                        "{procedure} target {target}: {index} is current and eliminated"
                    );
                }
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn no_frame_processes_a_settled_node() {
    for procedure in GraphProcedure::ALL {
        let seen = frames::<Graphs>(Graph::sample(), procedure).await;
        assert!(!seen.is_empty());
        for state in seen {
            if let Some(node) = state.current {
                assert!(
                    !state.visited.contains(&node),
                    "{procedure}: node {} is current and visited",
                    node.0
                );
            }
        }
    }
}

#[tokio::test(start_paused = true)]
async fn finished_board_serializes_for_a_renderer() {
    let data = SearchDataset::new(vec![11, 22, 25, 33, 34, 45, 55, 64], 45);
    let ctl = Controller::<Searching>::new(data, Speed::MAX);
    ctl.run(SearchProcedure::Binary).await;

    let json = serde_json::to_value(ctl.board()).unwrap();
    assert_eq!(json["phase"], "Idle");
    assert_eq!(json["outcome"], "Completed");
    assert_eq!(json["dataset"]["target"], 45);
    assert_eq!(json["state"]["probes"], serde_json::json!([3, 5]));
    assert_eq!(json["state"]["outcome"], serde_json::json!({ "Found": 5 }));
    assert!(json.get("token").is_none());
}

#[tokio::test(start_paused = true)]
async fn switching_algorithm_discards_the_run() {
    let ctl = Controller::<Sorting>::new(descending(16), Speed::MAX);
    let bubble = ctl.start(SortProcedure::Bubble).unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;

    ctl.algorithm_changed();
    assert_eq!(ctl.board().phase(), RunPhase::Idle);
    assert_eq!(ctl.state(), SortState::new(descending(16)));
    assert_eq!(bubble.finished().await, RunOutcome::Cancelled);

    let quick = ctl.start_named("quick-sort").unwrap();
    assert!(quick.run_id() > 1);
    assert_eq!(quick.finished().await, RunOutcome::Completed);
    assert!(ctl.state().is_sorted());
}

#[tokio::test(start_paused = true)]
async fn tree_edits_during_a_run() {
    let ctl = Controller::<Trees>::new(BstDataset::default(), Speed::MAX);
    let run = ctl.start(TreeProcedure::Inorder).unwrap();
    tokio::time::sleep(Duration::from_millis(25)).await;

    assert!(!ctl.edit_dataset(|data| data.insert(50)));
    assert!(ctl.is_running());

    assert!(ctl.edit_dataset(|data| data.insert(65)));
    assert!(!ctl.is_running());
    assert!(ctl.state().order.is_empty());
    assert_eq!(run.finished().await, RunOutcome::Cancelled);

    ctl.run(TreeProcedure::Inorder).await;
    assert_eq!(ctl.state().order, vec![20, 30, 40, 50, 60, 65, 70, 80]);
}

#[tokio::test(start_paused = true)]
async fn renderer_observes_a_graph_run() {
    let ctl = Controller::<Graphs>::new(Graph::sample(), Speed::MAX);
    let mut frames = ctl.subscribe();
    let run = ctl.start(GraphProcedure::Bfs).unwrap();

    let mut seen_current = Vec::new();
    while frames.changed().await.is_ok() {
        let board = frames.borrow_and_update().clone();
        if let Some(node) = board.state().current {
            if seen_current.last() != Some(&node) {
                seen_current.push(node);
            }
        }
        if !board.is_running() {
            break;
        }
    }

    assert_eq!(run.finished().await, RunOutcome::Completed);
    assert_eq!(seen_current.first(), Some(&NodeId(0)));
    assert_eq!(ctl.state().visited.len(), 6);
    assert_eq!(ctl.board().outcome(), Some(RunOutcome::Completed));
}

#[tokio::test(start_paused = true)]
async fn speed_changes_take_effect_mid_run() {
    let ctl = Controller::<Sorting>::new(descending(10), Speed::MIN);
    let run = ctl.start(SortProcedure::Insertion).unwrap();
    tokio::time::sleep(Duration::from_secs(2)).await;
    let slow_steps = ctl.board().steps();

    ctl.set_speed(Speed::MAX);
    tokio::time::sleep(Duration::from_secs(2)).await;
    let fast_steps = ctl.board().steps() - slow_steps;

    assert!(fast_steps > slow_steps * 3);
    ctl.stop();
    run.finished().await;
}
