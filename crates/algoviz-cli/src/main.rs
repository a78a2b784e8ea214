//! algoviz: play an algorithm run in the terminal.
//!
//! Usage:
//!   algoviz <category> <algorithm> [speed=N] [values...] [target=N] [--json]
//!
//! Examples:
//!   algoviz sorting "Bubble Sort" speed=80 5,3,8,1
//!   algoviz searching binary-search 11 22 25 33 34 45 55 64 target=45
//!   algoviz tree preorder-traversal 50,30,70,20,40
//!   algoviz stack-queue stack-operations push:5 pop peek

mod render;

use std::env;
use std::process;

use algoviz_algorithms::{
    parse_search_values, parse_values, BstDataset, DatasetConfig, DatasetGenerator, Deque, Graph,
    Graphs, PriorityQueue, Queue, Searching, Sorting, Stack, Trees,
};
use algoviz_catalog::{Algorithm, CategoryId};
use algoviz_engine::{Controller, EngineConfig, Family, FamilyBoard, RunOutcome, Speed};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type BoxError = Box<dyn std::error::Error>;

/// Parsed command line.
struct Invocation {
    algorithm: &'static Algorithm,
    speed: Option<Speed>,
    target: Option<u32>,
    values: Vec<String>,
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "algoviz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(invocation) = parse_args(&args) else {
        print_usage();
        process::exit(2);
    };

    let mut config = EngineConfig::from_env()?;
    if let Some(speed) = invocation.speed {
        config = config.with_speed(speed);
    }
    debug!(speed = config.speed.value(), seed = ?config.seed, "configuration loaded");

    let algorithm = invocation.algorithm;
    println!("{} ({})", algorithm.name, algorithm.complexity.average);
    println!("{}", algorithm.introduction);
    println!();

    let outcome = match algorithm.category {
        CategoryId::Sorting => play_sorting(&invocation, &config).await?,
        CategoryId::Searching => play_searching(&invocation, &config).await?,
        CategoryId::Graph => {
            let ctl = Controller::<Graphs>::with_config(Graph::sample(), &config);
            play(&ctl, algorithm.name, invocation.json, |b| render::graph_frame(b.state())).await
        }
        CategoryId::Tree => play_tree(&invocation, &config).await?,
        CategoryId::StackQueue => {
            run_linear(algorithm.name, &invocation.values)?;
            return Ok(());
        }
    };

    if let Some(outcome) = outcome {
        info!(?outcome, "done");
    }
    Ok(())
}

async fn play_sorting(
    invocation: &Invocation,
    config: &EngineConfig,
) -> Result<Option<RunOutcome>, BoxError> {
    let values = if invocation.values.is_empty() {
        DatasetGenerator::from_engine(config).sort_values()
    } else {
        parse_values(&invocation.values.join(" "), &DatasetConfig::default())?
    };
    let ctl = Controller::<Sorting>::with_config(values, config);
    Ok(play(&ctl, invocation.algorithm.name, invocation.json, |b| {
        render::sort_frame(b.state())
    })
    .await)
}

async fn play_searching(
    invocation: &Invocation,
    config: &EngineConfig,
) -> Result<Option<RunOutcome>, BoxError> {
    let mut dataset = if invocation.values.is_empty() {
        DatasetGenerator::from_engine(config).search_dataset()
    } else {
        let target = invocation.target.unwrap_or_default();
        parse_search_values(&invocation.values.join(" "), target, &DatasetConfig::default())?
    };
    if let Some(target) = invocation.target {
        dataset = dataset.with_target(target);
    }
    println!("target: {}", dataset.target());

    let ctl = Controller::<Searching>::with_config(dataset, config);
    Ok(play(&ctl, invocation.algorithm.name, invocation.json, |b| {
        render::search_frame(b.dataset(), b.state())
    })
    .await)
}

async fn play_tree(
    invocation: &Invocation,
    config: &EngineConfig,
) -> Result<Option<RunOutcome>, BoxError> {
    let mut dataset = if invocation.values.is_empty() {
        BstDataset::default()
    } else {
        let values = parse_values(&invocation.values.join(" "), &DatasetConfig::default())?;
        BstDataset::new(values, 0).unwrap_or_default()
    };
    if let Some(target) = invocation.target {
        dataset.set_target(target);
    }

    let ctl = Controller::<Trees>::with_config(dataset, config);
    Ok(play(&ctl, invocation.algorithm.name, invocation.json, |b| {
        render::tree_frame(b.state())
    })
    .await)
}

/// Start `name` and print a frame whenever the board changes, until the run
/// ends or Ctrl-C stops it.
async fn play<F>(
    ctl: &Controller<F>,
    name: &str,
    json: bool,
    describe: impl Fn(&FamilyBoard<F>) -> String,
) -> Option<RunOutcome>
where
    F: Family,
    FamilyBoard<F>: Serialize,
{
    let mut frames = ctl.subscribe();
    let Some(run) = ctl.start_named(name) else {
        warn!(family = F::NAME, name, "run was not started");
        return None;
    };

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut last = String::new();

    loop {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let board = frames.borrow_and_update().clone();
                if json {
                    match serde_json::to_string(&board) {
                        Ok(line) => println!("{line}"),
                        Err(e) => warn!(error = %e, "frame not serializable"),
                    }
                } else {
                    let line = describe(&board);
                    if line != last {
                        println!("{:>5}  {line}", board.steps());
                        last = line;
                    }
                }
                if !board.is_running() {
                    break;
                }
            }
            _ = &mut ctrl_c => {
                ctl.stop();
                println!("stopped: {}", describe(&ctl.board()));
                break;
            }
        }
    }

    Some(run.finished().await)
}

/// Apply operations like `push:5`, `pop` or `peek-back` to a linear structure,
/// printing its contents after each.
fn run_linear(name: &str, ops: &[String]) -> Result<(), BoxError> {
    let mut stack = Stack::default();
    let mut queue = Queue::default();
    let mut pq = PriorityQueue::default();
    let mut deque = Deque::default();

    for op in ops {
        let (verb, arg) = match op.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg.trim().parse::<u32>()?)),
            None => (op.as_str(), None),
        };

        let applied = match (name, verb, arg) {
            ("Stack Operations", "push", Some(v)) => {
                stack.push(v);
                true
            }
            ("Stack Operations", "pop", None) => stack.pop().is_some(),
            ("Stack Operations", "peek", None) => stack.peek().is_some(),
            ("Queue Operations", "enqueue", Some(v)) => {
                queue.enqueue(v);
                true
            }
            ("Queue Operations", "dequeue", None) => queue.dequeue().is_some(),
            ("Queue Operations", "front", None) => queue.front().is_some(),
            ("Priority Queue", "insert", Some(v)) => {
                pq.insert(v);
                true
            }
            ("Priority Queue", "extract", None) => pq.extract_max().is_some(),
            ("Priority Queue", "peek", None) => pq.peek().is_some(),
            ("Deque", "push-front", Some(v)) => {
                deque.push_front(v);
                true
            }
            ("Deque", "push-back", Some(v)) => {
                deque.push_back(v);
                true
            }
            ("Deque", "pop-front", None) => deque.pop_front().is_some(),
            ("Deque", "pop-back", None) => deque.pop_back().is_some(),
            ("Deque", "peek-front", None) => deque.peek_front().is_some(),
            ("Deque", "peek-back", None) => deque.peek_back().is_some(),
            _ => {
                warn!(op = %op, structure = name, "unsupported operation");
                continue;
            }
        };

        let (contents, last) = match name {
            "Stack Operations" => (stack.items().to_vec(), stack.last_action()),
            "Queue Operations" => (queue.items(), queue.last_action()),
            "Priority Queue" => (pq.items(), pq.last_action()),
            _ => (deque.items(), deque.last_action()),
        };
        match last.filter(|_| applied) {
            Some(action) => println!("{contents:?}  {action}"),
            None => println!("{contents:?}  (empty)"),
        }
    }
    Ok(())
}

fn parse_args(args: &[String]) -> Option<Invocation> {
    let category = algoviz_catalog::category(args.first()?)?;
    let algorithm = category.algorithm(args.get(1)?)?;

    let mut invocation = Invocation {
        algorithm,
        speed: None,
        target: None,
        values: Vec::new(),
        json: false,
    };
    for arg in &args[2..] {
        if arg == "--json" {
            invocation.json = true;
        } else if let Some(speed) = arg.strip_prefix("speed=") {
            invocation.speed = Some(Speed::new(speed.parse().ok()?));
        } else if let Some(target) = arg.strip_prefix("target=") {
            invocation.target = Some(target.parse().ok()?);
        } else {
            invocation.values.push(arg.clone());
        }
    }
    Some(invocation)
}

fn print_usage() {
    eprintln!("algoviz - watch algorithms run step by step");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  algoviz <category> <algorithm> [speed=N] [values...] [target=N] [--json]");
    eprintln!();
    eprintln!("Algorithms:");
    for category in algoviz_catalog::categories() {
        eprintln!("  {} ({})", category.title, category.id.as_str());
        for algorithm in category.algorithms {
            eprintln!(
                "    {:<22} {}",
                algoviz_catalog::slug(algorithm.name),
                algorithm.complexity.average
            );
        }
    }
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ALGOVIZ_SPEED  Initial speed 1-100 (default: 50)");
    eprintln!("  ALGOVIZ_SEED   Seed for generated datasets");
    eprintln!("  RUST_LOG       Log filter (default: algoviz=info)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn speed_then_values() {
        let inv =
            parse_args(&args(&["sorting", "Bubble Sort", "speed=80", "5,3,8,1"])).unwrap();
        assert_eq!(inv.algorithm.name, "Bubble Sort");
        assert_eq!(inv.speed, Some(Speed::new(80)));
        assert_eq!(inv.values, vec!["5,3,8,1"]);
        assert!(!inv.json);
    }

    #[test]
    fn leading_number_is_a_value() {
        let inv = parse_args(&args(&[
            "searching",
            "binary-search",
            "11",
            "22",
            "25",
            "33",
            "34",
            "45",
            "55",
            "64",
            "target=45",
        ]))
        .unwrap();
        assert_eq!(inv.speed, None);
        assert_eq!(inv.values.len(), 8);
        assert_eq!(inv.values[0], "11");
        assert_eq!(inv.target, Some(45));
    }

    #[test]
    fn target_and_json_flags() {
        let inv =
            parse_args(&args(&["searching", "binary-search", "1,2,3", "target=2", "--json"]))
                .unwrap();
        assert_eq!(inv.speed, None);
        assert_eq!(inv.target, Some(2));
        assert_eq!(inv.values, vec!["1,2,3"]);
        assert!(inv.json);
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert!(parse_args(&args(&["sorting", "bogo-sort"])).is_none());
        assert!(parse_args(&args(&["heaps", "heap-sort"])).is_none());
        assert!(parse_args(&args(&["sorting"])).is_none());
        assert!(parse_args(&args(&["searching", "linear-search", "target=x"])).is_none());
        assert!(parse_args(&args(&["sorting", "heap-sort", "speed=fast"])).is_none());
    }
}
