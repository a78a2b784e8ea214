//! Stack, queue, priority queue and deque.
//!
//! These operations are constant or logarithmic time and are not animated:
//! each one mutates the structure immediately and records what it did so a
//! renderer can caption the change. Nothing here goes through the engine.

use std::collections::{BinaryHeap, VecDeque};
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Contents every structure starts with and returns to on reset.
pub const DEFAULT_ITEMS: [u32; 4] = [40, 25, 60, 15];

/// Kind of the most recent operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Push,
    Pop,
    Peek,
    Enqueue,
    Dequeue,
    Front,
    Insert,
    ExtractMax,
    PushFront,
    PushBack,
    PopFront,
    PopBack,
    PeekFront,
    PeekBack,
}

impl ActionKind {
    fn removes(self) -> bool {
        matches!(
            self,
            ActionKind::Pop
                | ActionKind::Dequeue
                | ActionKind::ExtractMax
                | ActionKind::PopFront
                | ActionKind::PopBack
        )
    }
}

/// The most recent operation and the value it touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastAction {
    pub kind: ActionKind,
    pub value: u32,
}

impl fmt::Display for LastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.value;
        match self.kind {
            ActionKind::Push => write!(f, "Pushed {v}"),
            ActionKind::Pop => write!(f, "Popped {v}"),
            ActionKind::Peek => write!(f, "Peek: {v} (top element)"),
            ActionKind::Enqueue => write!(f, "Enqueued {v}"),
            ActionKind::Dequeue => write!(f, "Dequeued {v}"),
            ActionKind::Front => write!(f, "Front: {v}"),
            ActionKind::Insert => write!(f, "Inserted {v}"),
            ActionKind::ExtractMax => write!(f, "Extracted max {v}"),
            ActionKind::PushFront => write!(f, "Pushed {v} at front"),
            ActionKind::PushBack => write!(f, "Pushed {v} at back"),
            ActionKind::PopFront => write!(f, "Popped {v} from front"),
            ActionKind::PopBack => write!(f, "Popped {v} from back"),
            ActionKind::PeekFront => write!(f, "Front: {v}"),
            ActionKind::PeekBack => write!(f, "Back: {v}"),
        }
    }
}

/// Caption bookkeeping shared by every structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct Journal {
    last: Option<LastAction>,
    removed: Option<u32>,
}

impl Journal {
    /// Record `kind` on `value` and pass the value through.
    fn record(&mut self, kind: ActionKind, value: u32) -> u32 {
        trace!(?kind, value, "linear structure operation");
        self.last = Some(LastAction { kind, value });
        self.removed = kind.removes().then_some(value);
        value
    }
}

/// Last-in first-out stack; the top is the end of [`Stack::items`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    items: Vec<u32>,
    journal: Journal,
}

impl Stack {
    pub fn new(items: impl IntoIterator<Item = u32>) -> Self {
        Self {
            items: items.into_iter().collect(),
            journal: Journal::default(),
        }
    }

    pub fn push(&mut self, value: u32) {
        self.journal.record(ActionKind::Push, value);
        self.items.push(value);
    }

    /// Remove the top. `None`, recording nothing, when empty.
    pub fn pop(&mut self) -> Option<u32> {
        let value = self.items.pop()?;
        Some(self.journal.record(ActionKind::Pop, value))
    }

    pub fn peek(&mut self) -> Option<u32> {
        let value = *self.items.last()?;
        Some(self.journal.record(ActionKind::Peek, value))
    }

    pub fn items(&self) -> &[u32] {
        &self.items
    }

    pub fn last_action(&self) -> Option<LastAction> {
        self.journal.last
    }

    /// Value taken off by the most recent operation, if it removed one.
    pub fn removed(&self) -> Option<u32> {
        self.journal.removed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Stack {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS)
    }
}

/// First-in first-out queue; the front is the start of [`Queue::items`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    items: VecDeque<u32>,
    journal: Journal,
}

impl Queue {
    pub fn new(items: impl IntoIterator<Item = u32>) -> Self {
        Self {
            items: items.into_iter().collect(),
            journal: Journal::default(),
        }
    }

    pub fn enqueue(&mut self, value: u32) {
        self.journal.record(ActionKind::Enqueue, value);
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self) -> Option<u32> {
        let value = self.items.pop_front()?;
        Some(self.journal.record(ActionKind::Dequeue, value))
    }

    pub fn front(&mut self) -> Option<u32> {
        let value = *self.items.front()?;
        Some(self.journal.record(ActionKind::Front, value))
    }

    pub fn items(&self) -> Vec<u32> {
        self.items.iter().copied().collect()
    }

    pub fn last_action(&self) -> Option<LastAction> {
        self.journal.last
    }

    pub fn removed(&self) -> Option<u32> {
        self.journal.removed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS)
    }
}

/// Max-priority queue backed by a binary heap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityQueue {
    heap: BinaryHeap<u32>,
    journal: Journal,
}

impl PriorityQueue {
    pub fn new(items: impl IntoIterator<Item = u32>) -> Self {
        Self {
            heap: items.into_iter().collect(),
            journal: Journal::default(),
        }
    }

    pub fn insert(&mut self, value: u32) {
        self.journal.record(ActionKind::Insert, value);
        self.heap.push(value);
    }

    pub fn extract_max(&mut self) -> Option<u32> {
        let value = self.heap.pop()?;
        Some(self.journal.record(ActionKind::ExtractMax, value))
    }

    pub fn peek(&mut self) -> Option<u32> {
        let value = *self.heap.peek()?;
        Some(self.journal.record(ActionKind::Peek, value))
    }

    /// Contents highest priority first.
    pub fn items(&self) -> Vec<u32> {
        let mut items = self.heap.clone().into_sorted_vec();
        items.reverse();
        items
    }

    pub fn last_action(&self) -> Option<LastAction> {
        self.journal.last
    }

    pub fn removed(&self) -> Option<u32> {
        self.journal.removed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS)
    }
}

/// Double-ended queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deque {
    items: VecDeque<u32>,
    journal: Journal,
}

impl Deque {
    pub fn new(items: impl IntoIterator<Item = u32>) -> Self {
        Self {
            items: items.into_iter().collect(),
            journal: Journal::default(),
        }
    }

    pub fn push_front(&mut self, value: u32) {
        self.journal.record(ActionKind::PushFront, value);
        self.items.push_front(value);
    }

    pub fn push_back(&mut self, value: u32) {
        self.journal.record(ActionKind::PushBack, value);
        self.items.push_back(value);
    }

    pub fn pop_front(&mut self) -> Option<u32> {
        let value = self.items.pop_front()?;
        Some(self.journal.record(ActionKind::PopFront, value))
    }

    pub fn pop_back(&mut self) -> Option<u32> {
        let value = self.items.pop_back()?;
        Some(self.journal.record(ActionKind::PopBack, value))
    }

    pub fn peek_front(&mut self) -> Option<u32> {
        let value = *self.items.front()?;
        Some(self.journal.record(ActionKind::PeekFront, value))
    }

    pub fn peek_back(&mut self) -> Option<u32> {
        let value = *self.items.back()?;
        Some(self.journal.record(ActionKind::PeekBack, value))
    }

    pub fn items(&self) -> Vec<u32> {
        self.items.iter().copied().collect()
    }

    pub fn last_action(&self) -> Option<LastAction> {
        self.journal.last
    }

    pub fn removed(&self) -> Option<u32> {
        self.journal.removed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Deque {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS)
    }
}
