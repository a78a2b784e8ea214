//! Algoviz Catalog
//!
//! Read-only listing of the visualizer categories, the algorithms in each,
//! and the reference content shown beside a run: a short introduction and
//! time/space complexity.
//!
//! # Usage
//!
//! ```ignore
//! for category in algoviz_catalog::categories() {
//!     println!("{}", category.title);
//!     for algorithm in category.algorithms {
//!         println!("  {} {}", algorithm.name, algorithm.complexity.average);
//!     }
//! }
//! let bubble = algoviz_catalog::find("bubble-sort").unwrap();
//! ```

use serde::Serialize;

/// Which visualizer a category feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryId {
    Sorting,
    Searching,
    Graph,
    Tree,
    StackQueue,
}

impl CategoryId {
    /// Identifier used in URLs and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            CategoryId::Sorting => "sorting",
            CategoryId::Searching => "searching",
            CategoryId::Graph => "graph",
            CategoryId::Tree => "tree",
            CategoryId::StackQueue => "stack-queue",
        }
    }

    /// Whether runs in this category are played back step by step.
    pub fn is_animated(self) -> bool {
        self != CategoryId::StackQueue
    }
}

/// Asymptotic costs of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub average: &'static str,
    pub worst: &'static str,
    pub best: &'static str,
    pub space: &'static str,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Algorithm {
    pub name: &'static str,
    pub category: CategoryId,
    pub introduction: &'static str,
    pub complexity: Complexity,
}

/// A group of algorithms sharing a visualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: &'static str,
    pub algorithms: &'static [Algorithm],
}

impl Category {
    /// Algorithm in this category by display name or slug.
    pub fn algorithm(&self, name: &str) -> Option<&'static Algorithm> {
        self.algorithms.iter().find(|a| matches_name(a.name, name))
    }
}

/// Every category in display order.
pub fn categories() -> &'static [Category] {
    &CATEGORIES
}

/// Category by id (`"sorting"`, `"stack-queue"`, ...) or title, ignoring case.
pub fn category(id: &str) -> Option<&'static Category> {
    let id = id.trim();
    CATEGORIES
        .iter()
        .find(|c| c.id.as_str().eq_ignore_ascii_case(id) || c.title.eq_ignore_ascii_case(id))
}

/// Algorithm in any category by display name or slug.
pub fn find(name: &str) -> Option<&'static Algorithm> {
    CATEGORIES.iter().find_map(|c| c.algorithm(name))
}

/// Lowercase, dash-separated form of a display name ("kruskals-mst").
pub fn slug(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '\'')
        .map(|c| if c == ' ' { '-' } else { c.to_ascii_lowercase() })
        .collect()
}

/// Whether `input` names `display`, by display name or by slug, ignoring
/// ASCII case and surrounding whitespace.
pub fn matches_name(display: &str, input: &str) -> bool {
    let input = input.trim();
    display.eq_ignore_ascii_case(input) || slug(display).eq_ignore_ascii_case(input)
}

const fn complexity(
    average: &'static str,
    worst: &'static str,
    best: &'static str,
    space: &'static str,
) -> Complexity {
    Complexity {
        average,
        worst,
        best,
        space,
    }
}

static CATEGORIES: [Category; 5] = [
    Category {
        id: CategoryId::Sorting,
        title: "Sorting",
        algorithms: &SORTING,
    },
    Category {
        id: CategoryId::Searching,
        title: "Searching",
        algorithms: &SEARCHING,
    },
    Category {
        id: CategoryId::Graph,
        title: "Graph",
        algorithms: &GRAPH,
    },
    Category {
        id: CategoryId::Tree,
        title: "Trees",
        algorithms: &TREE,
    },
    Category {
        id: CategoryId::StackQueue,
        title: "Stack & Queue",
        algorithms: &STACK_QUEUE,
    },
];

static SORTING: [Algorithm; 6] = [
    Algorithm {
        name: "Bubble Sort",
        category: CategoryId::Sorting,
        introduction: "Bubble Sort is a simple sorting algorithm that repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order. This process continues until the list is sorted.",
        complexity: complexity(
            "O(n²)",
            "O(n²) - when array is in reverse order",
            "O(n) - when array is already sorted",
            "O(1)",
        ),
    },
    Algorithm {
        name: "Selection Sort",
        category: CategoryId::Sorting,
        introduction: "Selection Sort divides the input into a sorted and unsorted region. It repeatedly finds the minimum element from the unsorted region and moves it to the sorted region.",
        complexity: complexity("O(n²)", "O(n²)", "O(n²)", "O(1)"),
    },
    Algorithm {
        name: "Insertion Sort",
        category: CategoryId::Sorting,
        introduction: "Insertion Sort builds the final sorted array one item at a time. It iterates through an input array, and for each element, finds the place it belongs and inserts it there.",
        complexity: complexity(
            "O(n²)",
            "O(n²) - when array is in reverse order",
            "O(n) - when array is already sorted",
            "O(1)",
        ),
    },
    Algorithm {
        name: "Merge Sort",
        category: CategoryId::Sorting,
        introduction: "Merge Sort is a divide-and-conquer algorithm that divides the array in half, recursively sorts each half, then merges the sorted halves back together.",
        complexity: complexity("O(n log n)", "O(n log n)", "O(n log n)", "O(n)"),
    },
    Algorithm {
        name: "Quick Sort",
        category: CategoryId::Sorting,
        introduction: "Quick Sort is a divide-and-conquer algorithm that picks a pivot element and partitions the array around it, then recursively sorts the sub-arrays.",
        complexity: complexity(
            "O(n log n)",
            "O(n²) - when pivot is always smallest/largest",
            "O(n log n) - when pivot divides array evenly",
            "O(log n)",
        ),
    },
    Algorithm {
        name: "Heap Sort",
        category: CategoryId::Sorting,
        introduction: "Heap Sort uses a binary heap data structure to sort elements. It builds a max heap, then repeatedly extracts the maximum element and places it at the end.",
        complexity: complexity("O(n log n)", "O(n log n)", "O(n log n)", "O(1)"),
    },
];

static SEARCHING: [Algorithm; 4] = [
    Algorithm {
        name: "Linear Search",
        category: CategoryId::Searching,
        introduction: "Linear Search sequentially checks each element in the list until the target element is found or the list ends. It works on both sorted and unsorted arrays.",
        complexity: complexity(
            "O(n)",
            "O(n) - element at end or not present",
            "O(1) - element at beginning",
            "O(1)",
        ),
    },
    Algorithm {
        name: "Binary Search",
        category: CategoryId::Searching,
        introduction: "Binary Search efficiently finds an element in a sorted array by repeatedly dividing the search space in half. It's much faster than linear search for large datasets.",
        complexity: complexity("O(log n)", "O(log n)", "O(1) - element at middle", "O(1)"),
    },
    Algorithm {
        name: "Jump Search",
        category: CategoryId::Searching,
        introduction: "Jump Search works on sorted arrays by jumping ahead by a fixed number of steps and then doing linear search. It's between linear and binary search in complexity.",
        complexity: complexity("O(√n)", "O(√n)", "O(1)", "O(1)"),
    },
    Algorithm {
        name: "Interpolation Search",
        category: CategoryId::Searching,
        introduction: "Interpolation Search improves binary search by calculating the likely position of the target based on the value being searched. Works best on uniformly distributed data.",
        complexity: complexity("O(log log n)", "O(n) - with non-uniform data", "O(1)", "O(1)"),
    },
];

static GRAPH: [Algorithm; 5] = [
    Algorithm {
        name: "BFS",
        category: CategoryId::Graph,
        introduction: "Breadth-First Search explores vertices in layers, visiting all neighbors at the current depth before moving to the next depth. Useful for finding shortest paths in unweighted graphs.",
        complexity: complexity("O(V + E)", "O(V + E)", "O(V + E)", "O(V)"),
    },
    Algorithm {
        name: "DFS",
        category: CategoryId::Graph,
        introduction: "Depth-First Search explores as far as possible along each branch before backtracking. Useful for cycle detection, topological sorting, and finding connected components.",
        complexity: complexity("O(V + E)", "O(V + E)", "O(V + E)", "O(V)"),
    },
    Algorithm {
        name: "Dijkstra",
        category: CategoryId::Graph,
        introduction: "Dijkstra's Algorithm finds the shortest path from a source vertex to all other vertices in a weighted graph with non-negative edge weights.",
        complexity: complexity(
            "O(V²)",
            "O(V²) - with adjacency matrix",
            "O((V + E) log V) - with priority queue",
            "O(V)",
        ),
    },
    Algorithm {
        name: "Bellman-Ford",
        category: CategoryId::Graph,
        introduction: "Bellman-Ford Algorithm finds shortest paths from a source vertex to all other vertices. Unlike Dijkstra, it can handle negative edge weights.",
        complexity: complexity("O(VE)", "O(VE)", "O(VE)", "O(V)"),
    },
    Algorithm {
        name: "Kruskal's MST",
        category: CategoryId::Graph,
        introduction: "Kruskal's Algorithm finds the Minimum Spanning Tree by sorting edges by weight and using Union-Find to avoid cycles. Greedy approach.",
        complexity: complexity("O(E log E)", "O(E log E)", "O(E log E)", "O(V + E)"),
    },
];

static TREE: [Algorithm; 4] = [
    Algorithm {
        name: "BST Search",
        category: CategoryId::Tree,
        introduction: "Binary Search Tree search starts at the root and compares the target with each node, going left when it is smaller and right when it is larger, until it finds the value or runs out of children.",
        complexity: complexity("O(log n)", "O(n) - when the tree is a chain", "O(1) - target at the root", "O(1)"),
    },
    Algorithm {
        name: "Inorder Traversal",
        category: CategoryId::Tree,
        introduction: "Inorder traversal visits the left subtree, then the node, then the right subtree. On a binary search tree it produces the values in ascending order.",
        complexity: complexity("O(n)", "O(n)", "O(n)", "O(h)"),
    },
    Algorithm {
        name: "Preorder Traversal",
        category: CategoryId::Tree,
        introduction: "Preorder traversal visits the node before either subtree. The resulting order can rebuild the same tree by inserting values one after another.",
        complexity: complexity("O(n)", "O(n)", "O(n)", "O(h)"),
    },
    Algorithm {
        name: "Postorder Traversal",
        category: CategoryId::Tree,
        introduction: "Postorder traversal visits both subtrees before the node itself, so every child is handled before its parent. It is the order used to free or evaluate a tree.",
        complexity: complexity("O(n)", "O(n)", "O(n)", "O(h)"),
    },
];

static STACK_QUEUE: [Algorithm; 4] = [
    Algorithm {
        name: "Stack Operations",
        category: CategoryId::StackQueue,
        introduction: "Stack is a Last-In-First-Out (LIFO) data structure. Elements are added and removed from the top. Common operations: push, pop, peek.",
        complexity: complexity("O(1)", "O(1) - for all operations", "O(1)", "O(n)"),
    },
    Algorithm {
        name: "Queue Operations",
        category: CategoryId::StackQueue,
        introduction: "Queue is a First-In-First-Out (FIFO) data structure. Elements are added at the rear and removed from the front. Common operations: enqueue, dequeue, peek.",
        complexity: complexity("O(1)", "O(1) - for all operations", "O(1)", "O(n)"),
    },
    Algorithm {
        name: "Priority Queue",
        category: CategoryId::StackQueue,
        introduction: "Priority Queue is an abstract data structure where elements have associated priorities. Higher priority elements are served before lower priority ones.",
        complexity: complexity(
            "O(log n)",
            "O(n) - insert, O(log n) - extract",
            "O(1)",
            "O(n)",
        ),
    },
    Algorithm {
        name: "Deque",
        category: CategoryId::StackQueue,
        introduction: "Double-ended Queue (Deque) allows insertion and deletion from both ends. Combines properties of both stacks and queues.",
        complexity: complexity("O(1)", "O(1) - for all operations", "O(1)", "O(n)"),
    },
];
