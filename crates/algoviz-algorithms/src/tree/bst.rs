//! Binary search tree rebuilt from a value set.

use serde::{Deserialize, Serialize};

/// One node of a [`Bst`]; children are indices into the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BstNode {
    pub value: u32,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Where a renderer should place a node: its depth and its slot among the
/// `2^depth` positions of that level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodePlacement {
    pub value: u32,
    pub depth: usize,
    pub slot: usize,
}

/// A binary search tree built by inserting values in order. Duplicates are
/// ignored. The root, when present, is node 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bst {
    nodes: Vec<BstNode>,
}

impl Bst {
    pub fn from_values(values: &[u32]) -> Self {
        let mut tree = Self::default();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    fn insert(&mut self, value: u32) {
        let fresh = self.nodes.len();
        let mut cursor = match self.root() {
            Some(root) => root,
            None => {
                self.nodes.push(BstNode { value, left: None, right: None });
                return;
            }
        };
        loop {
            let node = &mut self.nodes[cursor];
            let child = if value < node.value {
                &mut node.left
            } else if value > node.value {
                &mut node.right
            } else {
                return;
            };
            match *child {
                Some(next) => cursor = next,
                None => {
                    *child = Some(fresh);
                    self.nodes.push(BstNode { value, left: None, right: None });
                    return;
                }
            }
        }
    }

    pub fn root(&self) -> Option<usize> {
        (!self.nodes.is_empty()).then_some(0)
    }

    /// Node by arena index. Indices come from [`Bst::root`] and child links;
    /// any other index yields `None`.
    pub fn node(&self, id: usize) -> Option<&BstNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, value: u32) -> bool {
        let mut cursor = self.root();
        while let Some(id) = cursor {
            let node = &self.nodes[id];
            cursor = match value.cmp(&node.value) {
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.layout().iter().map(|p| p.depth + 1).max().unwrap_or(0)
    }

    /// Placement of every node, in preorder.
    pub fn layout(&self) -> Vec<NodePlacement> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, usize, usize)> =
            self.root().map(|root| (root, 0, 0)).into_iter().collect();
        while let Some((id, depth, slot)) = stack.pop() {
            let node = &self.nodes[id];
            out.push(NodePlacement {
                value: node.value,
                depth,
                slot,
            });
            if let Some(right) = node.right {
                stack.push((right, depth + 1, slot * 2 + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, depth + 1, slot * 2));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_shapes_the_tree() {
        let tree = Bst::from_values(&[50, 30, 70, 20, 40]);
        let root = tree.node(0).unwrap();
        assert_eq!(root.value, 50);
        assert_eq!(tree.node(root.left.unwrap()).unwrap().value, 30);
        assert_eq!(tree.node(root.right.unwrap()).unwrap().value, 70);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn unknown_index_has_no_node() {
        let tree = Bst::from_values(&[50, 30]);
        assert!(tree.node(1).is_some());
        assert!(tree.node(2).is_none());
        assert!(Bst::from_values(&[]).node(0).is_none());
    }

    #[test]
    fn duplicates_are_ignored() {
        let tree = Bst::from_values(&[5, 5, 3, 5, 3]);
        assert_eq!(tree.len(), 2);
        assert!(tree.contains(3));
        assert!(!tree.contains(4));
    }

    #[test]
    fn empty_tree() {
        let tree = Bst::from_values(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
        assert_eq!(tree.height(), 0);
        assert!(tree.layout().is_empty());
    }

    #[test]
    fn layout_assigns_level_slots() {
        let tree = Bst::from_values(&[50, 30, 70, 20, 40, 60, 80]);
        let placed: Vec<(u32, usize, usize)> = tree
            .layout()
            .into_iter()
            .map(|p| (p.value, p.depth, p.slot))
            .collect();
        assert_eq!(
            placed,
            vec![
                (50, 0, 0),
                (30, 1, 0),
                (20, 2, 0),
                (40, 2, 1),
                (70, 1, 1),
                (60, 2, 2),
                (80, 2, 3),
            ]
        );
    }
}
