//! Unbalanced binary search tree stored in an index arena
//!
//! Nodes live in a `Vec` and link to each other by index, so parent pointers
//! need no shared ownership. Nodes are never removed.

use crate::bail_out_of_range;
use crate::error::Result;

/// Position of a node in the tree's arena
pub type NodeIndex = usize;

#[derive(Debug, Clone)]
struct BinaryNode<T> {
    data: T,
    parent: Option<NodeIndex>,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
}

impl<T> BinaryNode<T> {
    fn leaf(data: T, parent: Option<NodeIndex>) -> Self {
        Self {
            data,
            parent,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree; equal values are placed in the right subtree
#[derive(Debug, Clone)]
pub struct BinarySearchTree<T: Ord> {
    nodes: Vec<BinaryNode<T>>,
}

impl<T: Ord> BinarySearchTree<T> {
    /// A tree is never empty: it starts from its root value
    pub fn new(root: T) -> Self {
        Self {
            nodes: vec![BinaryNode::leaf(root, None)],
        }
    }

    pub fn root(&self) -> NodeIndex {
        0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// False for every tree, since the root is never removed
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn data(&self, node: NodeIndex) -> Option<&T> {
        self.nodes.get(node).map(|n| &n.data)
    }

    pub fn parent(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    pub fn left(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.nodes.get(node).and_then(|n| n.left)
    }

    pub fn right(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.nodes.get(node).and_then(|n| n.right)
    }

    /// Insert `value` as a new leaf and return its index
    pub fn insert(&mut self, value: T) -> NodeIndex {
        let index = self.nodes.len();
        let mut current = self.root();
        loop {
            let node = &self.nodes[current];
            let next = if value < node.data {
                node.left
            } else {
                node.right
            };
            match next {
                Some(child) => current = child,
                None => break,
            }
        }

        let goes_left = value < self.nodes[current].data;
        self.nodes.push(BinaryNode::leaf(value, Some(current)));
        if goes_left {
            self.nodes[current].left = Some(index);
        } else {
            self.nodes[current].right = Some(index);
        }
        index
    }

    /// First node holding `value` on the search path from the root
    pub fn search(&self, value: &T) -> Option<NodeIndex> {
        let mut current = Some(self.root());
        while let Some(index) = current {
            let node = &self.nodes[index];
            current = match value.cmp(&node.data) {
                std::cmp::Ordering::Equal => return Some(index),
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Leftmost node of the subtree at `from`, or of the whole tree
    pub fn minimum(&self, from: Option<NodeIndex>) -> NodeIndex {
        let mut current = from.unwrap_or_else(|| self.root());
        while let Some(left) = self.left(current) {
            current = left;
        }
        current
    }

    /// Rightmost node of the subtree at `from`, or of the whole tree
    pub fn maximum(&self, from: Option<NodeIndex>) -> NodeIndex {
        let mut current = from.unwrap_or_else(|| self.root());
        while let Some(right) = self.right(current) {
            current = right;
        }
        current
    }

    /// Next node in sorted order, `None` for the maximum
    pub fn successor(&self, node: NodeIndex) -> Option<NodeIndex> {
        if let Some(right) = self.right(node) {
            return Some(self.minimum(Some(right)));
        }
        let mut child = node;
        let mut parent = self.parent(node);
        while let Some(p) = parent {
            if self.right(p) != Some(child) {
                break;
            }
            child = p;
            parent = self.parent(p);
        }
        parent
    }

    /// Previous node in sorted order, `None` for the minimum
    pub fn predecessor(&self, node: NodeIndex) -> Option<NodeIndex> {
        if let Some(left) = self.left(node) {
            return Some(self.maximum(Some(left)));
        }
        let mut child = node;
        let mut parent = self.parent(node);
        while let Some(p) = parent {
            if self.left(p) != Some(child) {
                break;
            }
            child = p;
            parent = self.parent(p);
        }
        parent
    }

    /// Values in sorted order
    pub fn in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.nodes.len());
        let mut pending = Vec::new();
        let mut current = Some(self.root());
        while current.is_some() || !pending.is_empty() {
            while let Some(index) = current {
                pending.push(index);
                current = self.left(index);
            }
            if let Some(index) = pending.pop() {
                values.push(&self.nodes[index].data);
                current = self.right(index);
            }
        }
        values
    }

    /// Value at pre-order position `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        let mut pending = vec![self.root()];
        let mut position = 0;
        while let Some(node) = pending.pop() {
            if position == index {
                return Ok(&self.nodes[node].data);
            }
            position += 1;
            if let Some(right) = self.right(node) {
                pending.push(right);
            }
            if let Some(left) = self.left(node) {
                pending.push(left);
            }
        }
        bail_out_of_range!(index, self.len());
    }
}
