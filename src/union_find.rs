//! Disjoint-set structure over dense node ids
//!
//! A root is an element with no parent. `union` re-parents the first root
//! under the second with no rank policy; `find` compresses the visited path.
//! Neither changes which root `find` reports between two unions.

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Option<usize>>,
}

impl UnionFind {
    /// Create `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: vec![None; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `x`.
    ///
    /// Ids outside `[0, len)` are a caller bug and panic on indexing.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while let Some(parent) = self.parent[root] {
            root = parent;
        }

        // Path compression
        let mut node = x;
        while let Some(parent) = self.parent[node] {
            if parent != root {
                self.parent[node] = Some(root);
            }
            node = parent;
        }

        root
    }

    /// Merge the sets containing `x` and `y`
    pub fn union(&mut self, x: usize, y: usize) {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root != y_root {
            self.parent[x_root] = Some(y_root);
        }
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|parent| parent.is_none()).count()
    }
}
