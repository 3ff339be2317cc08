//! Union-Find (disjoint set) over dense vertex indices

use super::common::VertexIdx;

/// Union-Find data structure
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<VertexIdx>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Every element starts as its own singleton set
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    /// Root of the set containing `i`
    pub fn find(&mut self, i: VertexIdx) -> VertexIdx {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut curr = i;
        while self.parent[curr] != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Merge the sets containing `i` and `j`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, i: VertexIdx, j: VertexIdx) -> bool {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i == root_j {
            return false;
        }

        if self.rank[root_i] < self.rank[root_j] {
            self.parent[root_i] = root_j;
        } else if self.rank[root_i] > self.rank[root_j] {
            self.parent[root_j] = root_i;
        } else {
            self.parent[root_j] = root_i;
            self.rank[root_i] += 1;
        }
        true
    }

    pub fn connected(&mut self, i: VertexIdx, j: VertexIdx) -> bool {
        self.find(i) == self.find(j)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
