//! Disjoint-set (union-find) backing Kruskal's cycle detection.
//!
//! `find` compresses the traversed path onto the root and `union` attaches the
//! lower-rank root beneath the higher-rank one, keeping both operations near
//! `O(1)` amortised. A fresh instance is built per Kruskal run.

/// Partition of `0..n` into disjoint sets.
///
/// # Examples
/// ```
/// use arbor_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(3);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert_eq!(sets.find(0), sets.find(1));
/// assert_eq!(sets.components(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    /// Creates `n` singleton sets, each its own root with rank 0.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements in the partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the partition has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    #[must_use]
    #[rustfmt::skip]
    pub const fn components(&self) -> usize { self.components }

    /// Returns the representative of `node`'s set, pointing every node on the
    /// traversed path directly at it.
    ///
    /// # Panics
    /// Panics when `node >= self.len()`.
    pub fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != root {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `false` when both were already in the same set, which Kruskal's
    /// engine reads as "this edge would close a cycle". On equal ranks the
    /// root of `left` is kept.
    ///
    /// # Panics
    /// Panics when either element is out of range.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let mut left = self.find(left);
        let mut right = self.find(right);
        if left == right {
            return false;
        }
        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        if left_rank < right_rank {
            std::mem::swap(&mut left, &mut right);
        }
        self.parent[right] = left;
        if left_rank == right_rank {
            self.rank[left] = left_rank.saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }
}
