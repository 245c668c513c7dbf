/// Disjoint-set forest over cell indices, with union by height and path compression.
///
/// Each slot holds either the index of its parent (non-negative) or, for a root,
/// `-(height + 1)`. A fresh singleton is therefore `-1`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    rank_or_parent: Vec<isize>,
}

impl UnionFind {
    /// Creates `size` singleton sets.
    pub fn new(size: usize) -> Self {
        UnionFind {
            rank_or_parent: vec![-1; size],
        }
    }

    pub fn len(&self) -> usize {
        self.rank_or_parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rank_or_parent.is_empty()
    }

    fn is_root(&self, x: usize) -> bool {
        self.rank_or_parent[x] < 0
    }

    /// Returns the representative of `x`'s set without touching the forest.
    pub fn find_root_readonly(&self, x: usize) -> usize {
        let mut node = x;
        while !self.is_root(node) {
            node = self.rank_or_parent[node] as usize;
        }
        node
    }

    /// Returns the representative of `x`'s set, repointing every node on the way
    /// directly at the root.
    pub fn find_root_and_compress(&mut self, x: usize) -> usize {
        if self.is_root(x) {
            return x;
        }
        let root = self.find_root_and_compress(self.rank_or_parent[x] as usize);
        self.rank_or_parent[x] = root as isize;
        root
    }

    /// Merges the sets rooted at `root1` and `root2`.
    ///
    /// Both arguments must be roots. The taller tree absorbs the shorter one; on a tie
    /// `root1` becomes the new root and grows by one.
    pub fn union_roots(&mut self, root1: usize, root2: usize) {
        debug_assert!(self.is_root(root1) && self.is_root(root2));
        if root1 == root2 {
            return;
        }
        if self.rank_or_parent[root2] < self.rank_or_parent[root1] {
            // root2 is taller
            self.rank_or_parent[root1] = root2 as isize;
        } else {
            if self.rank_or_parent[root1] == self.rank_or_parent[root2] {
                self.rank_or_parent[root1] -= 1;
            }
            self.rank_or_parent[root2] = root1 as isize;
        }
    }

    /// Number of disjoint sets.
    pub fn count_roots(&self) -> usize {
        (0..self.len()).filter(|&x| self.is_root(x)).count()
    }

    /// Height of the tree rooted at `root`.
    #[cfg(test)]
    fn height(&self, root: usize) -> usize {
        debug_assert!(self.is_root(root));
        (-self.rank_or_parent[root] - 1) as usize
    }
}
