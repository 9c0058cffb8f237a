//! Structural measurements over a [`Tree`]: height, node count and the sum of node depths.

use crate::{node::Link, NodeDepth, Tree};

impl<T, R> Tree<T, R> {
    /// Length of the longest root-to-leaf path in edges.
    ///
    /// An empty tree has height `-1` and a single node has height `0`.
    pub fn height(&self) -> isize {
        Self::height_at(&self.root)
    }

    fn height_at(sub_root: &Link<T>) -> isize {
        match sub_root {
            None => -1,
            Some(node) => 1 + Self::height_at(&node.left).max(Self::height_at(&node.right)),
        }
    }

    /// Sum of the depths of all nodes, where the root has depth 0.
    ///
    /// For a fixed number of nodes a lower value indicates a better balanced tree.
    pub fn sum_distances(&self) -> usize {
        Self::sum_distances_at(&self.root, 0)
    }

    fn sum_distances_at(sub_root: &Link<T>, depth: NodeDepth) -> usize {
        let Some(node) = sub_root else {
            return 0;
        };

        depth
            + Self::sum_distances_at(&node.left, depth + 1)
            + Self::sum_distances_at(&node.right, depth + 1)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        Self::len_at(&self.root)
    }

    fn len_at(sub_root: &Link<T>) -> usize {
        sub_root
            .as_ref()
            .map(|node| 1 + Self::len_at(&node.left) + Self::len_at(&node.right))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        test::{depths, random_tree, sorted_tree},
        Tree,
    };

    #[test]
    fn test_empty_tree() {
        let tree: Tree<u32> = Tree::with_seed(0);
        assert_eq!(tree.height(), -1);
        assert_eq!(tree.sum_distances(), 0);
        assert_eq!(tree.len(), 0);
    }

    #[test]
    fn test_single_node() {
        let tree = sorted_tree(&[7]);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.sum_distances(), 0);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_small_sorted_tree() {
        let tree = sorted_tree(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.sum_distances(), 6);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_chain_sum_distances() {
        // 1 -> 2 -> 3 -> 4 all to the right
        let tree = sorted_tree(&[1, 2, 3, 4]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.sum_distances(), 1 + 2 + 3);
    }

    proptest! {
        // height == 1 + max(height(left), height(right)) for every non-empty tree
        #[test]
        fn prop_height_recursive_identity(seed in any::<u64>(), xs in proptest::collection::vec(any::<i32>(), 1..128)) {
            let tree = random_tree(seed, &xs);
            let root = tree.root().unwrap();

            let sub_height = |child: Option<&crate::Node<i32>>| {
                child.map(|c| depths(c).into_iter().max().unwrap_or(0) as isize).unwrap_or(-1)
            };

            let expected = 1 + sub_height(root.left()).max(sub_height(root.right()));
            prop_assert_eq!(tree.height(), expected);
        }

        #[test]
        fn prop_sum_distances_matches_depths(seed in any::<u64>(), xs in proptest::collection::vec(any::<i32>(), 0..128)) {
            let tree = random_tree(seed, &xs);
            let expected: usize = tree.root().map(|r| depths(r).into_iter().sum()).unwrap_or(0);
            prop_assert_eq!(tree.sum_distances(), expected);
            prop_assert_eq!(tree.len(), xs.len());
        }

        #[test]
        fn prop_height_bounds(seed in any::<u64>(), xs in proptest::collection::vec(any::<i32>(), 1..128)) {
            let tree = random_tree(seed, &xs);
            let h = tree.height();
            prop_assert!(h >= 0);
            prop_assert!((h as usize) < xs.len());
        }
    }
}
