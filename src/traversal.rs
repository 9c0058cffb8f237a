//! Depth-first traversals that collect values or write them to a text sink.
//!
//! Each traversal comes in three forms: a collecting method returning borrowed
//! values, a `write_*` method appending text to any [`std::fmt::Write`] sink,
//! and a `print_*` method writing the same text to stdout.

use std::convert::Infallible;
use std::fmt::{self, Write};
use std::io::Write as _;

use crate::{node::Link, Tree};

/// Label written before every root-to-leaf path
pub const PATH_LABEL: &str = "Path: ";

impl<T, R> Tree<T, R> {
    /// Values in order: the left subtree, then the node, then the right subtree
    pub fn left_to_right(&self) -> Vec<&T> {
        let mut values = Vec::new();
        let visited = Self::left_to_right_at(&self.root, &mut |elem| {
            values.push(elem);
            Ok::<_, Infallible>(())
        });
        if let Err(never) = visited {
            match never {}
        }
        values
    }

    /// Write the in-order values, each followed by a space, then a line break
    pub fn write_left_to_right<W>(&self, sink: &mut W) -> fmt::Result
    where
        W: Write,
        T: fmt::Display,
    {
        Self::left_to_right_at(&self.root, &mut |elem| write!(sink, "{} ", elem))?;
        sink.write_char('\n')
    }

    /// Print the in-order values to stdout
    pub fn print_left_to_right(&self) -> std::io::Result<()>
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        self.write_left_to_right(&mut out).map_err(std::io::Error::other)?;
        std::io::stdout().lock().write_all(out.as_bytes())
    }

    fn left_to_right_at<'a, E, F>(sub_root: &'a Link<T>, visit: &mut F) -> Result<(), E>
    where
        F: FnMut(&'a T) -> Result<(), E>,
    {
        let Some(node) = sub_root else {
            return Ok(());
        };

        Self::left_to_right_at(&node.left, visit)?;
        visit(&node.elem)?;
        Self::left_to_right_at(&node.right, visit)
    }

    /// Every path from the root down to a leaf, ordered left to right
    pub fn paths(&self) -> Vec<Vec<&T>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        let visited = Self::paths_at(&self.root, &mut current, &mut |path| {
            paths.push(path.to_vec());
            Ok::<_, Infallible>(())
        });
        if let Err(never) = visited {
            match never {}
        }
        paths
    }

    /// Write one line per root-to-leaf path
    pub fn write_paths<W>(&self, sink: &mut W) -> fmt::Result
    where
        W: Write,
        T: fmt::Display,
    {
        let mut current = Vec::new();
        Self::paths_at(&self.root, &mut current, &mut |path| {
            sink.write_str(PATH_LABEL)?;
            for elem in path {
                write!(sink, "{} ", elem)?;
            }
            sink.write_char('\n')
        })
    }

    /// Print every root-to-leaf path to stdout
    pub fn print_paths(&self) -> std::io::Result<()>
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        self.write_paths(&mut out).map_err(std::io::Error::other)?;
        std::io::stdout().lock().write_all(out.as_bytes())
    }

    /// Depth-first walk with a shared path buffer. The node is pushed on entry
    /// and popped on exit so siblings see the common prefix.
    fn paths_at<'a, E, F>(
        sub_root: &'a Link<T>,
        current: &mut Vec<&'a T>,
        emit: &mut F,
    ) -> Result<(), E>
    where
        F: FnMut(&[&'a T]) -> Result<(), E>,
    {
        let Some(node) = sub_root else {
            return Ok(());
        };

        current.push(&node.elem);

        let result = if node.is_leaf() {
            emit(current.as_slice())
        } else {
            Self::paths_at(&node.left, current, emit)
                .and_then(|_| Self::paths_at(&node.right, current, emit))
        };

        current.pop();
        result
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        test::{all_paths, random_tree, sorted_tree},
        Tree,
    };

    #[test]
    fn test_left_to_right_sorted() {
        let tree = sorted_tree(&[5, 3, 8, 1, 4]);
        assert_eq!(tree.left_to_right(), vec![&1, &3, &4, &5, &8]);

        let mut out = String::new();
        tree.write_left_to_right(&mut out).unwrap();
        assert_eq!(out, "1 3 4 5 8 \n");
    }

    #[test]
    fn test_left_to_right_empty() {
        let tree: Tree<i32> = Tree::with_seed(0);
        assert!(tree.left_to_right().is_empty());

        let mut out = String::new();
        tree.write_left_to_right(&mut out).unwrap();
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_paths_small_tree() {
        let tree = sorted_tree(&[5, 3, 8, 1, 4]);
        assert_eq!(
            tree.paths(),
            vec![vec![&5, &3, &1], vec![&5, &3, &4], vec![&5, &8]]
        );

        let mut out = String::new();
        tree.write_paths(&mut out).unwrap();
        assert_eq!(out, "Path: 5 3 1 \nPath: 5 3 4 \nPath: 5 8 \n");
    }

    #[test]
    fn test_paths_single_child() {
        // 2 has only a right child, the absent left edge must emit nothing
        let tree = sorted_tree(&[2, 3]);
        assert_eq!(tree.paths(), vec![vec![&2, &3]]);
    }

    #[test]
    fn test_paths_empty() {
        let tree: Tree<i32> = Tree::with_seed(0);
        assert!(tree.paths().is_empty());

        let mut out = String::new();
        tree.write_paths(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_paths_after_mirror() {
        let mut tree = sorted_tree(&[5, 3, 8, 1, 4]);
        tree.mirror();
        assert_eq!(
            tree.paths(),
            vec![vec![&5, &8], vec![&5, &3, &4], vec![&5, &3, &1]]
        );
    }

    #[test]
    fn test_write_to_failing_sink() {
        struct Full;

        impl std::fmt::Write for Full {
            fn write_str(&mut self, _: &str) -> std::fmt::Result {
                Err(std::fmt::Error)
            }
        }

        let tree = sorted_tree(&[1, 2]);
        assert!(tree.write_left_to_right(&mut Full).is_err());
        assert!(tree.write_paths(&mut Full).is_err());
    }

    proptest! {
        #[test]
        fn prop_sorted_left_to_right_non_decreasing(xs in proptest::collection::vec(0u8..32, 0..128)) {
            let tree = sorted_tree(&xs);
            let values = tree.left_to_right();
            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));

            let mut expected = xs.clone();
            expected.sort_unstable();
            prop_assert_eq!(values.into_iter().copied().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn prop_paths_match_exhaustive(seed in any::<u64>(), xs in proptest::collection::vec(any::<i16>(), 0..96)) {
            let tree = random_tree(seed, &xs);
            let paths: Vec<Vec<i16>> = tree
                .paths()
                .into_iter()
                .map(|p| p.into_iter().copied().collect())
                .collect();

            prop_assert_eq!(&paths, &all_paths(&tree));
            for path in &paths {
                prop_assert!(!path.is_empty());
            }
        }
    }
}
