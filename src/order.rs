use crate::{node::Link, Tree};

impl<T, R> Tree<T, R>
where
    T: Ord,
{
    /// Returns true if the tree satisfies the binary search tree ordering,
    /// that is an in-order traversal yields strictly increasing values.
    ///
    /// Duplicate values are reported as unordered, even when they were added
    /// with [`Tree::insert_sorted`].
    pub fn is_ordered(&self) -> bool {
        Self::is_ordered_at(&self.root, None, None)
    }

    /// Checks a subtree against the open interval `(lower, upper)`. An absent
    /// bound is unbounded on that side.
    fn is_ordered_at(sub_root: &Link<T>, lower: Option<&T>, upper: Option<&T>) -> bool {
        let Some(node) = sub_root else {
            return true;
        };

        let elem = &node.elem;
        if lower.is_some_and(|min| elem <= min) || upper.is_some_and(|max| elem >= max) {
            return false;
        }

        Self::is_ordered_at(&node.left, lower, Some(elem))
            && Self::is_ordered_at(&node.right, Some(elem), upper)
    }
}
