/// An exclusive ownership edge from a parent (or the tree's root slot) to a child subtree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single node of a [`crate::Tree`], owning its value and both child subtrees.
#[derive(Debug, PartialEq, Eq)]
pub struct Node<T> {
    pub(crate) elem: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(elem: T) -> Self {
        Self {
            elem,
            left: None,
            right: None,
        }
    }

    pub(crate) fn boxed(elem: T) -> Box<Self> {
        Box::new(Self::new(elem))
    }

    /// The value stored in this node
    pub fn elem(&self) -> &T {
        &self.elem
    }

    /// The left child, if present
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, if present
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns true if both child edges are absent
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Detach both children, leaving this node as a leaf
    pub(crate) fn take_children(&mut self) -> (Link<T>, Link<T>) {
        (self.left.take(), self.right.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node = Node::new(7);
        assert!(node.is_leaf());
        assert_eq!(*node.elem(), 7);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn test_take_children() {
        let mut node = Node::new(2);
        node.left = Some(Node::boxed(1));
        node.right = Some(Node::boxed(3));
        assert!(!node.is_leaf());

        let (left, right) = node.take_children();
        assert_eq!(left.map(|n| n.elem), Some(1));
        assert_eq!(right.map(|n| n.elem), Some(3));
        assert!(node.is_leaf());
    }
}
