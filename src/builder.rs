//! Builders for constructing trees of an explicit shape.
//!
//! Insertion decides the shape of a [`Tree`] on its own. The `TreeBuilder` and
//! `NodeBuilder` types instead let the caller place every node, which is useful
//! for constructing specific (including unordered) trees.
//!

use std::marker::PhantomData;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, debug_span, warn};

use crate::{
    node::{Link, Node},
    NodeDepth, Tree,
};

/// Which child edge of a node is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A builder for attaching children to a node.
///
/// The `NodeBuilder` is handed to the closures given to [`TreeBuilder::root`],
/// [`NodeBuilder::left`] and [`NodeBuilder::right`].
pub struct NodeBuilder<'a, T, E> {
    // Node currently being built
    node: &'a mut Node<T>,

    depth: NodeDepth,

    _phantom: PhantomData<E>,
}

impl<'a, T, E> NodeBuilder<'a, T, E> {
    fn new(node: &'a mut Node<T>, depth: NodeDepth) -> Self {
        Self {
            node,
            depth,
            _phantom: PhantomData,
        }
    }

    /// Attach a left child to the current node.
    ///
    /// # Arguments
    ///
    /// * `elem`: The value of the child node.
    /// * `f`: A closure that takes the child builder and adds its own children.
    pub fn left<F>(&mut self, elem: T, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, T, E>) -> Result<(), E>,
    {
        self.child(Side::Left, elem, f)
    }

    /// Attach a right child to the current node. See [`NodeBuilder::left`].
    pub fn right<F>(&mut self, elem: T, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, T, E>) -> Result<(), E>,
    {
        self.child(Side::Right, elem, f)
    }

    /// Build a child subtree and attach it on the given side, replacing any
    /// subtree previously attached there.
    pub fn child<F>(&mut self, side: Side, elem: T, f: F) -> Result<(), E>
    where
        F: FnOnce(&mut NodeBuilder<'_, T, E>) -> Result<(), E>,
    {
        let mut child = Node::boxed(elem);

        // Call the supplied closure with a NodeBuilder to add this child's children
        f(&mut NodeBuilder::new(&mut child, self.depth + 1))?;

        let slot: &mut Link<T> = match side {
            Side::Left => &mut self.node.left,
            Side::Right => &mut self.node.right,
        };

        if slot.is_some() {
            warn!(
                "Replacing existing {:?} subtree of node at depth {}",
                side, self.depth
            );
        }

        debug!("Attached {:?} child at depth {}", side, self.depth + 1);
        *slot = Some(child);
        Ok(())
    }

    pub fn elem(&self) -> &T {
        &self.node.elem
    }

    /// Depth of the node being built, the root has depth 0
    pub fn depth(&self) -> NodeDepth {
        self.depth
    }
}

/// A builder for constructing trees.
///
/// The `root` method adds the root node and calls the provided closure with a
/// [`NodeBuilder`] that can be used to recursively attach children. The
/// closures return a `Result<(), E>`, where E is your defined error type, so
/// errors within your closures propagate.
///
/// # Examples
///
/// ```
/// use sapling::TreeBuilder;
///
/// type MyError = String;
///
/// let tree = TreeBuilder::<u32, MyError>::new()
///     .seed(7)
///     .root(5, |root| {
///         root.left(3, |_| Ok(()))?;
///         root.right(8, |_| Ok(()))
///     })
///     .unwrap()
///     .done();
///
/// assert_eq!(tree.height(), 1);
/// assert!(tree.is_ordered());
/// ```
pub struct TreeBuilder<T, E, R = StdRng> {
    rng: R,
    root: Link<T>,
    debug_span: tracing::Span,
    _phantom: PhantomData<E>,
}

impl<T, E> TreeBuilder<T, E, StdRng> {
    /// Creates a new `TreeBuilder` whose tree uses an entropy seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seed the random source of the built tree
    pub fn seed(self, seed: u64) -> Self {
        self.rng(StdRng::seed_from_u64(seed))
    }
}

impl<T, E> Default for TreeBuilder<T, E, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E, R> TreeBuilder<T, E, R> {
    pub fn with_rng(rng: R) -> Self {
        let debug_span = debug_span!("TreeBuilder");
        debug_span.in_scope(|| debug!("Created new TreeBuilder"));

        Self {
            rng,
            root: None,
            debug_span,
            _phantom: PhantomData,
        }
    }

    /// Replace the random source the built tree will use for unsorted insertion
    pub fn rng<R2>(self, rng: R2) -> TreeBuilder<T, E, R2> {
        TreeBuilder {
            rng,
            root: self.root,
            debug_span: self.debug_span,
            _phantom: PhantomData,
        }
    }

    /// Adds a root node to the tree and returns the updated builder.
    ///
    /// # Arguments
    ///
    /// * `elem`: The value of the root node.
    /// * `f`: A closure that takes the root builder and adds its own children.
    pub fn root<F>(mut self, elem: T, f: F) -> Result<Self, E>
    where
        F: FnOnce(&mut NodeBuilder<'_, T, E>) -> Result<(), E>,
    {
        let span = self.debug_span.clone();
        let _enter = span.enter();

        let mut root = Node::boxed(elem);
        f(&mut NodeBuilder::new(&mut root, 0))?;

        if self.root.is_some() {
            warn!("Replacing existing root");
        } else {
            debug!("Added root");
        }
        self.root = Some(root);

        Ok(self)
    }

    /// Returns the constructed tree when finished building it.
    pub fn done(self) -> Tree<T, R> {
        self.debug_span.in_scope(|| debug!("Finished building tree"));

        let mut tree = Tree::with_rng(self.rng);
        tree.root = self.root;
        tree
    }
}
