use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, trace};

use crate::{
    node::{Link, Node},
    NodeDepth,
};

/// How [`Tree::insert_with`] chooses the descent path for a new element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertMode {
    /// Flip a fair coin at every node and descend left or right accordingly.
    #[default]
    Random,

    /// Descend like a binary search tree insert. Values equal to an existing
    /// node are routed into its right subtree.
    Sorted,
}

/// A binary tree whose nodes are exclusively owned by their parent.
///
/// The tree carries its own random source, which is only consumed by
/// [`InsertMode::Random`] insertion. Seed it with [`Tree::with_seed`] to get
/// reproducible shapes.
pub struct Tree<T, R = StdRng> {
    pub(crate) root: Link<T>,
    pub(crate) rng: R,
}

impl<T> Tree<T, StdRng> {
    /// Create an empty tree with a random source seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Create an empty tree with a deterministic random source
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T> Default for Tree<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> Tree<T, R> {
    /// Create an empty tree using the supplied random source for unsorted insertion
    pub fn with_rng(rng: R) -> Self {
        Self { root: None, rng }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Release every node, leaving an empty tree that can be reused.
    ///
    /// Nodes are released children before parent using an explicit stack, so
    /// dropping a degenerate (list shaped) tree does not recurse per level.
    pub fn clear(&mut self) {
        let Some(root) = self.root.take() else {
            return;
        };

        let mut released = 0usize;
        let mut stack = vec![root];

        while let Some(mut node) = stack.pop() {
            match node.take_children() {
                (None, None) => {
                    drop(node);
                    released += 1;
                }
                (left, right) => {
                    // Revisit the parent once both children have been released
                    stack.push(node);
                    stack.extend(left);
                    stack.extend(right);
                }
            }
        }

        debug!("Cleared tree, released {} nodes", released);
    }

    /// Clear this tree and replace it with a deep copy of `rhs`.
    ///
    /// The random source of this tree is kept. Returns `self` so assignments
    /// can be chained.
    pub fn assign(&mut self, rhs: &Self) -> &mut Self
    where
        T: Clone,
    {
        self.clear();
        self.root = Self::copy(&rhs.root);
        debug!("Assigned deep copy");
        self
    }

    fn copy(sub_root: &Link<T>) -> Link<T>
    where
        T: Clone,
    {
        sub_root.as_ref().map(|node| {
            Box::new(Node {
                elem: node.elem.clone(),
                left: Self::copy(&node.left),
                right: Self::copy(&node.right),
            })
        })
    }

    /// Flip the tree over its vertical axis in place
    pub fn mirror(&mut self) {
        Self::mirror_at(&mut self.root);
        debug!("Mirrored tree");
    }

    fn mirror_at(sub_root: &mut Link<T>) {
        let Some(node) = sub_root else {
            return;
        };

        Self::mirror_at(&mut node.left);
        Self::mirror_at(&mut node.right);

        std::mem::swap(&mut node.left, &mut node.right);
    }
}

impl<T, R> Tree<T, R>
where
    R: Rng,
{
    /// Insert along a pseudo-random path, attaching a new leaf at the first
    /// absent edge that is chosen.
    pub fn insert(&mut self, elem: T) {
        Self::insert_random(&mut self.root, elem, &mut self.rng, 0);
    }

    /// Insert like a binary search tree. Duplicates go right.
    pub fn insert_sorted(&mut self, elem: T)
    where
        T: Ord,
    {
        Self::insert_ordered(&mut self.root, elem, 0);
    }

    pub fn insert_with(&mut self, elem: T, mode: InsertMode)
    where
        T: Ord,
    {
        match mode {
            InsertMode::Random => self.insert(elem),
            InsertMode::Sorted => self.insert_sorted(elem),
        }
    }

    fn insert_random(link: &mut Link<T>, elem: T, rng: &mut R, depth: NodeDepth) {
        match link {
            Some(node) => {
                let go_left: bool = rng.gen();
                trace!(depth, go_left, "Random descent");
                if go_left {
                    Self::insert_random(&mut node.left, elem, rng, depth + 1)
                } else {
                    Self::insert_random(&mut node.right, elem, rng, depth + 1)
                }
            }
            None => {
                debug!("Attached random leaf at depth {}", depth);
                *link = Some(Node::boxed(elem));
            }
        }
    }

    fn insert_ordered(link: &mut Link<T>, elem: T, depth: NodeDepth)
    where
        T: Ord,
    {
        match link {
            Some(node) => {
                if elem < node.elem {
                    trace!(depth, "Sorted descent left");
                    Self::insert_ordered(&mut node.left, elem, depth + 1)
                } else {
                    trace!(depth, "Sorted descent right");
                    Self::insert_ordered(&mut node.right, elem, depth + 1)
                }
            }
            None => {
                debug!("Attached sorted leaf at depth {}", depth);
                *link = Some(Node::boxed(elem));
            }
        }
    }
}

impl<T, R> Clone for Tree<T, R>
where
    T: Clone,
    R: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Self::copy(&self.root),
            rng: self.rng.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T, R> Drop for Tree<T, R> {
    fn drop(&mut self) {
        self.clear();
    }
}
