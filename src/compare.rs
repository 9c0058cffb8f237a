use std::hash::{Hash, Hasher};

use xxhash_rust::xxh64::Xxh64;

use crate::{node::Link, Tree};

/// Tree Comparison
///
/// Two trees are equal when they have the same shape and equal values at every
/// position. The random source is not compared.
impl<T, R> PartialEq for Tree<T, R>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<T, R> Eq for Tree<T, R> where T: Eq {}

// Markers written for each edge, so that shapes holding the same values in a
// different arrangement hash differently
const ABSENT: u8 = 0;
const PRESENT: u8 = 1;

impl<T, R> Tree<T, R>
where
    T: Hash,
{
    /// Compute a positional xxh64 hash of the tree's shape and values
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Xxh64::new(0);
        Self::hash_at(&self.root, &mut hasher);
        hasher.finish()
    }

    fn hash_at(sub_root: &Link<T>, hasher: &mut Xxh64) {
        match sub_root {
            None => hasher.write_u8(ABSENT),
            Some(node) => {
                hasher.write_u8(PRESENT);
                node.elem.hash(hasher);
                Self::hash_at(&node.left, hasher);
                Self::hash_at(&node.right, hasher);
            }
        }
    }
}
