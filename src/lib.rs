//! # Sapling
//!
//! A generic binary tree with a suite of recursive algorithms.
//!
//! ## Overview
//!
//! A [`Tree`] owns an optional root [`Node`], and every node exclusively owns
//! its left and right children. Elements are added either along a pseudo-random
//! path or in binary search tree order, and the tree can then be measured
//! ([`Tree::height`], [`Tree::sum_distances`]), traversed
//! ([`Tree::left_to_right`], [`Tree::paths`]), flipped ([`Tree::mirror`]) and
//! validated ([`Tree::is_ordered`]).
//!
//! ```
//! use sapling::Tree;
//!
//! let mut tree = Tree::with_seed(1);
//! for value in [5, 3, 8, 1, 4] {
//!     tree.insert_sorted(value);
//! }
//!
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.sum_distances(), 6);
//! assert!(tree.is_ordered());
//!
//! let mut out = String::new();
//! tree.write_left_to_right(&mut out).unwrap();
//! assert_eq!(out, "1 3 4 5 8 \n");
//! ```
//!
//! All algorithms recurse once per level, so their stack usage grows with the
//! height of the tree. Dropping or clearing a tree does not recurse.

mod builder;
mod compare;
mod display;
mod measure;
mod node;
mod order;
mod traversal;
mod tree;


pub use builder::{NodeBuilder, Side, TreeBuilder};
pub use display::TreeDisplay;
pub use node::{Link, Node};
pub use traversal::PATH_LABEL;
pub use tree::{InsertMode, Tree};

pub type NodeDepth = usize;
