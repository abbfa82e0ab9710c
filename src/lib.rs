//! A word to meaning dictionary backed by an AVL tree.
//!
//! [`AvlTreeMap`] is a self-balancing binary search tree: after every
//! insertion and removal the heights of the two subtrees of any node
//! differ by at most one, so lookups, insertions and removals all take
//! `O(log n)` comparisons. [`Dictionary`] is the map instantiated with
//! string words and meanings.

mod dictionary;
mod error;
mod map;
mod print;

pub use dictionary::{Dictionary, Meaning, Word};
pub use error::{Error, Result};
pub use map::{AvlTreeMap, Iter};
pub use print::InOrder;
