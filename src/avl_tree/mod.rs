//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! Nodes are stored in an arena and linked to their parents, so rebalancing walks upward from
//! the point of a mutation instead of unwinding a recursion.

mod error;
mod map;
mod node;
mod tree;

pub use self::error::{Error, Result};
pub use self::map::{AvlMap, AvlMapIntoIter, AvlMapIter};
