use crate::arena::NodeId;
use std::result;
use thiserror::Error;

/// A broken structural invariant found by `AvlMap::validate`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("root node {} has a parent link", .0.index())]
    RootHasParent(NodeId),
    #[error("handle {} does not refer to a live node", .0.index())]
    DanglingHandle(NodeId),
    #[error("node {} does not point back at the node that owns it", .0.index())]
    BrokenParentLink(NodeId),
    #[error("key at node {} is out of order", .0.index())]
    Unordered(NodeId),
    #[error("node {} has subtree heights differing by {}", .node.index(), .balance)]
    Unbalanced { node: NodeId, balance: i32 },
    #[error(
        "node {} caches height {} but its subtree has height {}",
        .node.index(),
        .cached,
        .actual
    )]
    StaleHeight { node: NodeId, cached: i32, actual: i32 },
    #[error(
        "node {} caches balance {} but its subtree has balance {}",
        .node.index(),
        .cached,
        .actual
    )]
    StaleBalance { node: NodeId, cached: i8, actual: i32 },
    #[error("{reachable} nodes are reachable from the root but {stored} are stored")]
    LengthMismatch { reachable: usize, stored: usize },
}

pub type Result<T> = result::Result<T, Error>;
