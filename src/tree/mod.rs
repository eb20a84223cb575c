//! Resource trees
//!
//! Defines the read-only query contract a resource tree offers to resource
//! handles, together with an in-memory implementation and a loader that
//! builds one from a directory on disk.

mod loader;
mod memory;

pub use loader::{LoadOptions, load_directory};
pub use memory::MemoryTree;

use std::fmt;

/// Identifier of a node inside a resource tree.
///
/// Only meaningful for the tree that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Read-only query interface of a resource tree.
///
/// Paths passed to [`find_node`](ResourceTree::find_node) are canonical:
/// absolute, without duplicate separators. Node ids handed to the other
/// methods always come from `find_node` on the same tree.
pub trait ResourceTree: Send + Sync {
    /// Whether the tree is usable at all.
    fn is_valid(&self) -> bool;

    /// Looks up a node by canonical path.
    fn find_node(&self, path: &str) -> Option<NodeId>;

    fn is_dir(&self, node: NodeId) -> bool;

    fn is_compressed(&self, node: NodeId) -> bool;

    /// Payload of a file node.
    ///
    /// Must only be called for nodes where [`is_dir`](ResourceTree::is_dir)
    /// returned false.
    fn data(&self, node: NodeId) -> &[u8];

    /// Appends the names of the immediate children of a directory node to
    /// `out`, in tree order.
    fn children(&self, node: NodeId, out: &mut Vec<String>);
}
