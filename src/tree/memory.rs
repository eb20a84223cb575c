//! In-memory resource tree
//!
//! A heap-backed implementation of [`ResourceTree`] holding file payloads
//! as owned byte buffers. Entries can be added while building the tree; once
//! handles borrow the tree it can no longer change.

use log::{debug, trace};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::TreeError;
use crate::path::{SEPARATOR, normalize};
use crate::tree::{NodeId, ResourceTree};

const ROOT: NodeId = NodeId(0);

enum Node {
    Dir(BTreeMap<String, NodeId>),
    File { data: Vec<u8>, compressed: bool },
}

/// Resource tree stored entirely in memory.
///
/// Directory children are kept sorted by name.
pub struct MemoryTree {
    nodes: Vec<Node>,
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryTree")
            .field("entries", &self.len())
            .finish()
    }
}

impl MemoryTree {
    /// Creates a tree containing only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Dir(BTreeMap::new())],
        }
    }

    /// Number of entries, not counting the root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a directory along with any missing parents.
    ///
    /// Inserting an existing directory returns its id.
    pub fn insert_dir(&mut self, path: &str) -> Result<NodeId, TreeError> {
        let normalized = normalize(path);
        let mut current = ROOT;
        for segment in normalized.segments() {
            current = self.ensure_dir(current, segment, normalized.resource_path())?;
        }
        Ok(current)
    }

    /// Adds a file, creating missing parent directories.
    ///
    /// The path must name a file: paths ending in a separator are rejected.
    pub fn insert_file(
        &mut self,
        path: &str,
        data: impl Into<Vec<u8>>,
        compressed: bool,
    ) -> Result<NodeId, TreeError> {
        let normalized = normalize(path);
        if normalized.is_directory_form() {
            return Err(TreeError::InvalidPath(format!(
                "{} does not name a file",
                normalized.resource_path()
            )));
        }

        let mut parent = ROOT;
        for segment in normalized
            .directory()
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
        {
            parent = self.ensure_dir(parent, segment, normalized.resource_path())?;
        }

        if self.child(parent, normalized.file_name()).is_some() {
            return Err(TreeError::AlreadyExists(
                normalized.resource_path().to_string(),
            ));
        }

        let data = data.into();
        debug!(
            "Adding file {} ({} bytes, compressed: {})",
            normalized.resource_path(),
            data.len(),
            compressed
        );
        self.link(
            parent,
            normalized.file_name(),
            Node::File { data, compressed },
        )
    }

    fn child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        match self.nodes.get(parent.index()) {
            Some(Node::Dir(entries)) => entries.get(name).copied(),
            _ => None,
        }
    }

    fn ensure_dir(&mut self, parent: NodeId, name: &str, path: &str) -> Result<NodeId, TreeError> {
        match self.child(parent, name) {
            Some(id) if self.is_dir(id) => Ok(id),
            Some(_) => Err(TreeError::NotADirectory(format!(
                "{} (segment {:?} is a file)",
                path, name
            ))),
            None => {
                trace!("Creating directory {:?} under node {}", name, parent);
                self.link(parent, name, Node::Dir(BTreeMap::new()))
            }
        }
    }

    fn link(&mut self, parent: NodeId, name: &str, node: Node) -> Result<NodeId, TreeError> {
        let id = NodeId::new(self.nodes.len());
        match self.nodes.get_mut(parent.index()) {
            Some(Node::Dir(entries)) => {
                entries.insert(name.to_string(), id);
            }
            _ => return Err(TreeError::NotADirectory(name.to_string())),
        }
        self.nodes.push(node);
        Ok(id)
    }
}

impl ResourceTree for MemoryTree {
    fn is_valid(&self) -> bool {
        true
    }

    /// A path with a trailing separator only resolves to a directory.
    fn find_node(&self, path: &str) -> Option<NodeId> {
        let node = path
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .try_fold(ROOT, |node, segment| self.child(node, segment))?;
        if path.ends_with(SEPARATOR) && !self.is_dir(node) {
            return None;
        }
        Some(node)
    }

    fn is_dir(&self, node: NodeId) -> bool {
        matches!(self.nodes.get(node.index()), Some(Node::Dir(_)))
    }

    fn is_compressed(&self, node: NodeId) -> bool {
        matches!(
            self.nodes.get(node.index()),
            Some(Node::File {
                compressed: true,
                ..
            })
        )
    }

    fn data(&self, node: NodeId) -> &[u8] {
        match self.nodes.get(node.index()) {
            Some(Node::File { data, .. }) => data.as_slice(),
            _ => &[],
        }
    }

    fn children(&self, node: NodeId, out: &mut Vec<String>) {
        if let Some(Node::Dir(entries)) = self.nodes.get(node.index()) {
            out.extend(entries.keys().cloned());
        }
    }
}
