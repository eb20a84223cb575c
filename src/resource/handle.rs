//! Module `handle`
//!
//! Defines [`ModuleResource`], a cheaply cloneable handle to one entry of a
//! resource tree.

use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ptr;
use std::sync::{Arc, OnceLock};
use std::time::SystemTime;

use crate::path::{NormalizedPath, SEPARATOR, normalize};
use crate::resource::name;
use crate::tree::{NodeId, ResourceTree};

/// State shared by every clone of a handle.
///
/// Everything except `children` is fixed at construction.
struct ResourceRecord<'t> {
    path: NormalizedPath,
    tree: Option<&'t dyn ResourceTree>,
    node: Option<NodeId>,
    is_file: bool,
    is_compressed: bool,
    data: Option<&'t [u8]>,
    children: OnceLock<Vec<String>>,
}

impl<'t> ResourceRecord<'t> {
    fn unresolved(path: NormalizedPath, tree: Option<&'t dyn ResourceTree>) -> Self {
        Self {
            path,
            tree,
            node: None,
            is_file: false,
            is_compressed: false,
            data: None,
            children: OnceLock::new(),
        }
    }
}

/// Handle to a file or directory inside a resource tree.
///
/// Built from a path string, which is normalized and looked up in the tree
/// once. Clones share the same record, so copying a handle never repeats
/// the lookup. A path that is not in the tree produces an invalid handle
/// whose queries all return empty values.
///
/// The handle borrows the tree for `'t` and never copies payload bytes;
/// [`data`](ModuleResource::data) hands out the tree's own slice.
///
/// Two handles are equal when they were built against the same tree
/// instance and have the same resource path; the node id plays no part.
/// Hashing only looks at the resource path, and so does ordering except
/// when two trees hold the same path.
#[derive(Clone)]
pub struct ModuleResource<'t> {
    record: Arc<ResourceRecord<'t>>,
}

impl Default for ModuleResource<'_> {
    /// An invalid handle that belongs to no tree.
    fn default() -> Self {
        Self {
            record: Arc::new(ResourceRecord::unresolved(NormalizedPath::default(), None)),
        }
    }
}

impl<'t> ModuleResource<'t> {
    /// Resolves `path` against `tree`.
    ///
    /// Directories are detected before any payload is requested, so
    /// [`ResourceTree::data`] is only called for file nodes.
    pub fn new(path: &str, tree: &'t dyn ResourceTree) -> Self {
        let path = normalize(path);
        let mut record = ResourceRecord::unresolved(path, Some(tree));

        record.node = tree.find_node(record.path.resource_path());
        match record.node {
            Some(node) => {
                record.is_file = !tree.is_dir(node);
                if record.is_file {
                    record.data = Some(tree.data(node));
                    record.is_compressed = tree.is_compressed(node);
                }
                trace!(
                    "Resolved resource {} to node {} (file: {})",
                    record.path.resource_path(),
                    node,
                    record.is_file
                );
            }
            None => {
                debug!("Resource {} not found", record.path.resource_path());
            }
        }

        Self {
            record: Arc::new(record),
        }
    }

    /// Returns true if the tree is usable and the path resolved to a node.
    pub fn is_valid(&self) -> bool {
        match self.record.tree {
            Some(tree) => tree.is_valid() && self.record.node.is_some(),
            None => false,
        }
    }

    pub fn is_file(&self) -> bool {
        self.is_valid() && self.record.is_file
    }

    pub fn is_dir(&self) -> bool {
        self.is_valid() && !self.record.is_file
    }

    /// Returns true if the payload is stored compressed in the tree.
    pub fn is_compressed(&self) -> bool {
        self.is_valid() && self.record.is_compressed
    }

    /// Final path segment, empty for directories addressed with a trailing
    /// separator.
    pub fn name(&self) -> &str {
        self.record.path.file_name()
    }

    /// Directory part of the resource path, ending with a separator.
    pub fn path(&self) -> &str {
        self.record.path.directory()
    }

    /// Canonical absolute path, `path() + name()`.
    pub fn resource_path(&self) -> &str {
        self.record.path.resource_path()
    }

    pub fn base_name(&self) -> &str {
        name::base_name(self.name())
    }

    pub fn complete_base_name(&self) -> &str {
        name::complete_base_name(self.name())
    }

    pub fn suffix(&self) -> &str {
        name::suffix(self.name())
    }

    pub fn complete_suffix(&self) -> &str {
        name::complete_suffix(self.name())
    }

    /// Names of the entries of a directory.
    ///
    /// The tree is asked once, on the first call; later calls return the
    /// cached list. Files and invalid handles yield an empty list without
    /// touching the tree.
    pub fn children(&self) -> &[String] {
        if !self.is_dir() {
            return &[];
        }
        let (Some(tree), Some(node)) = (self.record.tree, self.record.node) else {
            return &[];
        };
        self.record.children.get_or_init(|| {
            let mut names = Vec::new();
            tree.children(node, &mut names);
            trace!(
                "Cached {} children of {}",
                names.len(),
                self.resource_path()
            );
            names
        })
    }

    /// Handle for the entry `child_name` inside this directory.
    ///
    /// Does not check that this handle is a directory; the result is simply
    /// invalid when no such entry exists.
    pub fn child(&self, child_name: &str) -> ModuleResource<'t> {
        let Some(tree) = self.record.tree else {
            return ModuleResource::default();
        };
        let path = format!("{}{}{}", self.resource_path(), SEPARATOR, child_name);
        ModuleResource::new(&path, tree)
    }

    /// Handles for every entry returned by [`children`](Self::children).
    pub fn children_resources(&self) -> Vec<ModuleResource<'t>> {
        self.children()
            .iter()
            .map(|child_name| self.child(child_name))
            .collect()
    }

    /// Payload size in bytes, zero for directories and invalid handles.
    pub fn size(&self) -> usize {
        self.data().map_or(0, <[u8]>::len)
    }

    /// Payload bytes as stored in the tree.
    ///
    /// Compressed payloads are returned as-is.
    pub fn data(&self) -> Option<&'t [u8]> {
        if !self.is_valid() {
            return None;
        }
        self.record.data
    }

    /// Resource trees carry no timestamps, so this is always `None`.
    pub fn last_modified(&self) -> Option<SystemTime> {
        None
    }

    /// Returns true if this handle was built against `tree`.
    pub fn tree_is(&self, tree: &dyn ResourceTree) -> bool {
        self.tree_addr() == ptr::from_ref(tree).cast::<()>()
    }

    /// Returns true if both handles share one record.
    pub fn shares_record(&self, other: &ModuleResource<'_>) -> bool {
        ptr::eq(
            Arc::as_ptr(&self.record).cast::<()>(),
            Arc::as_ptr(&other.record).cast::<()>(),
        )
    }

    /// Number of live handles sharing this record.
    pub fn share_count(&self) -> usize {
        Arc::strong_count(&self.record)
    }

    fn tree_addr(&self) -> *const () {
        match self.record.tree {
            Some(tree) => ptr::from_ref(tree).cast::<()>(),
            None => ptr::null(),
        }
    }
}

impl PartialEq for ModuleResource<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.tree_addr() == other.tree_addr() && self.resource_path() == other.resource_path()
    }
}

impl Eq for ModuleResource<'_> {}

impl PartialOrd for ModuleResource<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleResource<'_> {
    /// Orders by resource path. Equal paths from different trees fall back
    /// to the tree address so the order agrees with `==`.
    fn cmp(&self, other: &Self) -> Ordering {
        self.resource_path()
            .cmp(other.resource_path())
            .then_with(|| (self.tree_addr() as usize).cmp(&(other.tree_addr() as usize)))
    }
}

impl Hash for ModuleResource<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource_path().hash(state);
    }
}

impl fmt::Display for ModuleResource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource_path())
    }
}

impl fmt::Debug for ModuleResource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleResource")
            .field("resource_path", &self.resource_path())
            .field("node", &self.record.node)
            .field("valid", &self.is_valid())
            .field("is_file", &self.is_file())
            .field("size", &self.size())
            .finish()
    }
}
