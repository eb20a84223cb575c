//! Handles to entries of embedded, read-only resource trees.
//!
//! A [`ModuleResource`] is built from a path string and a [`ResourceTree`].
//! The path is normalized, looked up once, and the result is shared by all
//! clones of the handle.
//!
//! ```
//! use module_resource::{MemoryTree, ModuleResource};
//!
//! let mut tree = MemoryTree::new();
//! tree.insert_file("/icons/logo.png", b"png".to_vec(), false).unwrap();
//!
//! let logo = ModuleResource::new("icons//logo.png", &tree);
//! assert!(logo.is_file());
//! assert_eq!(logo.resource_path(), "/icons/logo.png");
//! assert_eq!(logo.suffix(), "png");
//!
//! let icons = ModuleResource::new("/icons/", &tree);
//! assert_eq!(icons.children(), ["logo.png"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod path;
pub mod resource;
pub mod tree;
pub mod utils;

pub use resource::{ModuleResource, ResourceInfo, ResourceKind};
pub use tree::{MemoryTree, NodeId, ResourceTree};
