//! Resource handles
//!
//! Handles to entries of a resource tree, the file name helpers they use and
//! owned snapshots of their metadata.

mod handle;
pub mod name;
mod results;

pub use handle::ModuleResource;
pub use results::{ResourceInfo, ResourceKind};
