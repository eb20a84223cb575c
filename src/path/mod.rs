//! Resource path handling
//!
//! Converts user supplied path strings into the canonical absolute form
//! used to address entries of a resource tree.

mod normalize;

pub use normalize::{NormalizedPath, SEPARATOR, normalize};
