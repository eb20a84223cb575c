//! Resource snapshot types
//!
//! Owned summaries of a handle's metadata, independent of the tree borrow.

use std::fmt;

use crate::resource::ModuleResource;

/// Kind of entry a handle resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    File,
    Directory,
    Missing,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::File => write!(f, "file"),
            ResourceKind::Directory => write!(f, "directory"),
            ResourceKind::Missing => write!(f, "missing"),
        }
    }
}

/// Metadata of a resource handle at the time of the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceInfo {
    pub name: String,
    pub resource_path: String,
    pub kind: ResourceKind,
    pub size: usize,
    pub compressed: bool,
    pub children: Vec<String>,
}

impl From<&ModuleResource<'_>> for ResourceInfo {
    fn from(resource: &ModuleResource<'_>) -> Self {
        let kind = if resource.is_file() {
            ResourceKind::File
        } else if resource.is_dir() {
            ResourceKind::Directory
        } else {
            ResourceKind::Missing
        };

        Self {
            name: resource.name().to_string(),
            resource_path: resource.resource_path().to_string(),
            kind,
            size: resource.size(),
            compressed: resource.is_compressed(),
            children: resource.children().to_vec(),
        }
    }
}

impl fmt::Display for ResourceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.resource_path)?;
        writeln!(f, "  kind: {}", self.kind)?;
        match self.kind {
            ResourceKind::File => {
                writeln!(f, "  size: {} bytes", self.size)?;
                writeln!(f, "  compressed: {}", self.compressed)?;
            }
            ResourceKind::Directory => {
                writeln!(f, "  entries: {}", self.children.len())?;
                for child in &self.children {
                    writeln!(f, "    {}", child)?;
                }
            }
            ResourceKind::Missing => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MemoryTree;

    #[test]
    fn test_info_for_file() {
        let mut tree = MemoryTree::new();
        tree.insert_file("/a/b.txt", b"hello".to_vec(), false).unwrap();

        let info = ResourceInfo::from(&ModuleResource::new("/a/b.txt", &tree));
        assert_eq!(info.kind, ResourceKind::File);
        assert_eq!(info.size, 5);
        assert_eq!(
            info.to_string(),
            "/a/b.txt\n  kind: file\n  size: 5 bytes\n  compressed: false\n"
        );
    }

    #[test]
    fn test_info_for_directory_and_missing() {
        let mut tree = MemoryTree::new();
        tree.insert_file("/a/b.txt", b"hello".to_vec(), false).unwrap();

        let info = ResourceInfo::from(&ModuleResource::new("/a/", &tree));
        assert_eq!(info.kind, ResourceKind::Directory);
        assert_eq!(info.to_string(), "/a/\n  kind: directory\n  entries: 1\n    b.txt\n");

        let info = ResourceInfo::from(&ModuleResource::new("/zzz", &tree));
        assert_eq!(info.kind, ResourceKind::Missing);
        assert_eq!(info.to_string(), "/zzz\n  kind: missing\n");
    }
}
