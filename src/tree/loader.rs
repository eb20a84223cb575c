//! Directory loader
//!
//! Builds a [`MemoryTree`] from the files below a directory on disk.

use log::{info, warn};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::TreeError;
use crate::resource::name;
use crate::tree::MemoryTree;

const DEFAULT_MAX_FILE_SIZE: u64 = 4 * 1024 * 1024;

/// Options controlling how files are added to the tree
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// File suffixes (without the dot) whose payload is flagged compressed.
    /// Matched case-insensitively against the last suffix of the name.
    pub compressed_suffixes: Vec<String>,
    /// Largest accepted file, in bytes.
    pub max_file_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            compressed_suffixes: vec!["gz".to_string(), "z".to_string()],
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl LoadOptions {
    fn is_compressed(&self, file_name: &str) -> bool {
        let suffix = name::suffix(file_name);
        !suffix.is_empty()
            && self
                .compressed_suffixes
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(suffix))
    }
}

fn check_size(virtual_path: &str, size: u64, options: &LoadOptions) -> Result<(), TreeError> {
    if size > options.max_file_size {
        return Err(TreeError::FileTooLarge {
            path: virtual_path.to_string(),
            size,
            limit: options.max_file_size,
        });
    }
    Ok(())
}

/// Loads every directory and regular file below `root` into a new tree.
///
/// Symlinks, other special entries and names that are not valid UTF-8 are
/// skipped. Payloads are stored as
/// read; files flagged compressed are not decompressed.
pub async fn load_directory(root: &Path, options: &LoadOptions) -> Result<MemoryTree, TreeError> {
    let metadata = fs::metadata(root).await?;
    if !metadata.is_dir() {
        return Err(TreeError::NotADirectory(root.display().to_string()));
    }

    let mut tree = MemoryTree::new();
    let mut pending: Vec<(PathBuf, String)> = vec![(root.to_path_buf(), "/".to_string())];
    let mut file_count = 0usize;

    while let Some((real_dir, virtual_dir)) = pending.pop() {
        let mut entries = fs::read_dir(&real_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let Ok(file_name) = entry.file_name().into_string() else {
                warn!(
                    "Skipping {} (file name is not valid UTF-8)",
                    entry.path().display()
                );
                continue;
            };
            let virtual_path = format!("{}{}", virtual_dir, file_name);
            let file_type = entry.file_type().await?;

            if file_type.is_dir() {
                tree.insert_dir(&virtual_path)?;
                pending.push((entry.path(), format!("{}/", virtual_path)));
            } else if file_type.is_file() {
                check_size(&virtual_path, entry.metadata().await?.len(), options)?;
                let data = fs::read(entry.path()).await?;
                // The file may have grown since its metadata was read.
                check_size(&virtual_path, data.len() as u64, options)?;
                tree.insert_file(&virtual_path, data, options.is_compressed(&file_name))?;
                file_count += 1;
            } else {
                warn!(
                    "Skipping {} (not a regular file or directory)",
                    entry.path().display()
                );
            }
        }
    }

    info!(
        "Loaded {} files ({} entries) from {}",
        file_count,
        tree.len(),
        root.display()
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::ResourceTree;
    use tempfile::tempdir;

    #[test]
    fn test_compressed_suffix_matching() {
        let options = LoadOptions::default();
        assert!(options.is_compressed("bundle.tar.gz"));
        assert!(options.is_compressed("BUNDLE.GZ"));
        assert!(!options.is_compressed("notes.txt"));
        assert!(!options.is_compressed("gz"));
        assert!(!options.is_compressed("trailing."));
    }

    #[test]
    fn test_check_size_limit() {
        let options = LoadOptions {
            max_file_size: 16,
            ..LoadOptions::default()
        };
        assert!(check_size("/ok.bin", 16, &options).is_ok());
        assert!(matches!(
            check_size("/grown.bin", 17, &options),
            Err(TreeError::FileTooLarge { size: 17, limit: 16, .. })
        ));
    }

    #[tokio::test]
    async fn test_load_directory() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
        std::fs::create_dir_all(dir.path().join("empty")).unwrap();
        std::fs::write(dir.path().join("top.txt"), b"top").unwrap();
        std::fs::write(dir.path().join("nested/deeper/pack.gz"), b"\x1f\x8b").unwrap();

        let tree = load_directory(dir.path(), &LoadOptions::default())
            .await
            .unwrap();

        let top = tree.find_node("/top.txt").unwrap();
        assert_eq!(tree.data(top), b"top");
        assert!(!tree.is_compressed(top));

        let pack = tree.find_node("/nested/deeper/pack.gz").unwrap();
        assert!(tree.is_compressed(pack));

        let empty = tree.find_node("/empty/").unwrap();
        assert!(tree.is_dir(empty));
    }

    #[tokio::test]
    async fn test_load_rejects_large_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("big.bin"), vec![0u8; 64]).unwrap();

        let options = LoadOptions {
            max_file_size: 16,
            ..LoadOptions::default()
        };
        let result = load_directory(dir.path(), &options).await;
        assert!(matches!(
            result,
            Err(TreeError::FileTooLarge { size: 64, limit: 16, .. })
        ));
    }

    #[tokio::test]
    async fn test_load_requires_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, b"x").unwrap();

        let result = load_directory(&file, &LoadOptions::default()).await;
        assert!(matches!(result, Err(TreeError::NotADirectory(_))));

        let missing = load_directory(&dir.path().join("missing"), &LoadOptions::default()).await;
        assert!(matches!(missing, Err(TreeError::IoError(_))));
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_load_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(OsStr::from_bytes(b"bad\xff.txt")), b"a").unwrap();
        std::fs::write(dir.path().join(OsStr::from_bytes(b"bad\xfe.txt")), b"b").unwrap();
        std::fs::write(dir.path().join("good.txt"), b"c").unwrap();

        let tree = load_directory(dir.path(), &LoadOptions::default())
            .await
            .unwrap();

        assert_eq!(tree.len(), 1);
        let root = tree.find_node("/").unwrap();
        let mut names = Vec::new();
        tree.children(root, &mut names);
        assert_eq!(names, vec!["good.txt"]);
    }
}
