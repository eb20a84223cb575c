//! Error types
//!
//! Defines domain-specific error types for tree construction and the
//! inspector binary.

use std::fmt;
use std::io;

/// Errors raised while populating a resource tree
#[derive(Debug)]
pub enum TreeError {
    InvalidPath(String),
    AlreadyExists(String),
    NotADirectory(String),
    FileTooLarge { path: String, size: u64, limit: u64 },
    IoError(io::Error),
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            TreeError::AlreadyExists(p) => write!(f, "Entry already exists: {}", p),
            TreeError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            TreeError::FileTooLarge { path, size, limit } => write!(
                f,
                "File too large: {} ({} bytes, limit {} bytes)",
                path, size, limit
            ),
            TreeError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TreeError {
    fn from(error: io::Error) -> Self {
        TreeError::IoError(error)
    }
}

/// Top-level error for the inspector that encompasses all error types
#[derive(Debug)]
pub enum InspectorError {
    Config(config::ConfigError),
    Tree(TreeError),
    IoError(io::Error),
}

impl fmt::Display for InspectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectorError::Config(e) => write!(f, "Configuration error: {}", e),
            InspectorError::Tree(e) => write!(f, "Resource tree error: {}", e),
            InspectorError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for InspectorError {}

impl From<config::ConfigError> for InspectorError {
    fn from(error: config::ConfigError) -> Self {
        InspectorError::Config(error)
    }
}

impl From<TreeError> for InspectorError {
    fn from(error: TreeError) -> Self {
        InspectorError::Tree(error)
    }
}

impl From<io::Error> for InspectorError {
    fn from(error: io::Error) -> Self {
        InspectorError::IoError(error)
    }
}
