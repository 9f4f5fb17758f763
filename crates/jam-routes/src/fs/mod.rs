//! File-system access used by the route compiler
//!
//! The builder only needs four operations, so they sit behind a trait. The
//! disk backend is used by [`crate::jam_routes`]; the memory backend makes the
//! builder testable without touching the real file system.

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

pub mod disk;
pub mod memory;

pub use disk::DiskFileSystem;
pub use memory::MemoryFileSystem;

/// A single directory listing entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// Trait for file-system backends
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// List a directory in the backend's listing order
    async fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// Check if a file or directory exists
    async fn exists(&self, path: &Path) -> Result<bool>;

    /// Write a file, replacing any previous content
    async fn write_file(&self, path: &Path, contents: &str) -> Result<()>;

    /// Create a directory and all missing parents
    async fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Get backend name
    fn name(&self) -> &'static str;
}
