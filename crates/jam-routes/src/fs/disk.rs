//! Disk-backed file system

use super::{DirEntry, FileSystem};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// File system backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFileSystem;

impl DiskFileSystem {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileSystem for DiskFileSystem {
    async fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let mut entries = fs::read_dir(path)
            .await
            .with_context(|| format!("Failed to read directory: {:?}", path))?;

        let mut listing = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to read directory entry in {:?}", path))?
        {
            let file_type = entry
                .file_type()
                .await
                .with_context(|| format!("Failed to stat {:?}", entry.path()))?;

            listing.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }

        Ok(listing)
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        fs::try_exists(path)
            .await
            .with_context(|| format!("Failed to check existence of {:?}", path))
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents)
            .await
            .with_context(|| format!("Failed to write file: {:?}", path))
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .await
            .with_context(|| format!("Failed to create directory: {:?}", path))
    }

    fn name(&self) -> &'static str {
        "disk"
    }
}
