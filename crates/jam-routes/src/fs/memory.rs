//! In-memory file system

use super::{DirEntry, FileSystem};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Tree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl Tree {
    fn insert_dir_all(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn insert_file(&mut self, path: PathBuf, contents: String) {
        if let Some(parent) = path.parent() {
            self.insert_dir_all(parent);
        }
        self.files.insert(path, contents);
    }
}

/// In-memory file system
///
/// Directories list their entries sorted by name. Writes are counted so
/// tests can assert that nothing was rewritten.
#[derive(Clone, Default)]
pub struct MemoryFileSystem {
    tree: Arc<RwLock<Tree>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file system holding `files`, with every parent directory present
    pub fn from_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<Path>,
        C: Into<String>,
    {
        let mut tree = Tree::default();
        for (path, contents) in files {
            tree.insert_file(normalize(path.as_ref()), contents.into());
        }

        Self {
            tree: Arc::new(RwLock::new(tree)),
            writes: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Add a file (and its parent directories) without counting it as a write
    pub async fn insert_file(&self, path: impl AsRef<Path>, contents: impl Into<String>) {
        let mut tree = self.tree.write().await;
        tree.insert_file(normalize(path.as_ref()), contents.into());
    }

    /// Add an empty directory
    pub async fn insert_dir(&self, path: impl AsRef<Path>) {
        let mut tree = self.tree.write().await;
        tree.insert_dir_all(&normalize(path.as_ref()));
    }

    /// Read a file's contents
    pub async fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let tree = self.tree.read().await;
        tree.files.get(&normalize(path.as_ref())).cloned()
    }

    /// Number of `write_file` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileSystem for MemoryFileSystem {
    async fn list_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = normalize(path);
        let tree = self.tree.read().await;

        if !tree.dirs.contains(&path) {
            return Err(anyhow!("No such directory: {:?}", path));
        }

        let child_name = |child: &PathBuf| -> Option<String> {
            (child.parent() == Some(path.as_path()))
                .then(|| child.file_name())
                .flatten()
                .map(|name| name.to_string_lossy().into_owned())
        };

        let mut listing: Vec<DirEntry> = tree
            .dirs
            .iter()
            .filter_map(|dir| child_name(dir).map(DirEntry::dir))
            .chain(
                tree.files
                    .keys()
                    .filter_map(|file| child_name(file).map(DirEntry::file)),
            )
            .collect();
        listing.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(listing)
    }

    async fn exists(&self, path: &Path) -> Result<bool> {
        let path = normalize(path);
        let tree = self.tree.read().await;
        Ok(tree.dirs.contains(&path) || tree.files.contains_key(&path))
    }

    async fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        let path = normalize(path);
        let mut tree = self.tree.write().await;

        match path.parent() {
            Some(parent) if parent.as_os_str().is_empty() || tree.dirs.contains(parent) => {}
            _ => return Err(anyhow!("Parent directory does not exist: {:?}", path)),
        }

        tree.files.insert(path, contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut tree = self.tree.write().await;
        tree.insert_dir_all(&normalize(path));
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// Drops `.` components so `./app/routes` and `app/routes` are the same key
fn normalize(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_memory_listing_is_sorted() {
        let fs = MemoryFileSystem::from_files([
            ("app/routes/page.tsx", ""),
            ("app/routes/about/page.tsx", ""),
            ("app/routes/_auth/login/page.tsx", ""),
        ]);

        let listing = fs.list_dir(Path::new("./app/routes")).await.unwrap();

        assert_eq!(
            listing,
            vec![
                DirEntry::dir("_auth"),
                DirEntry::dir("about"),
                DirEntry::file("page.tsx"),
            ]
        );
    }

    #[tokio::test]
    async fn test_memory_missing_directory() {
        let fs = MemoryFileSystem::new();
        assert!(fs.list_dir(Path::new("app/routes")).await.is_err());
    }

    #[tokio::test]
    async fn test_memory_write_requires_parent() {
        let fs = MemoryFileSystem::new();
        let file = Path::new("app/.cache/root.tsx");

        assert!(fs.write_file(file, "x").await.is_err());

        fs.create_dir_all(Path::new("app/.cache")).await.unwrap();
        fs.write_file(file, "x").await.unwrap();

        assert!(fs.exists(file).await.unwrap());
        assert_eq!(fs.read_file(file).await, Some("x".to_string()));
        assert_eq!(fs.write_count(), 1);
    }
}
