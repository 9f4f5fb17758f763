//! Pass-through layouts for directories without a `layout.*` file
//!
//! Every directory with routable content gets exactly one wrapping layout.
//! When the author did not write one, a placeholder that only renders its
//! children is written once into a cache directory and reused afterwards.

use crate::fs::FileSystem;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Default cache location, relative to the app root
pub const DEFAULT_CACHE_DIRECTORY: &str = ".react-router/layouts";

/// File name used for the routes directory itself
pub const ROOT_LAYOUT_NAME: &str = "root";

/// Source of every synthesized layout
pub const PLACEHOLDER_LAYOUT: &str = r#"import { Outlet } from "react-router";
export default function Layout() {
	return <Outlet />;
}"#;

/// Maps a route directory to the content reference of its pass-through layout
#[async_trait]
pub trait LayoutStore: Send + Sync {
    /// `route_dir` is relative to the routes directory (`""` for the routes
    /// directory itself). The placeholder is created on first use.
    async fn placeholder_for(&self, route_dir: &str) -> Result<String>;
}

/// Deterministic placeholder name for a route directory
///
/// ```
/// use jam_routes::layouts::placeholder_file_name;
///
/// assert_eq!(placeholder_file_name(""), "root");
/// assert_eq!(placeholder_file_name("_dashboard/account"), "_dashboard.account");
/// ```
pub fn placeholder_file_name(route_dir: &str) -> String {
    let name = route_dir.replace(['/', '\\'], ".");
    let name = name.trim_start_matches('.');

    if name.is_empty() {
        ROOT_LAYOUT_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Write-once placeholder layouts stored under `<root>/<cache_dir>`
#[derive(Clone)]
pub struct PlaceholderLayouts {
    fs: Arc<dyn FileSystem>,
    root: PathBuf,
    cache_dir: String,
}

impl PlaceholderLayouts {
    pub fn new(fs: Arc<dyn FileSystem>, root: impl Into<PathBuf>, cache_dir: impl Into<String>) -> Self {
        let cache_dir: String = cache_dir.into();
        Self {
            fs,
            root: root.into(),
            cache_dir: cache_dir.trim_end_matches('/').to_string(),
        }
    }

    /// Cache directory on the file system
    pub fn cache_path(&self) -> PathBuf {
        self.root.join(&self.cache_dir)
    }
}

#[async_trait]
impl LayoutStore for PlaceholderLayouts {
    async fn placeholder_for(&self, route_dir: &str) -> Result<String> {
        let file_name = format!("{}.layout.tsx", placeholder_file_name(route_dir));
        let cache_path = self.cache_path();

        if !self.fs.exists(&cache_path).await? {
            self.fs
                .create_dir_all(&cache_path)
                .await
                .context("Failed to create layout cache directory")?;
        }

        let file_path = cache_path.join(&file_name);
        if self.fs.exists(&file_path).await? {
            tracing::trace!("Reusing placeholder layout {:?}", file_path);
        } else {
            self.fs
                .write_file(&file_path, PLACEHOLDER_LAYOUT)
                .await
                .context("Failed to write placeholder layout")?;
            tracing::debug!("Wrote placeholder layout {:?}", file_path);
        }

        Ok(format!("{}/{}", self.cache_dir, file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;
    use std::path::Path;

    fn store(fs: &MemoryFileSystem) -> PlaceholderLayouts {
        PlaceholderLayouts::new(Arc::new(fs.clone()), "app", DEFAULT_CACHE_DIRECTORY)
    }

    #[test]
    fn test_placeholder_file_names() {
        assert_eq!(placeholder_file_name(""), "root");
        assert_eq!(placeholder_file_name("users"), "users");
        assert_eq!(placeholder_file_name("users/[id]"), "users.[id]");
        assert_eq!(placeholder_file_name("a\\b"), "a.b");
        assert_eq!(placeholder_file_name("/users"), "users");
    }

    #[tokio::test]
    async fn test_placeholder_is_written_once() {
        let fs = MemoryFileSystem::new();
        let layouts = store(&fs);

        let first = layouts.placeholder_for("users").await.unwrap();
        let second = layouts.placeholder_for("users").await.unwrap();

        assert_eq!(first, ".react-router/layouts/users.layout.tsx");
        assert_eq!(first, second);
        assert_eq!(fs.write_count(), 1);

        let contents = fs
            .read_file(Path::new("app/.react-router/layouts/users.layout.tsx"))
            .await
            .unwrap();
        assert_eq!(contents, PLACEHOLDER_LAYOUT);
    }

    #[tokio::test]
    async fn test_existing_placeholder_is_not_rewritten() {
        let fs = MemoryFileSystem::from_files([(
            "app/.react-router/layouts/root.layout.tsx",
            "custom",
        )]);
        let layouts = store(&fs);

        let reference = layouts.placeholder_for("").await.unwrap();

        assert_eq!(reference, ".react-router/layouts/root.layout.tsx");
        assert_eq!(fs.write_count(), 0);
        assert_eq!(
            fs.read_file("app/.react-router/layouts/root.layout.tsx").await,
            Some("custom".to_string())
        );
    }
}
