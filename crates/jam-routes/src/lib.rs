//! # Jam Routes
//!
//! Compiles a file-system route directory into a nested React Router route
//! configuration. Supported conventions:
//! - Index pages (`page.tsx`)
//! - Layouts (`layout.tsx`), synthesized when a directory has none
//! - Not-found pages (`not-found.tsx`), always matched last
//! - Dynamic parameters (`[id]` → `:id`)
//! - Catch-all segments (`[...slug]` → `*slug`)
//! - Route groups (`_group/`) and private files (`_helpers.ts`)
//!
//! Any of the `tsx`, `ts`, `jsx` and `js` extensions is accepted.
//!
//! ## Two phases
//!
//! 1. [`TreeBuilder`] scans the routes directory into a [`RouteNode`] tree,
//!    ordering siblings so static routes are offered before dynamic ones.
//! 2. [`convert`] turns that tree into configuration entries through a
//!    [`RouteFactory`].
//!
//! ## Example
//!
//! ```no_run
//! use jam_routes::{jam_routes, JamRoutesOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let options = JamRoutesOptions::new()
//!         .with_root_directory("./app")
//!         .with_ignored_patterns(["**/components/**"]);
//!
//!     let routes = jam_routes(&options).await?;
//!     println!("{}", serde_json::to_string_pretty(&routes)?);
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use std::sync::Arc;

pub mod builder;
pub mod config;
pub mod convention;
pub mod convert;
pub mod fs;
pub mod ignore;
pub mod layouts;
pub mod node;
pub mod options;

pub use builder::TreeBuilder;
pub use config::{count_entries, ReactRouterFactory, RouteConfigEntry};
pub use convert::{convert, RouteFactory};
pub use fs::{DiskFileSystem, FileSystem, MemoryFileSystem};
pub use ignore::IgnoreMatcher;
pub use layouts::{LayoutStore, PlaceholderLayouts};
pub use node::{NodeKind, RouteNode};
pub use options::JamRoutesOptions;

/// Compile the routes directory on disk into a route configuration
pub async fn jam_routes(options: &JamRoutesOptions) -> Result<Vec<RouteConfigEntry>> {
    compile_with(options, Arc::new(DiskFileSystem::new())).await
}

/// Compile against any file-system backend
pub async fn compile_with(
    options: &JamRoutesOptions,
    fs: Arc<dyn FileSystem>,
) -> Result<Vec<RouteConfigEntry>> {
    let tree = build_tree(options, fs.clone()).await?;
    let routes = convert(&tree, &ReactRouterFactory);

    tracing::info!(
        "Compiled {} route entries from {:?} ({} backend)",
        count_entries(&routes),
        options.routes_path(),
        fs.name()
    );

    Ok(routes)
}

/// Run only the scanning phase, placeholder layouts included
pub async fn build_tree(options: &JamRoutesOptions, fs: Arc<dyn FileSystem>) -> Result<Vec<RouteNode>> {
    let ignore = IgnoreMatcher::new(&options.ignored_file_patterns)?;
    if !ignore.is_empty() {
        tracing::debug!("Using {} ignore patterns", ignore.len());
    }

    let layouts = Arc::new(PlaceholderLayouts::new(
        fs.clone(),
        options.root_directory.clone(),
        options.layout_cache_directory.clone(),
    ));

    TreeBuilder::new(
        fs,
        layouts,
        ignore,
        options.root_directory.clone(),
        &options.routes_directory,
    )
    .build()
    .await
}
