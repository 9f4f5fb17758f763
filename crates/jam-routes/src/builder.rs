//! Directory scanner producing the intermediate [`RouteNode`] tree
//!
//! Each directory is listed once. Subdirectories are scanned on their own
//! tokio tasks and joined, in listing order, before the directory's nodes
//! are ordered and wrapped in their layout.

use crate::convention::{file_convention, is_private, FileConvention};
use crate::fs::FileSystem;
use crate::ignore::IgnoreMatcher;
use crate::layouts::LayoutStore;
use crate::node::{sort_siblings, RouteNode};
use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use tokio::task::JoinHandle;

type ScanFuture = Pin<Box<dyn Future<Output = Result<Vec<RouteNode>>> + Send>>;

struct BuildContext {
    fs: Arc<dyn FileSystem>,
    layouts: Arc<dyn LayoutStore>,
    ignore: IgnoreMatcher,
    root: PathBuf,
    start_dir: String,
}

/// Builds the route tree of one routes directory
#[derive(Clone)]
pub struct TreeBuilder {
    ctx: Arc<BuildContext>,
}

impl TreeBuilder {
    /// `start_dir` is the routes directory relative to `root`
    pub fn new(
        fs: Arc<dyn FileSystem>,
        layouts: Arc<dyn LayoutStore>,
        ignore: IgnoreMatcher,
        root: impl Into<PathBuf>,
        start_dir: &str,
    ) -> Self {
        Self {
            ctx: Arc::new(BuildContext {
                fs,
                layouts,
                ignore,
                root: root.into(),
                start_dir: normalize_dir(start_dir),
            }),
        }
    }

    /// Scan the routes directory
    ///
    /// Any file-system error aborts the whole build; no partial tree is returned.
    pub async fn build(&self) -> Result<Vec<RouteNode>> {
        scan_directory(self.ctx.clone(), self.ctx.start_dir.clone()).await
    }
}

/// Output of one directory entry, kept in listing order until joined
enum Slot {
    Ready(RouteNode),
    Pending {
        folder_name: String,
        task: JoinHandle<Result<Vec<RouteNode>>>,
    },
}

fn scan_directory(ctx: Arc<BuildContext>, dir: String) -> ScanFuture {
    Box::pin(async move {
        let full_path = ctx.root.join(&dir);
        let entries = ctx
            .fs
            .list_dir(&full_path)
            .await
            .with_context(|| format!("Failed to scan route directory: {:?}", full_path))?;

        tracing::debug!("Scanning {:?} ({} entries)", full_path, entries.len());

        let mut slots = Vec::with_capacity(entries.len());
        let mut layout_file: Option<String> = None;

        for entry in entries {
            let relative_path = join_relative(&dir, &entry.name);
            let ignored = if entry.is_dir {
                ctx.ignore.is_ignored_dir(&relative_path)
            } else {
                ctx.ignore.is_ignored(&relative_path)
            };
            if ignored {
                tracing::trace!("Ignoring {}", relative_path);
                continue;
            }

            if entry.is_dir {
                let task = tokio::spawn(scan_directory(ctx.clone(), relative_path));
                slots.push(Slot::Pending {
                    folder_name: entry.name,
                    task,
                });
                continue;
            }

            match file_convention(&entry.name) {
                Some(FileConvention::Layout) => {
                    if let Some(previous) = layout_file.replace(relative_path) {
                        tracing::warn!(
                            "Multiple layout files in {:?}; {} replaces {}",
                            full_path,
                            entry.name,
                            previous
                        );
                    }
                }
                _ if is_private(&entry.name) => {}
                Some(FileConvention::Page) => {
                    slots.push(Slot::Ready(RouteNode::index_page(content_ref(&relative_path))));
                }
                Some(FileConvention::NotFound) => {
                    slots.push(Slot::Ready(RouteNode::not_found(content_ref(&relative_path))));
                }
                None => {}
            }
        }

        let mut nodes = Vec::with_capacity(slots.len());
        for slot in slots {
            match slot {
                Slot::Ready(node) => nodes.push(node),
                Slot::Pending { folder_name, task } => {
                    let children = task
                        .await
                        .with_context(|| format!("Scan task for {:?} failed", folder_name))??;

                    // Route groups splice their nodes into this directory
                    if is_private(&folder_name) {
                        nodes.extend(children);
                    } else {
                        nodes.push(RouteNode::route_for_folder(&folder_name, children));
                    }
                }
            }
        }

        sort_siblings(&mut nodes);

        if let Some(layout) = layout_file {
            return Ok(vec![RouteNode::layout(content_ref(&layout), nodes)]);
        }

        if !nodes.is_empty() && !nodes.iter().any(RouteNode::is_layout) {
            let route_dir = route_dir(&ctx.start_dir, &dir);
            let file = ctx.layouts.placeholder_for(route_dir).await?;
            return Ok(vec![RouteNode::layout(file, nodes)]);
        }

        Ok(nodes)
    })
}

fn normalize_dir(dir: &str) -> String {
    let dir = dir.replace('\\', "/");
    let dir = dir.strip_prefix("./").unwrap_or(&dir);
    dir.trim_matches('/').to_string()
}

fn join_relative(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Content reference of a file, relative to the app root
fn content_ref(relative_path: &str) -> String {
    format!("./{}", relative_path)
}

/// Directory path relative to the routes directory
fn route_dir<'a>(start_dir: &str, dir: &'a str) -> &'a str {
    dir.strip_prefix(start_dir)
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(dir)
}
