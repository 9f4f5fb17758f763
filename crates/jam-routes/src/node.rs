//! Intermediate route tree produced by the builder and consumed by the converter

use std::cmp::Ordering;

use crate::convention::classify_segment;

/// What a [`RouteNode`] was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// `page.*` file
    Page,
    /// `layout.*` file or a synthesized pass-through layout
    Layout,
    /// Route directory
    Route,
    /// `not-found.*` file
    NotFound,
}

/// One contributing file or directory of the route tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    /// URL segment contributed by this node; empty for index pages and layouts
    pub path: String,
    /// Content reference of the backing file (empty for route directories)
    pub file: String,
    pub kind: NodeKind,
    pub children: Vec<RouteNode>,
    /// `:param` and `*param` segments
    pub is_dynamic: bool,
    /// Only set for index pages
    pub is_index: bool,
}

impl RouteNode {
    /// Index page node for a `page.*` file
    pub fn index_page(file: impl Into<String>) -> Self {
        Self {
            path: String::new(),
            file: file.into(),
            kind: NodeKind::Page,
            children: Vec::new(),
            is_dynamic: false,
            is_index: true,
        }
    }

    /// Layout wrapping `children`; layouts never add to the path
    pub fn layout(file: impl Into<String>, children: Vec<RouteNode>) -> Self {
        Self {
            path: String::new(),
            file: file.into(),
            kind: NodeKind::Layout,
            children,
            is_dynamic: false,
            is_index: false,
        }
    }

    /// Not-found node, matched by the `*` path
    pub fn not_found(file: impl Into<String>) -> Self {
        Self {
            path: "*".to_string(),
            file: file.into(),
            kind: NodeKind::NotFound,
            children: Vec::new(),
            is_dynamic: false,
            is_index: false,
        }
    }

    /// Route node with an explicit segment
    pub fn route(path: impl Into<String>, is_dynamic: bool, children: Vec<RouteNode>) -> Self {
        Self {
            path: path.into(),
            file: String::new(),
            kind: NodeKind::Route,
            children,
            is_dynamic,
            is_index: false,
        }
    }

    /// Route node for a folder, with its segment parsed from the folder name
    ///
    /// Folders whose name parses to an empty segment (`page`, `layout`) keep
    /// the folder name as a static segment.
    pub fn route_for_folder(folder_name: &str, children: Vec<RouteNode>) -> Self {
        let segment = classify_segment(folder_name);
        let path = segment.path_segment();
        let path = if path.is_empty() {
            folder_name.to_string()
        } else {
            path
        };

        Self::route(path, segment.is_dynamic(), children)
    }

    pub fn is_route(&self) -> bool {
        self.kind == NodeKind::Route
    }

    pub fn is_layout(&self) -> bool {
        self.kind == NodeKind::Layout
    }

    pub fn is_index_page(&self) -> bool {
        self.kind == NodeKind::Page && self.is_index
    }
}

/// Matching precedence between two siblings of one directory
///
/// Route directories come before files; static routes before dynamic ones;
/// routes of the same kind compare by segment (`*` sorts before `:`).
/// Non-route nodes compare equal so a stable sort keeps their listing order.
pub fn sibling_order(a: &RouteNode, b: &RouteNode) -> Ordering {
    match (a.is_route(), b.is_route()) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (true, true) => a
            .is_dynamic
            .cmp(&b.is_dynamic)
            .then_with(|| a.path.cmp(&b.path)),
    }
}

/// Stable sort of one directory's nodes by [`sibling_order`]
pub fn sort_siblings(nodes: &mut [RouteNode]) {
    nodes.sort_by(sibling_order);
}
