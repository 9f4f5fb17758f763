//! Conversion of the [`RouteNode`] tree into a nested route configuration
//!
//! Entries are only ever built through a [`RouteFactory`], so the converter
//! does not care what the router's configuration objects look like.
//!
//! ## Rules per node
//!
//! - **Layout** → `layout(file, convert(children))`
//! - **Index page** → `index(file)`
//! - **Not-found** → `route("*", file)`, appended after everything else at its level
//! - **Route directory** → resolved through its [`Partition`]:
//!   - layout child: `route(path, layout.file, convert(layout.children ++ other))`
//!   - index child: `route(path, index.file, convert(other))`
//!   - neither: `convert(other)` spliced into the current level
//!   - each dynamic child is resolved the same way at `path/segment` and
//!     emitted as a sibling, not nested under this directory's entry

pub mod partition;

pub use partition::Partition;

use crate::node::{NodeKind, RouteNode};

/// Constructors for the router's configuration entries
pub trait RouteFactory {
    type Entry;

    /// Index route rendered at its parent's path
    fn index(&self, file: &str) -> Self::Entry;

    /// Pathless route wrapping `children`
    fn layout(&self, file: &str, children: Vec<Self::Entry>) -> Self::Entry;

    /// Route at `path` rendering `file` around `children`
    fn route(&self, path: &str, file: &str, children: Vec<Self::Entry>) -> Self::Entry;
}

/// Convert one level of the route tree
pub fn convert<F: RouteFactory>(nodes: &[RouteNode], factory: &F) -> Vec<F::Entry> {
    convert_nodes(nodes, factory)
}

fn convert_nodes<'a, I, F>(nodes: I, factory: &F) -> Vec<F::Entry>
where
    I: IntoIterator<Item = &'a RouteNode>,
    F: RouteFactory,
{
    let mut routes = Vec::new();
    let mut not_found = Vec::new();

    for node in nodes {
        match node.kind {
            NodeKind::Layout => {
                let children = convert_nodes(&node.children, factory);
                routes.push(factory.layout(&node.file, children));
            }
            NodeKind::Page => {
                if node.is_index {
                    routes.push(factory.index(&node.file));
                }
            }
            NodeKind::NotFound => {
                not_found.push(factory.route(&node.path, &node.file, Vec::new()));
            }
            NodeKind::Route => {
                let partition = Partition::directory(&node.children);
                routes.extend(resolve(&node.path, &partition, factory));

                for child in &partition.dynamic {
                    let child_path = combine_paths(&node.path, &child.path);
                    let child_partition = Partition::hoisted(&child.children);
                    routes.extend(resolve(&child_path, &child_partition, factory));
                }
            }
        }
    }

    routes.extend(not_found);
    routes
}

/// Emit the entry for one route directory at `path`
fn resolve<F: RouteFactory>(path: &str, partition: &Partition<'_>, factory: &F) -> Vec<F::Entry> {
    match (partition.layout, partition.index) {
        (Some(layout), _) => {
            let nested = layout
                .children
                .iter()
                .chain(partition.other.iter().copied());
            let children = convert_nodes(nested, factory);
            vec![factory.route(path, &layout.file, children)]
        }
        (None, Some(index)) => {
            let children = convert_nodes(partition.other.iter().copied(), factory);
            vec![factory.route(path, &index.file, children)]
        }
        // TODO: decide whether a directory holding only route groups should keep its segment
        (None, None) => convert_nodes(partition.other.iter().copied(), factory),
    }
}

fn combine_paths(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}/{}", parent, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Factory rendering entries as compact strings
    struct Sketch;

    impl RouteFactory for Sketch {
        type Entry = String;

        fn index(&self, file: &str) -> String {
            format!("index({})", file)
        }

        fn layout(&self, file: &str, children: Vec<String>) -> String {
            format!("layout({})[{}]", file, children.join(", "))
        }

        fn route(&self, path: &str, file: &str, children: Vec<String>) -> String {
            if children.is_empty() {
                format!("route({}, {})", path, file)
            } else {
                format!("route({}, {})[{}]", path, file, children.join(", "))
            }
        }
    }

    #[test]
    fn test_combine_paths() {
        assert_eq!(combine_paths("", ":id"), ":id");
        assert_eq!(combine_paths("users", ":id"), "users/:id");
    }

    #[test]
    fn test_layout_and_index() {
        let tree = vec![RouteNode::layout(
            "root.tsx",
            vec![RouteNode::index_page("page.tsx")],
        )];

        assert_eq!(convert(&tree, &Sketch), vec!["layout(root.tsx)[index(page.tsx)]"]);
    }

    #[test]
    fn test_not_found_is_last() {
        let tree = vec![
            RouteNode::not_found("not-found.tsx"),
            RouteNode::index_page("page.tsx"),
        ];

        assert_eq!(
            convert(&tree, &Sketch),
            vec!["index(page.tsx)", "route(*, not-found.tsx)"]
        );
    }

    #[test]
    fn test_route_with_layout_child() {
        let tree = vec![RouteNode::route(
            "dashboard",
            false,
            vec![RouteNode::layout(
                "dashboard/layout.tsx",
                vec![RouteNode::index_page("dashboard/page.tsx")],
            )],
        )];

        assert_eq!(
            convert(&tree, &Sketch),
            vec!["route(dashboard, dashboard/layout.tsx)[index(dashboard/page.tsx)]"]
        );
    }

    #[test]
    fn test_index_page_acts_as_layout() {
        let tree = vec![RouteNode::route(
            "docs",
            false,
            vec![
                RouteNode::index_page("docs/page.tsx"),
                RouteNode::route("intro", false, vec![]),
            ],
        )];

        // "intro" has no layout or index of its own, so it contributes nothing
        assert_eq!(convert(&tree, &Sketch), vec!["route(docs, docs/page.tsx)"]);
    }

    #[test]
    fn test_route_without_layout_or_index_splices() {
        let tree = vec![RouteNode::route(
            "shop",
            false,
            vec![RouteNode::not_found("shop/not-found.tsx")],
        )];

        assert_eq!(convert(&tree, &Sketch), vec!["route(*, shop/not-found.tsx)"]);
    }

    #[test]
    fn test_dynamic_children_are_hoisted() {
        let tree = vec![RouteNode::route(
            "users",
            false,
            vec![
                RouteNode::route(
                    ":id",
                    true,
                    vec![RouteNode::layout(
                        "users/[id].tsx",
                        vec![RouteNode::index_page("users/[id]/page.tsx")],
                    )],
                ),
                RouteNode::layout("users/_group.tsx", vec![RouteNode::index_page("users/_group/page.tsx")]),
            ],
        )];

        assert_eq!(
            convert(&tree, &Sketch),
            vec![
                "route(users, users/_group.tsx)[index(users/_group/page.tsx)]",
                "route(users/:id, users/[id].tsx)[index(users/[id]/page.tsx)]",
            ]
        );
    }

    #[test]
    fn test_hoisted_route_resolves_index() {
        let tree = vec![RouteNode::route(
            "files",
            false,
            vec![RouteNode::route(
                "*path",
                true,
                vec![RouteNode::index_page("files/[...path]/page.tsx")],
            )],
        )];

        assert_eq!(
            convert(&tree, &Sketch),
            vec!["route(files/*path, files/[...path]/page.tsx)"]
        );
    }
}
