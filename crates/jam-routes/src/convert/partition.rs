//! Partitioning of a route directory's children
//!
//! Splits one ordered child list into four disjoint labeled groups so the
//! converter never has to ask "is this the layout or the index?" again.

use crate::node::RouteNode;

/// Children of a route directory, grouped by role
///
/// Every input node lands in exactly one group; `dynamic` and `other` keep
/// the input order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    /// First layout child
    pub layout: Option<&'a RouteNode>,
    /// First index page, only taken when there is no layout child
    pub index: Option<&'a RouteNode>,
    /// Dynamic route children, emitted as siblings at a combined path
    pub dynamic: Vec<&'a RouteNode>,
    /// Everything else
    pub other: Vec<&'a RouteNode>,
}

impl<'a> Partition<'a> {
    /// Partition of a route directory; dynamic routes are split out for hoisting
    pub fn directory(children: &'a [RouteNode]) -> Self {
        Self::split(children, true)
    }

    /// Partition of a hoisted dynamic route; its dynamic children stay nested
    pub fn hoisted(children: &'a [RouteNode]) -> Self {
        Self::split(children, false)
    }

    fn split(children: &'a [RouteNode], hoist_dynamic: bool) -> Self {
        let has_layout = children.iter().any(RouteNode::is_layout);

        let partition = children.iter().fold(Self::default(), |mut partition, child| {
            if child.is_layout() && partition.layout.is_none() {
                partition.layout = Some(child);
            } else if !has_layout && child.is_index_page() && partition.index.is_none() {
                partition.index = Some(child);
            } else if hoist_dynamic && child.is_route() && child.is_dynamic {
                partition.dynamic.push(child);
            } else {
                partition.other.push(child);
            }
            partition
        });

        for page in partition.nested_index_pages() {
            tracing::warn!(
                "Index page {} sits beside a route group layout and is nested under it",
                page.file
            );
        }

        partition
    }

    /// Index pages that end up under the layout child
    pub fn nested_index_pages(&self) -> impl Iterator<Item = &'a RouteNode> + '_ {
        let has_layout = self.layout.is_some();
        self.other
            .iter()
            .copied()
            .filter(move |node| has_layout && node.is_index_page())
    }
}
