//! React Router route configuration entries

use crate::convert::RouteFactory;
use serde::{Deserialize, Serialize};

/// One entry of the compiled route configuration
///
/// Serializes to the shape React Router's `routes.ts` helpers produce:
/// `{ "path": "users", "file": "./routes/users/layout.tsx", "children": [...] }`
/// for routes, `{ "index": true, "file": ... }` for index routes and
/// `{ "file": ..., "children": [...] }` for layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfigEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    pub file: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub index: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteConfigEntry>,
}

impl RouteConfigEntry {
    pub fn is_layout(&self) -> bool {
        self.path.is_none() && !self.index
    }

    /// Depth-first iterator over this entry and all of its descendants
    pub fn walk(&self) -> impl Iterator<Item = &RouteConfigEntry> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let entry = stack.pop()?;
            stack.extend(entry.children.iter().rev());
            Some(entry)
        })
    }
}

/// Counts entries of a configuration, nested ones included
pub fn count_entries(routes: &[RouteConfigEntry]) -> usize {
    routes.iter().map(|route| route.walk().count()).sum()
}

/// Builds [`RouteConfigEntry`] values
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactRouterFactory;

impl RouteFactory for ReactRouterFactory {
    type Entry = RouteConfigEntry;

    fn index(&self, file: &str) -> RouteConfigEntry {
        RouteConfigEntry {
            path: None,
            file: file.to_string(),
            index: true,
            children: Vec::new(),
        }
    }

    fn layout(&self, file: &str, children: Vec<RouteConfigEntry>) -> RouteConfigEntry {
        RouteConfigEntry {
            path: None,
            file: file.to_string(),
            index: false,
            children,
        }
    }

    fn route(&self, path: &str, file: &str, children: Vec<RouteConfigEntry>) -> RouteConfigEntry {
        RouteConfigEntry {
            path: Some(path.to_string()),
            file: file.to_string(),
            index: false,
            children,
        }
    }
}
