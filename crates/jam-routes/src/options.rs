// File: src/options.rs
// Purpose: Compiler options, loadable from jam-routes.toml

use crate::layouts::DEFAULT_CACHE_DIRECTORY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file name
pub const CONFIG_FILE: &str = "jam-routes.toml";

/// Options for [`crate::jam_routes`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JamRoutesOptions {
    /// The root directory of the React Router app (default: "./app")
    #[serde(default = "default_root_directory")]
    pub root_directory: PathBuf,

    /// Directory holding the route tree, relative to the root (default: "routes")
    #[serde(default = "default_routes_directory")]
    pub routes_directory: String,

    /// Glob patterns of entries to skip, matched against paths relative to the root
    #[serde(default)]
    pub ignored_file_patterns: Vec<String>,

    /// Where placeholder layouts are written, relative to the root
    #[serde(default = "default_layout_cache_directory")]
    pub layout_cache_directory: String,
}

fn default_root_directory() -> PathBuf {
    PathBuf::from("./app")
}

fn default_routes_directory() -> String {
    "routes".to_string()
}

fn default_layout_cache_directory() -> String {
    DEFAULT_CACHE_DIRECTORY.to_string()
}

impl Default for JamRoutesOptions {
    fn default() -> Self {
        Self {
            root_directory: default_root_directory(),
            routes_directory: default_routes_directory(),
            ignored_file_patterns: Vec::new(),
            layout_cache_directory: default_layout_cache_directory(),
        }
    }
}

impl JamRoutesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_directory(mut self, root_directory: impl Into<PathBuf>) -> Self {
        self.root_directory = root_directory.into();
        self
    }

    pub fn with_routes_directory(mut self, routes_directory: impl Into<String>) -> Self {
        self.routes_directory = routes_directory.into();
        self
    }

    pub fn with_ignored_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_file_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_layout_cache_directory(mut self, cache_directory: impl Into<String>) -> Self {
        self.layout_cache_directory = cache_directory.into();
        self
    }

    /// Absolute-or-relative path of the routes directory
    pub fn routes_path(&self) -> PathBuf {
        self.root_directory.join(&self.routes_directory)
    }

    /// Path of the placeholder layout cache
    pub fn layout_cache_path(&self) -> PathBuf {
        self.root_directory.join(&self.layout_cache_directory)
    }

    /// Load options from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return defaults
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let options: JamRoutesOptions = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(options)
    }

    /// Load options from ./jam-routes.toml
    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE)
    }
}
