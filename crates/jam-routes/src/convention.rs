//! Naming conventions for route files and folders
//!
//! Pure functional parsing of file-system names into route segments.
//! All functions are **pure**: same input → same output, no side effects.

/// Source-file extensions recognized by every file convention
pub const SOURCE_EXTENSIONS: [&str; 4] = ["tsx", "ts", "jsx", "js"];

/// Represents the route meaning of a single file or folder name
///
/// # Examples
///
/// ```
/// use jam_routes::convention::{classify_segment, SegmentType};
///
/// assert_eq!(classify_segment("about"), SegmentType::Static("about".to_string()));
/// assert_eq!(classify_segment("[id]"), SegmentType::Param("id".to_string()));
/// assert_eq!(classify_segment("[...slug]"), SegmentType::CatchAll("slug".to_string()));
/// assert_eq!(classify_segment("page.tsx"), SegmentType::Index);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentType {
    /// `page` - index page, contributes no path segment
    Index,
    /// `layout` - wraps its siblings, contributes no path segment
    Layout,
    /// Catch-all segment: `[...slug]` → `*slug`
    CatchAll(String),
    /// Parameter segment: `[id]` → `:id`
    Param(String),
    /// Static text segment
    Static(String),
}

impl SegmentType {
    /// URL segment contributed by this name (empty for index pages and layouts)
    pub fn path_segment(&self) -> String {
        match self {
            SegmentType::Index | SegmentType::Layout => String::new(),
            SegmentType::CatchAll(name) => format!("*{}", name),
            SegmentType::Param(name) => format!(":{}", name),
            SegmentType::Static(name) => name.clone(),
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, SegmentType::CatchAll(_) | SegmentType::Param(_))
    }
}

/// Special files that carry meaning inside a route directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileConvention {
    /// `page.*` - the directory's index page
    Page,
    /// `layout.*` - wraps everything else in the directory
    Layout,
    /// `not-found.*` - fallback for unmatched paths at this level
    NotFound,
}

/// Strips one trailing source-file extension, leaving other names untouched
///
/// ```
/// use jam_routes::convention::strip_source_extension;
///
/// assert_eq!(strip_source_extension("page.tsx"), "page");
/// assert_eq!(strip_source_extension("styles.css"), "styles.css");
/// assert_eq!(strip_source_extension("[id]"), "[id]");
/// ```
pub fn strip_source_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if SOURCE_EXTENSIONS.contains(&ext) => stem,
        _ => name,
    }
}

/// Classifies a file or folder name into a segment type (pure function)
///
/// # Parsing Rules (evaluated in order, after stripping a source extension)
///
/// 1. **Index**: exactly `page`
/// 2. **Layout**: exactly `layout`
/// 3. **Catch-all**: `[...name]`
/// 4. **Parameter**: `[name]`
/// 5. **Static**: any other text
pub fn classify_segment(name: &str) -> SegmentType {
    let name = strip_source_extension(name);

    match name {
        "page" => return SegmentType::Index,
        "layout" => return SegmentType::Layout,
        _ => {}
    }

    match name.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(inner) => match inner.strip_prefix("...") {
            Some(param) => SegmentType::CatchAll(param.to_string()),
            None => SegmentType::Param(inner.to_string()),
        },
        None => SegmentType::Static(name.to_string()),
    }
}

/// Recognizes `page.*`, `layout.*` and `not-found.*` file names
///
/// Only the exact stem with one of [`SOURCE_EXTENSIONS`] qualifies, so
/// `page.test.tsx` or `page.css` are ordinary files.
pub fn file_convention(file_name: &str) -> Option<FileConvention> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if !SOURCE_EXTENSIONS.contains(&ext) {
        return None;
    }

    match stem {
        "page" => Some(FileConvention::Page),
        "layout" => Some(FileConvention::Layout),
        "not-found" => Some(FileConvention::NotFound),
        _ => None,
    }
}

/// Private files and route-group folders start with `_`
pub fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("about", SegmentType::Static("about".to_string()))]
    #[case("about.tsx", SegmentType::Static("about".to_string()))]
    #[case("page", SegmentType::Index)]
    #[case("page.jsx", SegmentType::Index)]
    #[case("layout.ts", SegmentType::Layout)]
    #[case("[id]", SegmentType::Param("id".to_string()))]
    #[case("[...path]", SegmentType::CatchAll("path".to_string()))]
    #[case("[...", SegmentType::Static("[...".to_string()))]
    #[case("[[...slug]]", SegmentType::Param("[...slug]".to_string()))]
    fn test_classify_segment(#[case] input: &str, #[case] expected: SegmentType) {
        assert_eq!(classify_segment(input), expected);
    }

    #[test]
    fn test_path_segments() {
        assert_eq!(classify_segment("[id]").path_segment(), ":id");
        assert_eq!(classify_segment("[...rest]").path_segment(), "*rest");
        assert_eq!(classify_segment("blog").path_segment(), "blog");
        assert_eq!(classify_segment("page").path_segment(), "");
    }

    #[test]
    fn test_dynamic_segments() {
        assert!(classify_segment("[id]").is_dynamic());
        assert!(classify_segment("[...rest]").is_dynamic());
        assert!(!classify_segment("users").is_dynamic());
        assert!(!classify_segment("layout.tsx").is_dynamic());
    }

    #[rstest]
    #[case("page.tsx", Some(FileConvention::Page))]
    #[case("page.js", Some(FileConvention::Page))]
    #[case("layout.jsx", Some(FileConvention::Layout))]
    #[case("not-found.ts", Some(FileConvention::NotFound))]
    #[case("page.css", None)]
    #[case("page.test.tsx", None)]
    #[case("Button.tsx", None)]
    #[case("page", None)]
    fn test_file_convention(#[case] input: &str, #[case] expected: Option<FileConvention>) {
        assert_eq!(file_convention(input), expected);
    }

    #[test]
    fn test_private_names() {
        assert!(is_private("_auth"));
        assert!(is_private("_helpers.ts"));
        assert!(!is_private("auth"));
    }
}
