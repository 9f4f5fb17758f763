//! Glob-based filtering of route entries

use anyhow::{Context, Result};
use glob::{MatchOptions, Pattern};

/// `*` and `?` stay within one path component and never match a leading dot;
/// `**` spans directories.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Compiled set of ignore patterns
///
/// Paths are tested relative to the app root with `/` separators, e.g.
/// `routes/admin/page.tsx`. A trailing `/**` also matches the directory it
/// hangs off, so the whole subtree is skipped without being listed.
///
/// ```
/// use jam_routes::IgnoreMatcher;
///
/// let matcher = IgnoreMatcher::new(["**/ignored/**"]).unwrap();
/// assert!(matcher.is_ignored("routes/ignored/page.tsx"));
/// assert!(matcher.is_ignored_dir("routes/ignored"));
/// assert!(!matcher.is_ignored("routes/visible/page.tsx"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    patterns: Vec<Pattern>,
    /// Patterns ending in `/**` with that suffix removed
    dir_patterns: Vec<Pattern>,
}

impl IgnoreMatcher {
    /// Compile every pattern; an invalid pattern fails the whole set
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid ignore pattern: {:?}", pattern))
            })
            .collect::<Result<Vec<_>>>()?;

        let dir_patterns = patterns
            .iter()
            .filter_map(|pattern| pattern.as_str().strip_suffix("/**"))
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| {
                Pattern::new(prefix)
                    .with_context(|| format!("Invalid ignore pattern: {:?}", prefix))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            patterns,
            dir_patterns,
        })
    }

    /// True when any pattern matches the file at `relative_path`
    pub fn is_ignored(&self, relative_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(relative_path, MATCH_OPTIONS))
    }

    /// True when the directory at `relative_path` or everything below it is ignored
    pub fn is_ignored_dir(&self, relative_path: &str) -> bool {
        self.is_ignored(relative_path)
            || self
                .dir_patterns
                .iter()
                .any(|pattern| pattern.matches_with(relative_path, MATCH_OPTIONS))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_matcher_ignores_nothing() {
        let matcher = IgnoreMatcher::default();
        assert!(matcher.is_empty());
        assert!(!matcher.is_ignored("routes/page.tsx"));
    }

    #[test]
    fn test_globstar_matches_nested_files() {
        let matcher = IgnoreMatcher::new(["**/ignored/**"]).unwrap();
        assert!(matcher.is_ignored("routes/ignored/page.tsx"));
        assert!(matcher.is_ignored("routes/a/ignored/b/page.tsx"));
        assert!(!matcher.is_ignored("routes/not-ignored/page.tsx"));
    }

    #[test]
    fn test_globstar_suffix_covers_the_directory_itself() {
        let matcher = IgnoreMatcher::new(["**/ignored/**", "routes/drafts/**"]).unwrap();

        assert!(matcher.is_ignored_dir("routes/ignored"));
        assert!(matcher.is_ignored_dir("routes/a/ignored"));
        assert!(matcher.is_ignored_dir("routes/drafts"));
        assert!(!matcher.is_ignored_dir("routes/visible"));
        assert!(!matcher.is_ignored_dir("routes/ignored-not"));

        // A file with the same name is not a directory
        assert!(!matcher.is_ignored("routes/ignored"));
    }

    #[test]
    fn test_dir_check_includes_plain_patterns() {
        let matcher = IgnoreMatcher::new(["routes/*.test.tsx", "routes/legacy"]).unwrap();
        assert!(matcher.is_ignored_dir("routes/legacy"));
        assert!(!matcher.is_ignored_dir("routes/about"));
    }

    #[test]
    fn test_star_stays_in_one_component() {
        let matcher = IgnoreMatcher::new(["routes/*.test.tsx"]).unwrap();
        assert!(matcher.is_ignored("routes/page.test.tsx"));
        assert!(!matcher.is_ignored("routes/about/page.test.tsx"));
    }

    #[test]
    fn test_any_pattern_matches() {
        let matcher = IgnoreMatcher::new(["**/components/**", "**/*.stories.tsx"]).unwrap();
        assert_eq!(matcher.len(), 2);
        assert!(matcher.is_ignored("routes/components/Button.tsx"));
        assert!(matcher.is_ignored("routes/about/Card.stories.tsx"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = IgnoreMatcher::new(["routes/a**b"]).unwrap_err();
        assert!(err.to_string().contains("Invalid ignore pattern"));
    }
}
