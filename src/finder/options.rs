//! Options for file finding
//!
//! This module provides options for configuring the search: the name
//! pattern, the matching mode, the size bounds and the traversal itself.

use crate::errors::{FindError, FindResult};
use super::size::parse_size;

/// Pattern that matches every name
pub const MATCH_ALL: &str = "*";

/// Options for configuring the file finding process
#[derive(Debug, Clone, PartialEq)]
pub struct FindOptions {
    /// Wildcard pattern for file names
    pub filename: String,

    /// Wildcard pattern for directory names; switches to directory mode
    pub dirname: Option<String>,

    /// Smallest accepted file size in bytes (inclusive)
    pub min_size: Option<u64>,

    /// Largest accepted file size in bytes (inclusive)
    pub max_size: Option<u64>,

    /// Maximum depth to search
    pub max_depth: Option<usize>,

    /// Whether to follow symbolic links
    pub follow_links: bool,
}

impl FindOptions {
    /// Create a new FindOptions with default values
    pub fn new() -> Self {
        Self {
            filename: MATCH_ALL.to_string(),
            dirname: None,
            min_size: None,
            max_size: None,
            max_depth: None,
            follow_links: false,
        }
    }

    /// Set the file name pattern; an empty pattern matches everything
    pub fn with_filename(mut self, pattern: &str) -> Self {
        self.filename = if pattern.is_empty() {
            MATCH_ALL.to_string()
        } else {
            pattern.to_string()
        };
        self
    }

    /// Set the directory name pattern; an empty pattern keeps file mode
    pub fn with_dirname(mut self, pattern: &str) -> Self {
        self.dirname = (!pattern.is_empty()).then(|| pattern.to_string());
        self
    }

    /// Set the minimum size from a human readable string such as "1K"
    pub fn with_min_size(mut self, text: &str) -> FindResult<Self> {
        self.min_size = parse_bound(text)?;
        Ok(self)
    }

    /// Set the maximum size from a human readable string such as "2.8 MiB"
    pub fn with_max_size(mut self, text: &str) -> FindResult<Self> {
        self.max_size = parse_bound(text)?;
        Ok(self)
    }

    /// Set the maximum depth to search
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Whether directories rather than files are being searched for
    pub fn dirname_mode(&self) -> bool {
        self.dirname.is_some()
    }

    /// The pattern of the active mode
    pub fn active_pattern(&self) -> &str {
        self.dirname.as_deref().unwrap_or(&self.filename)
    }

    /// Reject option combinations that cannot describe a single search
    pub fn validate(&self) -> FindResult<()> {
        match &self.dirname {
            Some(dirname) if self.filename != MATCH_ALL => Err(FindError::ConflictingPatterns {
                filename: self.filename.clone(),
                dirname: dirname.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl Default for FindOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank input leaves the bound unconstrained
fn parse_bound(text: &str) -> FindResult<Option<u64>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_size(text).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_options_defaults() {
        let options = FindOptions::new();
        assert_eq!(options.filename, "*");
        assert_eq!(options.dirname, None);
        assert_eq!(options.min_size, None);
        assert_eq!(options.max_size, None);
        assert_eq!(options.max_depth, None);
        assert!(!options.follow_links);
        assert!(!options.dirname_mode());
    }

    #[test]
    fn test_empty_filename_matches_all() {
        let options = FindOptions::new().with_filename("*.mp3").with_filename("");
        assert_eq!(options.filename, "*");
    }

    #[test]
    fn test_dirname_switches_mode() {
        let options = FindOptions::new().with_dirname("target");
        assert!(options.dirname_mode());
        assert_eq!(options.active_pattern(), "target");

        let options = FindOptions::new().with_dirname("");
        assert!(!options.dirname_mode());
        assert_eq!(options.active_pattern(), "*");
    }

    #[test]
    fn test_size_bounds() -> Result<(), Box<dyn std::error::Error>> {
        let options = FindOptions::new().with_min_size("1K")?.with_max_size("2.8 MiB")?;
        assert_eq!(options.min_size, Some(1024));
        assert_eq!(options.max_size, Some(2936012));

        let options = FindOptions::new().with_min_size("  ")?.with_max_size("0")?;
        assert_eq!(options.min_size, None);
        assert_eq!(options.max_size, Some(0));

        assert!(FindOptions::new().with_min_size("12 furlongs").is_err());
        Ok(())
    }

    #[test]
    fn test_validate_conflicting_patterns() {
        let options = FindOptions::new().with_filename("*.txt").with_dirname("docs");
        assert!(matches!(
            options.validate(),
            Err(FindError::ConflictingPatterns { .. })
        ));

        let options = FindOptions::new().with_dirname("docs");
        assert!(options.validate().is_ok());
    }
}
