//! File filtering functionality
//!
//! This module provides filters for matching entries by name and by size.

use std::cell::OnceCell;
use std::path::Path;

use glob::Pattern;

use super::options::{FindOptions, MATCH_ALL};
use super::size::format_size;
use crate::errors::{FindError, FindResult};

/// An entry offered to the filters
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub path: &'a Path,
    /// Base name of the entry
    pub name: &'a str,
    pub is_dir: bool,
    /// Size in bytes; only meaningful for files
    pub size: u64,
}

/// Trait for file filters
pub trait FileFilter {
    /// Check if the candidate matches the filter
    fn matches(&self, candidate: &Candidate<'_>) -> FindResult<bool>;

    /// Describe the criterion, or `None` when the filter accepts everything
    fn description(&self) -> Option<String>;
}

/// What a [`NameFilter`] is matched against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    File,
    Directory,
}

/// Filter for matching base names against a wildcard pattern.
///
/// The pattern is compiled on first use, so a malformed pattern surfaces
/// as an error from [`FileFilter::matches`] once the walk reaches the
/// first candidate.
#[derive(Debug)]
pub struct NameFilter {
    original_pattern: String,
    kind: NameKind,
    compiled: OnceCell<Pattern>,
}

impl NameFilter {
    /// Create a new NameFilter with the given pattern
    pub fn new(pattern: &str, kind: NameKind) -> Self {
        Self {
            original_pattern: pattern.to_string(),
            kind,
            compiled: OnceCell::new(),
        }
    }

    /// Build the filter for the active mode of the options
    pub fn from_options(options: &FindOptions) -> Self {
        let kind = if options.dirname_mode() {
            NameKind::Directory
        } else {
            NameKind::File
        };
        Self::new(options.active_pattern(), kind)
    }

    pub fn kind(&self) -> NameKind {
        self.kind
    }

    fn pattern(&self) -> FindResult<&Pattern> {
        if let Some(pattern) = self.compiled.get() {
            return Ok(pattern);
        }
        let pattern = Pattern::new(&self.original_pattern).map_err(|e| FindError::InvalidPattern {
            pattern: self.original_pattern.clone(),
            message: e.to_string(),
        })?;
        Ok(self.compiled.get_or_init(|| pattern))
    }
}

impl FileFilter for NameFilter {
    fn matches(&self, candidate: &Candidate<'_>) -> FindResult<bool> {
        Ok(self.pattern()?.matches(candidate.name))
    }

    fn description(&self) -> Option<String> {
        match self.kind {
            NameKind::File if self.original_pattern == MATCH_ALL => None,
            NameKind::File => Some(format!("filename matching {}", self.original_pattern)),
            NameKind::Directory => Some(format!("dirname matching {}", self.original_pattern)),
        }
    }
}

/// Filter for inclusive size bounds on files. Directories always pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeFilter {
    min: Option<u64>,
    max: Option<u64>,
}

impl SizeFilter {
    pub fn new(min: Option<u64>, max: Option<u64>) -> Self {
        Self { min, max }
    }

    pub fn from_options(options: &FindOptions) -> Self {
        Self::new(options.min_size, options.max_size)
    }

    /// Whether `size` lies within the bounds
    pub fn contains(&self, size: u64) -> bool {
        self.min.map_or(true, |min| size >= min) && self.max.map_or(true, |max| size <= max)
    }
}

impl FileFilter for SizeFilter {
    fn matches(&self, candidate: &Candidate<'_>) -> FindResult<bool> {
        Ok(candidate.is_dir || self.contains(candidate.size))
    }

    fn description(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(min) = self.min {
            parts.push(format!("at least {}", format_size(min)));
        }
        if let Some(max) = self.max {
            parts.push(format!("at max {}", format_size(max)));
        }
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}
