//! Output sinks
//!
//! The finder writes its banner, match lines and summary to an
//! [`OutputSink`], keeping the matching logic independent of the console.

use colored::Colorize;

/// Kind of a line produced by a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// "Searching in ..." header
    Banner,
    /// One matched file
    Match,
    /// "Found ..." totals
    Summary,
}

/// Destination for the lines of a search
pub trait OutputSink {
    fn write_line(&mut self, kind: LineKind, line: &str);
}

/// Prints to stdout, highlighting banner and summary in yellow
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
    fn write_line(&mut self, kind: LineKind, line: &str) {
        match kind {
            LineKind::Match => println!("{}", line),
            LineKind::Banner | LineKind::Summary => println!("{}", line.yellow()),
        }
    }
}

/// Keeps every line in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<(LineKind, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of one kind, in output order
    pub fn lines_of(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
            .collect()
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, kind: LineKind, line: &str) {
        self.lines.push((kind, line.to_string()));
    }
}
