//! 文件查找模块
//!
//! 这个模块提供了按名称通配符和文件大小搜索目录树的功能：
//! 一次深度优先遍历，匹配结果逐行输出，最后输出汇总信息。

pub mod filter;
pub mod options;
pub mod size;
pub mod walker;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::DirEntry;

pub use self::filter::{Candidate, FileFilter, NameFilter, NameKind, SizeFilter};
pub use self::options::FindOptions;
pub use self::size::{format_size, parse_size};
pub use self::walker::{FileWalker, Visit};
use crate::errors::{FindError, FindResult};
use crate::output::{LineKind, OutputSink};

/// Totals of one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub files_found: u64,
    pub dirs_found: u64,
    /// Sum of the sizes of all matched files
    pub total_file_size: u64,
}

impl SearchSummary {
    /// Summary lines; a zero count produces no line
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.files_found > 0 {
            lines.push(format!(
                "Found {} files in {}",
                self.files_found,
                format_size(self.total_file_size)
            ));
        }
        if self.dirs_found > 0 {
            lines.push(format!("Found {} directories", self.dirs_found));
        }
        lines
    }
}

/// Outcome of [`FileFinder::search`]
#[derive(Debug)]
pub struct SearchReport {
    /// Totals gathered up to the end of the walk, or up to the abort
    pub summary: SearchSummary,
    /// Fatal error that stopped the walk early
    pub aborted: Option<FindError>,
}

/// A matched entry
enum Found {
    File(u64),
    Directory,
}

/// 文件查找器
///
/// 绑定到一个根目录，每次搜索的计数都保存在返回的 [`SearchSummary`] 中。
#[derive(Debug)]
pub struct FileFinder {
    root: PathBuf,
    options: FindOptions,
}

impl FileFinder {
    /// 创建绑定到 `root` 的查找器，`root` 会被解析为绝对路径
    ///
    /// Only a missing root is an error here; any other stat failure is
    /// logged and left for the walk to report.
    pub fn new<P: AsRef<Path>>(root: P) -> FindResult<Self> {
        let root = root.as_ref();
        match fs::metadata(root) {
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(FindError::RootNotFound(root.to_path_buf()));
            }
            Err(err) => warn!("Cannot stat {}: {}", root.display(), err),
            Ok(_) => {}
        }

        let absolute = std::path::absolute(root).map_err(|source| FindError::InvalidPath {
            path: root.to_path_buf(),
            source,
        })?;

        Ok(Self {
            root: absolute,
            options: FindOptions::new(),
        })
    }

    /// 设置查找选项
    pub fn with_options(mut self, options: FindOptions) -> FindResult<Self> {
        options.validate()?;
        self.options = options;
        Ok(self)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn options(&self) -> &FindOptions {
        &self.options
    }

    /// Active criteria, e.g. "at least 1.0 KiB, filename matching *.mp3"
    pub fn criteria(&self) -> String {
        let size = SizeFilter::from_options(&self.options).description();
        let name = NameFilter::from_options(&self.options).description();
        [size, name].into_iter().flatten().collect::<Vec<_>>().join(", ")
    }

    pub fn banner(&self) -> String {
        let criteria = self.criteria();
        if criteria.is_empty() {
            format!("Searching in {}", self.root.display())
        } else {
            format!("Searching in {} for {}", self.root.display(), criteria)
        }
    }

    /// 遍历目录树，将匹配的文件写入 `sink`
    pub fn search<S: OutputSink + ?Sized>(&self, sink: &mut S) -> SearchReport {
        let name_filter = NameFilter::from_options(&self.options);
        let size_filter = SizeFilter::from_options(&self.options);
        let mut summary = SearchSummary::default();

        let walked = FileWalker::new(&self.options).walk(&self.root, |entry| {
            match self.examine(entry, &name_filter, &size_filter) {
                Ok(Some(Found::File(size))) => {
                    sink.write_line(
                        LineKind::Match,
                        &format!("{} {}", entry.path().display(), format_size(size)),
                    );
                    summary.total_file_size = summary.total_file_size.saturating_add(size);
                    summary.files_found += 1;
                }
                Ok(Some(Found::Directory)) => summary.dirs_found += 1,
                Ok(None) => {}
                Err(err) if err.is_fatal() => return Visit::Abort(err),
                Err(err) => warn!("{}", err),
            }
            Visit::Continue
        });

        debug!(
            "Search finished: {} files, {} directories",
            summary.files_found, summary.dirs_found
        );

        SearchReport {
            summary,
            aborted: walked.err(),
        }
    }

    /// 输出标题，执行搜索并输出汇总
    ///
    /// The summary is written even when the walk aborts; the abort error is
    /// returned afterwards.
    pub fn search_and_print<S: OutputSink + ?Sized>(&self, sink: &mut S) -> FindResult<SearchSummary> {
        sink.write_line(LineKind::Banner, &self.banner());

        let report = self.search(sink);
        for line in report.summary.lines() {
            sink.write_line(LineKind::Summary, &line);
        }

        match report.aborted {
            Some(err) => Err(err),
            None => Ok(report.summary),
        }
    }

    fn examine(
        &self,
        entry: &DirEntry,
        name_filter: &NameFilter,
        size_filter: &SizeFilter,
    ) -> FindResult<Option<Found>> {
        let is_dir = entry.file_type().is_dir();
        // directories are only candidates in dirname mode; files always are
        if is_dir && name_filter.kind() != NameKind::Directory {
            return Ok(None);
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!("Skipping non UTF-8 name {}", entry.path().display());
            return Ok(None);
        };
        let mut candidate = Candidate {
            path: entry.path(),
            name,
            is_dir,
            size: 0,
        };
        if !name_filter.matches(&candidate)? {
            return Ok(None);
        }

        if !is_dir {
            candidate.size = entry.metadata()?.len();
        }
        if !size_filter.matches(&candidate)? {
            return Ok(None);
        }

        Ok(Some(if is_dir {
            Found::Directory
        } else {
            Found::File(candidate.size)
        }))
    }
}
