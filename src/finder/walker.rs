//! 文件系统遍历功能
//!
//! 本模块对 walkdir 进行封装：逐个访问条目，单个条目的错误只记录警告，
//! 访问者可以通过返回 [`Visit::Abort`] 立即终止整个遍历。

use std::path::Path;

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::options::FindOptions;
use crate::errors::{FindError, FindResult};

/// 访问者对每个条目的处理结果
#[derive(Debug)]
pub enum Visit {
    /// 继续遍历
    Continue,
    /// 终止遍历，并返回该错误
    Abort(FindError),
}

/// 使用给定选项处理文件系统遍历
#[derive(Debug)]
pub struct FileWalker<'a> {
    options: &'a FindOptions,
}

impl<'a> FileWalker<'a> {
    /// 使用给定选项创建新的 FileWalker
    pub fn new(options: &'a FindOptions) -> Self {
        Self { options }
    }

    /// 从给定路径开始深度优先遍历，根目录本身也会交给访问者
    pub fn walk<P, F>(&self, root: P, mut visit: F) -> FindResult<()>
    where
        P: AsRef<Path>,
        F: FnMut(&DirEntry) -> Visit,
    {
        let root = root.as_ref();
        debug!("Walking {}", root.display());

        for entry in self.init_walker(root) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    // 单个条目的错误不影响其余部分
                    warn!("{}", FindError::from(err));
                    continue;
                }
            };

            if let Visit::Abort(err) = visit(&entry) {
                debug!("Walk aborted at {}", entry.path().display());
                return Err(err);
            }
        }

        Ok(())
    }

    /// 使用配置的选项初始化目录遍历器
    fn init_walker(&self, path: &Path) -> WalkDir {
        let mut walker = WalkDir::new(path).follow_links(self.options.follow_links);

        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }

        walker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn create_test_structure() -> std::io::Result<TempDir> {
        let temp_dir = TempDir::new()?;

        File::create(temp_dir.path().join("file1.txt"))?.write_all(b"test")?;
        std::fs::create_dir(temp_dir.path().join("dir1"))?;
        File::create(temp_dir.path().join("dir1").join("file2.txt"))?.write_all(b"test")?;

        Ok(temp_dir)
    }

    fn collect(options: &FindOptions, root: &Path) -> FindResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        FileWalker::new(options).walk(root, |entry| {
            entries.push(entry.clone());
            Visit::Continue
        })?;
        Ok(entries)
    }

    #[test]
    fn test_file_walker() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_test_structure()?;
        let entries = collect(&FindOptions::new(), temp_dir.path())?;

        // root + 2 files + 1 subdir
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].path(), temp_dir.path());
        Ok(())
    }

    #[test]
    fn test_file_walker_max_depth() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_test_structure()?;
        let options = FindOptions::new().with_max_depth(Some(1));
        let entries = collect(&options, temp_dir.path())?;

        // root + 1 file + 1 subdir
        assert_eq!(entries.len(), 3);
        Ok(())
    }

    #[test]
    fn test_file_root_is_visited() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_test_structure()?;
        let entries = collect(&FindOptions::new(), &temp_dir.path().join("file1.txt"))?;

        assert_eq!(entries.len(), 1);
        assert!(entries[0].path().ends_with("file1.txt"));
        Ok(())
    }

    #[test]
    fn test_abort_stops_walk() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = create_test_structure()?;
        let options = FindOptions::new();
        let mut visited = 0;

        let result = FileWalker::new(&options).walk(temp_dir.path(), |_| {
            visited += 1;
            Visit::Abort(FindError::WalkDirError("stop".to_string()))
        });

        assert!(matches!(result, Err(FindError::WalkDirError(_))));
        assert_eq!(visited, 1);
        Ok(())
    }

    #[test]
    fn test_missing_root_is_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let entries = collect(&FindOptions::new(), &temp_dir.path().join("gone"))?;
        assert!(entries.is_empty());
        Ok(())
    }
}
