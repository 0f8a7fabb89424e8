//! 按名称和大小查找文件的库
//!
//! 本库递归遍历目录树，报告名称匹配通配符模式、大小落在给定范围内的文件
//! （或者在目录名模式下报告匹配的目录），并输出数量和总大小的汇总。
//!
//! # 示例
//!
//! ```no_run
//! use file_finder::finder::{FileFinder, FindOptions};
//! use file_finder::output::ConsoleSink;
//!
//! let options = FindOptions::new()
//!     .with_filename("*.mp3")
//!     .with_min_size("1 MiB")
//!     .unwrap();
//!
//! let finder = FileFinder::new("./music").unwrap().with_options(options).unwrap();
//! let summary = finder.search_and_print(&mut ConsoleSink).unwrap();
//! println!("{} files", summary.files_found);
//! ```

pub mod cli;
pub mod errors;
pub mod finder;
pub mod output;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::{FileFinder, SearchSummary};
