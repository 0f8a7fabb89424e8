//! 命令行接口
//!
//! 本模块提供了命令行参数解析和验证功能，
//! 并将参数转换为 [`FindOptions`]。

use clap::Parser;
use crate::errors::{FindError, FindResult};
use crate::finder::options::FindOptions;

/// 按名称通配符和文件大小搜索目录树
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 搜索目录（默认：当前目录）
    #[arg(default_value = "./")]
    pub in_dir: String,

    /// 文件名通配符模式，例如 "*.mp3"
    #[arg(long, value_name = "GLOB")]
    pub filename: Option<String>,

    /// 目录名通配符模式（不能与 --filename 同时使用）
    #[arg(long, value_name = "GLOB")]
    pub dirname: Option<String>,

    /// 最小文件大小，例如 "1K"、"2.8 MiB"
    #[arg(long, value_name = "SIZE")]
    pub min_size: Option<String>,

    /// 最大文件大小
    #[arg(long, value_name = "SIZE")]
    pub max_size: Option<String>,

    /// 最大搜索深度
    #[arg(long, value_name = "NUM")]
    pub max_depth: Option<usize>,

    /// 跟随符号链接
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// 启用调试日志
    #[arg(short, long)]
    pub debug: bool,

    /// 禁用彩色输出
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// 验证命令行参数
    pub fn validate(&self) -> FindResult<()> {
        if let (Some(filename), Some(dirname)) = (&self.filename, &self.dirname) {
            return Err(FindError::ConflictingPatterns {
                filename: filename.clone(),
                dirname: dirname.clone(),
            });
        }
        Ok(())
    }

    /// 构建查找选项，大小字符串在此解析
    pub fn build_options(&self) -> FindResult<FindOptions> {
        self.validate()?;

        let mut options = FindOptions::new()
            .with_filename(self.filename.as_deref().unwrap_or_default())
            .with_dirname(self.dirname.as_deref().unwrap_or_default())
            .with_max_depth(self.max_depth)
            .with_follow_links(self.follow_links);

        if let Some(min_size) = &self.min_size {
            options = options.with_min_size(min_size)?;
        }
        if let Some(max_size) = &self.max_size {
            options = options.with_max_size(max_size)?;
        }

        options.validate()?;
        Ok(options)
    }
}
