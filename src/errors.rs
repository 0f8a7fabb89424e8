use std::path::PathBuf;
use thiserror::Error;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// file-finder 的自定义错误类型
#[derive(Debug, Error)]
pub enum FindError {
    /// 搜索根目录不存在
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// 无法解析为绝对路径
    #[error("invalid path {}: {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 大小字符串格式错误
    #[error("invalid size '{input}': {reason}")]
    InvalidSize { input: String, reason: String },

    /// 未知的大小单位
    #[error("unknown size unit '{unit}' in '{input}'")]
    UnknownSizeUnit { input: String, unit: String },

    /// 同时指定了文件名和目录名模式
    #[error("cannot search for both filename '{filename}' and dirname '{dirname}'")]
    ConflictingPatterns { filename: String, dirname: String },

    /// 通配符模式错误
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// 文件系统错误（其他IO错误）
    #[error("filesystem error {}: {source}", path.display())]
    FilesystemError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },

    /// 遍历目录时的错误
    #[error("walk error: {0}")]
    WalkDirError(String),
}

impl FindError {
    /// Whether the error stops the whole search rather than a single entry
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            FindError::FilesystemError { .. } | FindError::WalkDirError(_)
        )
    }
}

impl From<walkdir::Error> for FindError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        match err.io_error() {
            Some(io_err) => FindError::FilesystemError {
                source: std::io::Error::new(io_err.kind(), io_err.to_string()),
                path,
            },
            None => FindError::WalkDirError(err.to_string()),
        }
    }
}
