//! 错误类型（对外暴露）
//!
//! 注意：“无共同值”和“无可保存内容”属于正常结果，不在此枚举中。
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::session::{MAX_INPUTS, MIN_INPUTS};

#[derive(Debug, Error)]
pub enum HashIntersectError {
    /// 输入路径不存在
    #[error("file not found: {}", display_name(.path))]
    NotFound { path: PathBuf },

    /// 读取输入文件失败（权限、设备错误等）
    #[error("cannot read file {}: {source}", display_name(.path))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 保存结果失败
    #[error("cannot save file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("select at least {min} files to compare ({selected} selected)", min = MIN_INPUTS)]
    InsufficientInputs { selected: usize },

    #[error("at most {max} files can be compared ({given} given)", max = MAX_INPUTS)]
    TooManyInputs { given: usize },

    #[error("input slot {index} does not exist (slots 1..={max})", max = MAX_INPUTS)]
    InvalidSlot { index: usize },

    /// 配置文件加载或解析失败
    #[error("invalid settings file {}: {message}", .path.display())]
    Settings { path: PathBuf, message: String },
}

impl HashIntersectError {
    /// 出错的输入/输出路径（若有）
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound { path }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Settings { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}

/// 错误信息中只展示文件名，便于用户定位是哪一个输入
fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub type Result<T> = std::result::Result<T, HashIntersectError>;
