//! 哈希列表读取（每行一个值）
use std::collections::hash_set;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{HashIntersectError, Result};

/// 单个输入文件中去重后的哈希值集合
/// - 值为裁剪首尾空白后的非空行，区分大小写
/// - 不校验哈希格式，任意非空行都视为一个值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashList {
    source: PathBuf,
    values: HashSet<String>,
}

impl HashList {
    /// 由内存中的值构建（空白值会被丢弃）
    pub fn from_values<I, S>(source: impl Into<PathBuf>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let values = values
            .into_iter()
            .filter_map(|v| {
                let v = v.as_ref().trim();
                (!v.is_empty()).then(|| v.to_string())
            })
            .collect();
        Self { source: source.into(), values }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.values.iter()
    }
}

/// 读取单个哈希列表文件
/// - 路径不存在 → `NotFound`
/// - 其他 I/O 失败 → `Read`
/// - 非法 UTF-8 字节直接丢弃，不视为错误
pub fn read_hash_list(path: &Path) -> Result<HashList> {
    if !path.exists() {
        return Err(HashIntersectError::NotFound { path: path.to_path_buf() });
    }
    let bytes = fs::read(path).map_err(|source| HashIntersectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_dropping_invalid(&bytes);
    let values = parse_hash_lines(&text);
    debug!(path = %path.display(), values = values.len(), "hash list loaded");
    Ok(HashList { source: path.to_path_buf(), values })
}

/// 按行切分（兼容 \n、\r\n 与单独的 \r），裁剪空白并丢弃空行
pub fn parse_hash_lines(text: &str) -> HashSet<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// 宽松解码：保留合法的 UTF-8 片段，跳过无法解码的字节
fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
