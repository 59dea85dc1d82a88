//! 保存比较结果（只写入共同值，剥离汇总头）
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{HashIntersectError, Result};
use crate::settings::ReportSettings;

/// 保存结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// 已写入 `path`，共 `lines` 行
    Saved { path: PathBuf, lines: usize },
    /// 文本为空或为“无共同值”提示，未写文件
    NothingToSave,
}

/// 将渲染后的结果文本保存到 `path`
/// - 文本（裁剪后）为空或包含 `no_common_marker` → `NothingToSave`
/// - 找到第一行包含 `separator_marker` 的分隔线，只写入其后的行
/// - 未找到分隔线时写入全部行（含汇总头）
pub fn export(text: &str, path: &Path, settings: &ReportSettings) -> Result<ExportOutcome> {
    let content = text.trim();
    // 按文本整体匹配标记：若某个共同值本身包含 `no_common_marker`，同样不会写文件
    if content.is_empty() || content.contains(&settings.no_common_marker) {
        debug!("nothing to save");
        return Ok(ExportOutcome::NothingToSave);
    }

    let lines: Vec<&str> = content.lines().collect();
    let start = lines
        .iter()
        .position(|line| line.contains(&settings.separator_marker))
        .map(|i| i + 1)
        .unwrap_or(0);
    let body = &lines[start..];

    fs::write(path, body.join("\n")).map_err(|source| HashIntersectError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), lines = body.len(), "result written");
    Ok(ExportOutcome::Saved { path: path.to_path_buf(), lines: body.len() })
}

/// 未指定扩展名时补上 `.txt`
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::intersect;
    use crate::reader::{read_hash_list, HashList};
    use crate::report::render;
    use tempfile::tempdir;

    #[test]
    fn test_export_strips_header() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out.txt");
        let settings = ReportSettings::default();
        let result = intersect(&[
            HashList::from_values("1", ["a", "b", "c"]),
            HashList::from_values("2", ["b", "c", "d"]),
        ]);

        let outcome = export(&render(&result, &settings), &path, &settings).unwrap();
        assert_eq!(outcome, ExportOutcome::Saved { path: path.clone(), lines: 2 });
        assert_eq!(fs::read_to_string(&path).unwrap(), "b\nc");
    }

    #[test]
    fn test_export_then_read_round_trips() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out.txt");
        let settings = ReportSettings::default();
        let result = intersect(&[
            HashList::from_values("1", ["ff", "0a", "9c", "77"]),
            HashList::from_values("2", ["77", "0a", "ff"]),
            HashList::from_values("3", ["0a", "ff", "77", "12"]),
        ]);

        export(&render(&result, &settings), &path, &settings).unwrap();
        let reread = read_hash_list(&path).unwrap();
        let mut values: Vec<String> = reread.iter().cloned().collect();
        values.sort();
        assert_eq!(values, result.common);
    }

    #[test]
    fn test_no_common_values_is_nothing_to_save() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out.txt");
        let settings = ReportSettings::default();
        let result = intersect(&[
            HashList::from_values("1", ["a"]),
            HashList::from_values("2", ["b"]),
        ]);

        let outcome = export(&render(&result, &settings), &path, &settings).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToSave);
        assert!(!path.exists());
    }

    #[test]
    fn test_empty_text_is_nothing_to_save() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out.txt");

        let outcome = export("  \n\n", &path, &ReportSettings::default()).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToSave);
        assert!(!path.exists());
    }

    #[test]
    fn test_value_containing_no_common_marker_is_not_saved() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out.txt");
        let settings = ReportSettings::default();
        let result = intersect(&[
            HashList::from_values("1", ["aa", "No common ground"]),
            HashList::from_values("2", ["aa", "No common ground"]),
        ]);
        assert!(result.has_common());

        let outcome = export(&render(&result, &settings), &path, &settings).unwrap();
        assert_eq!(outcome, ExportOutcome::NothingToSave);
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_separator_writes_everything() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("out.txt");

        export("header\nx\ny\n", &path, &ReportSettings::default()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "header\nx\ny");
    }

    #[test]
    fn test_write_failure_is_write_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("no-such-dir").join("out.txt");

        let err = export("----------------\nx", &path, &ReportSettings::default()).unwrap_err();
        assert!(matches!(err, HashIntersectError::Write { .. }));
    }

    #[test]
    fn test_default_extension() {
        assert_eq!(with_default_extension(Path::new("result")), PathBuf::from("result.txt"));
        assert_eq!(with_default_extension(Path::new("result.lst")), PathBuf::from("result.lst"));
    }
}
