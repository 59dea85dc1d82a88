//! 报告与保存设置（可选 TOML 文件）
use serde::Deserialize;
use std::path::Path;

use crate::error::{HashIntersectError, Result};
use crate::report::render_header;
use crate::session::MAX_INPUTS;

/// 默认保存文件名
pub const DEFAULT_OUTPUT_NAME: &str = "md5_intersection.txt";
/// 分隔线：汇总信息与结果列表之间
pub const DEFAULT_SEPARATOR: &str = "----------------------------------------";
/// 保存时用于识别分隔线的标记
pub const SEPARATOR_MARKER: &str = "----------------";
/// “无共同值”提示中用于识别的标记
pub const NO_COMMON_MARKER: &str = "No common";

/// 报告渲染与保存所需的设置
/// - `label`：哈希的称呼（如 MD5、SHA-256），只影响展示文本
/// - `separator` 必须包含 `separator_marker`，否则保存时无法剥离汇总信息
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub label: String,
    pub separator: String,
    pub separator_marker: String,
    pub no_common_marker: String,
    pub default_output: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            label: "MD5".to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            separator_marker: SEPARATOR_MARKER.to_string(),
            no_common_marker: NO_COMMON_MARKER.to_string(),
            default_output: DEFAULT_OUTPUT_NAME.to_string(),
        }
    }
}

/// 顶层设置文件结构
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    report: ReportSettings,
}

impl ReportSettings {
    /// 从 TOML 设置文件加载；未出现的字段取默认值
    pub fn load(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path).map_err(|e| HashIntersectError::Settings {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&txt).map_err(|message| HashIntersectError::Settings {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml_str(txt: &str) -> std::result::Result<Self, String> {
        let parsed: SettingsFile = toml::from_str(txt).map_err(|e| e.to_string())?;
        let settings = parsed.report;
        if settings.separator_marker.is_empty() {
            return Err("separator_marker must not be empty".to_string());
        }
        if settings.no_common_marker.is_empty() {
            return Err("no_common_marker must not be empty".to_string());
        }
        if !settings.separator.contains(&settings.separator_marker) {
            return Err("separator must contain separator_marker".to_string());
        }
        settings.check_markers_against_header()?;
        Ok(settings)
    }

    /// 标记不能出现在非空结果的汇总头中，否则保存时会误判
    /// - `no_common_marker` 命中汇总头 → 非空结果永远无法保存
    /// - `separator_marker` 命中分隔线之前的行 → 汇总信息被写入结果文件
    /// - 汇总头中的计数随输入变化，因此标记不允许包含数字
    fn check_markers_against_header(&self) -> std::result::Result<(), String> {
        for (name, marker) in [
            ("separator_marker", &self.separator_marker),
            ("no_common_marker", &self.no_common_marker),
        ] {
            if marker.chars().any(|c| c.is_ascii_digit()) {
                return Err(format!("{name} must not contain digits"));
            }
        }

        let header = render_header(&[0; MAX_INPUTS], 0, self);
        if header.contains(&self.no_common_marker) {
            return Err(format!(
                "no_common_marker {:?} also appears in the report header",
                self.no_common_marker
            ));
        }
        let summary = header.strip_suffix('\n').unwrap_or(&header);
        let summary = summary.strip_suffix(&self.separator).unwrap_or(summary);
        if summary.lines().any(|line| line.contains(&self.separator_marker)) {
            return Err(format!(
                "separator_marker {:?} also appears in the report header",
                self.separator_marker
            ));
        }
        Ok(())
    }
}
