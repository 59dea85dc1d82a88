//! 比较结果的文本 / JSON 渲染
use anyhow::Result;
use std::fmt::Write;

use crate::engine::ComparisonResult;
use crate::settings::ReportSettings;

/// 渲染为展示文本
/// - 无共同值：单行提示（包含 `no_common_marker`）
/// - 有共同值：汇总头 + 分隔线 + 排序后的值（每行一个，末尾无换行）
pub fn render(result: &ComparisonResult, settings: &ReportSettings) -> String {
    if !result.has_common() {
        return no_common_message(settings);
    }

    let mut out = render_header(&result.input_sizes, result.common.len(), settings);
    out.push_str(&result.common.join("\n"));
    out
}

/// 汇总头（以分隔线结尾，含换行）
pub(crate) fn render_header(input_sizes: &[usize], common: usize, settings: &ReportSettings) -> String {
    let label = &settings.label;
    let mut out = String::new();
    let _ = writeln!(out, "Compared {} files.", input_sizes.len());
    out.push('\n');
    for (i, size) in input_sizes.iter().enumerate() {
        let _ = writeln!(out, "File {}: {} unique {} values.", i + 1, size, label);
    }
    out.push('\n');
    let _ = writeln!(out, "Common {} values (intersection): {}", label, common);
    let _ = writeln!(out, "{}", settings.separator);
    out
}

/// “无共同值”提示文本
pub fn no_common_message(settings: &ReportSettings) -> String {
    format!(
        "{} {} values were found among the provided files.",
        settings.no_common_marker, settings.label
    )
}

/// 渲染为 JSON（便于脚本处理）
pub fn render_json(result: &ComparisonResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
