//! 多路集合求交
use serde::Serialize;
use tracing::debug;

use crate::reader::HashList;

/// 一次比较的结果（每次比较重新生成，不做修改）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    /// 各输入集合的大小，与输入顺序一致
    pub input_sizes: Vec<usize>,
    /// 所有输入中都存在的值，按字节序升序
    pub common: Vec<String>,
    pub inputs_compared: usize,
}

/// 比较结论：无共同值与有共同值需明确区分
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoCommonValues,
    Common(usize),
}

impl ComparisonResult {
    pub fn outcome(&self) -> Outcome {
        if self.common.is_empty() {
            Outcome::NoCommonValues
        } else {
            Outcome::Common(self.common.len())
        }
    }

    pub fn has_common(&self) -> bool {
        !self.common.is_empty()
    }
}

/// 计算所有输入集合的交集
/// - 以最小的集合为基准逐个检查，其余集合均包含才保留
/// - 调用方负责保证输入数量（2..=5）；1 个输入返回其自身，0 个输入返回空结果
pub fn intersect(lists: &[HashList]) -> ComparisonResult {
    let input_sizes: Vec<usize> = lists.iter().map(HashList::len).collect();

    let mut common: Vec<String> = match lists.iter().min_by_key(|l| l.len()) {
        Some(smallest) => smallest
            .iter()
            .filter(|value| lists.iter().all(|l| l.contains(value)))
            .cloned()
            .collect(),
        None => Vec::new(),
    };
    common.sort_unstable();

    debug!(inputs = lists.len(), common = common.len(), "intersection computed");
    ComparisonResult { input_sizes, common, inputs_compared: lists.len() }
}
