//! 交互层状态：输入槽位 + 比较/保存状态机
//!
//! 状态流转：Idle →（至少 2 个文件）compare → Compared →（结果非空）save → Saved。
//! 每次 compare 都会整体替换之前的状态；save 失败时保留原状态以便重试。
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::engine::{intersect, ComparisonResult, Outcome};
use crate::error::{HashIntersectError, Result};
use crate::export::{export, ExportOutcome};
use crate::reader::{read_hash_list, HashList};
use crate::report::render;
use crate::settings::ReportSettings;

/// 必填输入数量
pub const MIN_INPUTS: usize = 2;
/// 输入槽位总数（2 个必填 + 3 个可选）
pub const MAX_INPUTS: usize = 5;

/// 固定数量的输入槽位，所有槽位共用同一个选择入口（按下标区分）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSlots {
    slots: [Option<PathBuf>; MAX_INPUTS],
}

impl InputSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按给定顺序依次填入槽位
    pub fn from_paths<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        if paths.len() > MAX_INPUTS {
            return Err(HashIntersectError::TooManyInputs { given: paths.len() });
        }
        let mut slots = Self::new();
        for (index, path) in paths.into_iter().enumerate() {
            slots.select(index, path)?;
        }
        Ok(slots)
    }

    /// 为第 `index` 个槽位（从 0 开始）设置路径
    pub fn select(&mut self, index: usize, path: impl Into<PathBuf>) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(HashIntersectError::InvalidSlot { index: index + 1 })?;
        *slot = Some(path.into());
        Ok(())
    }

    pub fn clear(&mut self, index: usize) -> Result<()> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(HashIntersectError::InvalidSlot { index: index + 1 })?;
        *slot = None;
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    /// 已填写的路径（按槽位顺序，跳过空槽位）
    pub fn selected(&self) -> Vec<&Path> {
        self.slots.iter().filter_map(|s| s.as_deref()).collect()
    }

    /// 槽位标签：前两个必填，其余可选
    pub fn label(index: usize) -> String {
        if index < MIN_INPUTS {
            format!("Hash file #{}", index + 1)
        } else {
            format!("Hash file #{} (optional)", index + 1)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// 尚未比较，或上一次比较失败
    #[default]
    Idle,
    Compared { result: ComparisonResult, text: String },
    Saved { result: ComparisonResult, text: String, path: PathBuf },
}

/// 交互层控制器：持有输入槽位与最近一次比较结果
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub slots: InputSlots,
    settings: ReportSettings,
    state: SessionState,
}

impl Session {
    pub fn new(slots: InputSlots, settings: ReportSettings) -> Self {
        Self { slots, settings, state: SessionState::Idle }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// 最近一次比较的结果（未比较时为 None）
    pub fn result(&self) -> Option<&ComparisonResult> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Compared { result, .. } | SessionState::Saved { result, .. } => Some(result),
        }
    }

    /// 当前展示文本（未比较时为 None）
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Compared { text, .. } | SessionState::Saved { text, .. } => Some(text),
        }
    }

    /// 仅当最近一次比较得到非空结果时允许保存
    pub fn can_save(&self) -> bool {
        self.result().is_some_and(ComparisonResult::has_common)
    }

    /// 读取所有已选文件并求交
    /// - 少于 2 个文件：返回 `InsufficientInputs`，状态不变
    /// - 任一文件读取失败：立即中止，状态保持 Idle（不展示部分结果）
    pub fn compare(&mut self) -> Result<Outcome> {
        let paths: Vec<PathBuf> = self.slots.selected().into_iter().map(Path::to_path_buf).collect();
        if paths.len() < MIN_INPUTS {
            warn!(selected = paths.len(), "not enough files selected");
            return Err(HashIntersectError::InsufficientInputs { selected: paths.len() });
        }

        self.state = SessionState::Idle;

        let mut lists: Vec<HashList> = Vec::with_capacity(paths.len());
        for path in &paths {
            lists.push(read_hash_list(path)?);
        }

        let result = intersect(&lists);
        let text = render(&result, &self.settings);
        let outcome = result.outcome();
        info!(files = result.inputs_compared, common = result.common.len(), "comparison finished");
        self.state = SessionState::Compared { result, text };
        Ok(outcome)
    }

    /// 保存最近一次结果
    /// - 不可保存时返回 `NothingToSave`，不写文件
    /// - 写入失败时保留当前状态
    pub fn save(&mut self, path: &Path) -> Result<ExportOutcome> {
        if !self.can_save() {
            return Ok(ExportOutcome::NothingToSave);
        }
        let state = std::mem::take(&mut self.state);
        let (result, text) = match state {
            SessionState::Compared { result, text } | SessionState::Saved { result, text, .. } => (result, text),
            SessionState::Idle => return Ok(ExportOutcome::NothingToSave),
        };

        match export(&text, path, &self.settings) {
            Ok(ExportOutcome::Saved { path, lines }) => {
                self.state = SessionState::Saved { result, text, path: path.clone() };
                Ok(ExportOutcome::Saved { path, lines })
            }
            Ok(ExportOutcome::NothingToSave) => {
                self.state = SessionState::Compared { result, text };
                Ok(ExportOutcome::NothingToSave)
            }
            Err(e) => {
                self.state = SessionState::Compared { result, text };
                Err(e)
            }
        }
    }
}
