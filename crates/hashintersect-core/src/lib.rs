//! 哈希列表求交核心库
//!
//! 设计要点：
//! - 每个输入文件读为一个去重集合（裁剪空白、丢弃空行，非法 UTF-8 字节直接忽略）。
//! - 对 2~5 个集合求交，结果按字节序升序，保证展示与输出可复现。
//! - “无共同值”和“无可保存内容”是正常结果，不作为错误返回。
//! - 读取失败立即中止整次比较，不产生部分结果。

mod engine;
mod error;
mod export;
mod reader;
mod report;
mod session;
mod settings;

pub use engine::{intersect, ComparisonResult, Outcome};
pub use error::{HashIntersectError, Result};
pub use export::{export, with_default_extension, ExportOutcome};
pub use reader::{parse_hash_lines, read_hash_list, HashList};
pub use report::{no_common_message, render, render_json};
pub use session::{InputSlots, Session, SessionState, MAX_INPUTS, MIN_INPUTS};
pub use settings::{ReportSettings, DEFAULT_OUTPUT_NAME};
