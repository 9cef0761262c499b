//! 取行选项与统计信息（模块）
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 取行方向
/// - Front：从开头向后取（head）
/// - Back：从末尾向前取（tail）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "head")]
    Front,
    #[serde(alias = "tail")]
    Back,
}

/// 运行选项
#[derive(Debug, Clone, Default)]
pub struct TakeOptions {
    /// 最大输入大小（字节）；超过则拒绝读取
    pub max_input_size: Option<u64>,
    /// 计划文件路径（TOML）；为空则使用默认路径 ./plan.toml
    pub plan_path: Option<PathBuf>,
}

/// 运行统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TakeStats {
    pub steps_applied: usize,
    pub lines_taken: usize,
    pub bytes_taken: usize,
    pub remainder_bytes: usize,
}
