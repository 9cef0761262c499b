//! 输出类型（JSON 序列化）
use serde::Serialize;

use crate::options::Direction;

/// 单步输出项（对应 JSON 中 steps 数组的一个元素）
#[derive(Debug, Clone, Serialize)]
pub struct StepOutput<'a> {
    pub label: Option<&'a str>,
    pub direction: Direction,
    pub count: usize,
    pub taken: &'a str,
}
