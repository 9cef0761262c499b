//! 计划文件加载（TOML）
use anyhow::{Context, Result};
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::options::Direction;

/// 单个步骤的配置
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct StepEntry {
    pub direction: Direction,
    pub count: NonZeroUsize,
    #[serde(default)]
    pub label: Option<String>,
}

/// 顶层计划文件结构
#[derive(Debug, Clone, Deserialize)]
struct PlanFile {
    #[serde(default)]
    pub steps: Vec<StepEntry>,
}

/// 归一化后的取行步骤：依次作用在上一步的剩余部分上
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeStep {
    pub direction: Direction,
    pub count: NonZeroUsize,
    pub label: Option<String>,
}

impl TakeStep {
    pub fn new(direction: Direction, count: NonZeroUsize) -> Self {
        Self { direction, count, label: None }
    }
}

/// 解析 TOML 文本为步骤列表（count = 0 或未知方向均为解析错误）
pub fn parse_plan(txt: &str) -> Result<Vec<TakeStep>> {
    let parsed: PlanFile = toml::from_str(txt).context("parse plan")?;
    Ok(parsed
        .steps
        .into_iter()
        .map(|e| TakeStep { direction: e.direction, count: e.count, label: e.label })
        .collect())
}

/// 从 TOML 计划文件加载步骤列表
pub fn load_plan(path: &Path) -> Result<Vec<TakeStep>> {
    let txt = std::fs::read_to_string(path).with_context(|| format!("read plan {}", path.display()))?;
    parse_plan(&txt).with_context(|| format!("invalid plan {}", path.display()))
}
