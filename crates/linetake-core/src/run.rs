//! 计划执行主流程：依次取行并流式写出 JSON
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;

use crate::options::{Direction, TakeOptions, TakeStats};
use crate::plan::TakeStep;
use crate::take::{take_lines, take_lines_from_end};
use crate::types::StepOutput;
use crate::view::TextView;

/// 读取整个输入文件（必须是 UTF-8）；超过 `max_input_size` 时拒绝
pub fn read_input(path: &Path, opts: &TakeOptions) -> Result<String> {
    if let Some(max) = opts.max_input_size {
        let md = std::fs::metadata(path).with_context(|| format!("stat input {}", path.display()))?;
        if md.len() > max {
            bail!("input {} is {} bytes, larger than the limit of {} bytes", path.display(), md.len(), max);
        }
    }
    std::fs::read_to_string(path).with_context(|| format!("read input {}", path.display()))
}

/// 按顺序执行 `steps` 并将结果以 JSON 对象流式写入 `out`：
/// `{"steps":[{"label":..,"direction":..,"count":..,"taken":..}, ...],"remainder":".."}`
/// - 每一步都作用在上一步的剩余部分上（原始缓冲区坐标）
/// - 先执行全部步骤再写出；任一步失败即整体失败，`out` 中不会留下任何内容
pub fn take_and_write(text: &str, steps: &[TakeStep], out: &mut dyn Write) -> Result<TakeStats> {
    let mut stats = TakeStats::default();
    let mut remainder = TextView::new(text);

    let mut taken: Vec<String> = Vec::with_capacity(steps.len());
    for (idx, step) in steps.iter().enumerate() {
        let res = match step.direction {
            Direction::Front => take_lines(remainder, step.count),
            Direction::Back => take_lines_from_end(remainder, step.count),
        };
        let res = res.with_context(|| format!("step {} ({:?} {})", idx + 1, step.direction, step.count))?;

        stats.steps_applied += 1;
        stats.lines_taken += step.count.get();
        stats.bytes_taken += res.taken.len();

        taken.push(res.taken);
        remainder = res.remainder;
    }
    stats.remainder_bytes = remainder.len();

    write!(out, "{{\"steps\":[")?;
    let mut first = true;
    for (step, step_taken) in steps.iter().zip(&taken) {
        if !first { write!(out, ",")?; } else { first = false; }
        let item = StepOutput {
            label: step.label.as_deref(),
            direction: step.direction,
            count: step.count.get(),
            taken: step_taken.as_str(),
        };
        serde_json::to_writer(&mut *out, &item)?;
    }
    write!(out, "],\"remainder\":")?;
    serde_json::to_writer(&mut *out, remainder.as_str())?;
    write!(out, "}}")?;

    Ok(stats)
}

/// 读取输入与计划文件并执行（CLI `run` 子命令的完整流程）
pub fn run_plan_file(input: &Path, out: &mut dyn Write, opts: &TakeOptions) -> Result<TakeStats> {
    let plan_path = opts
        .plan_path
        .clone()
        .unwrap_or_else(|| "./plan.toml".into());
    let steps = crate::plan::load_plan(&plan_path)?;
    let text = read_input(input, opts)?;
    take_and_write(&text, &steps, out)
}
