//! 行切分核心库
//!
//! 设计要点：
//! - 在只读视图上定位行边界（`\n` 与 `\r\n`，末尾可无换行），从开头或末尾取出指定行数。
//! - 取出的文本复制一份返回；剩余部分始终是原缓冲区上的零拷贝视图，可继续链式取行。
//! - 行数口径：终止符个数 + 1，两个方向一致；行数不足时整体失败，不返回部分结果。
//! - 计划文件（TOML）描述一串连续的取行步骤，执行结果以 JSON 流式输出（此处由外层控制写出目标）。

mod boundary;
mod error;
mod options;
mod plan;
mod run;
mod take;
mod types;
mod view;

pub use boundary::{count_lines, find_first_boundary, find_last_boundary, Boundary};
pub use error::TakeError;
pub use options::{Direction, TakeOptions, TakeStats};
pub use plan::{load_plan, parse_plan, TakeStep};
pub use run::{read_input, run_plan_file, take_and_write};
pub use take::{take_lines, take_lines_from_end, TakeResult};
pub use types::StepOutput;
pub use view::TextView;
