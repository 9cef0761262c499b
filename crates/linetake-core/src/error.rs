//! 取行错误类型
use thiserror::Error;

/// 取行失败：缓冲区中的行数少于请求数。失败时不返回任何部分结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TakeError {
    #[error("not enough lines to take (expected {requested} but there were only {available})")]
    InsufficientLines { requested: usize, available: usize },
}
