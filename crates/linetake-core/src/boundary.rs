//! 行边界检测（LF / CRLF）
//!
//! 两个方向对称的原语是整个库唯一需要处理边界情况的地方：
//! - 空输入、下标 0 处的换行、末尾换行、LF 与 CRLF 混用；
//! - 前向与后向的取行算法都只调用这里，不再各自判断 `\r`。
use memchr::{memchr, memchr_iter, memrchr};

/// 一个行终止符的位置与宽度
/// - `position`：终止符第一个字符在被扫描视图内的偏移（0 起）
/// - `width`：0 = 未找到终止符；1 = `\n`；2 = `\r\n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub position: usize,
    pub width: usize,
}

impl Boundary {
    pub(crate) const fn new(position: usize, width: usize) -> Self {
        Self { position, width }
    }

    /// 是否真正找到了终止符（width 为 0 表示扫描到头）
    pub fn has_terminator(&self) -> bool {
        self.width != 0
    }

    /// 终止符之后第一个字符的偏移
    pub fn end(&self) -> usize {
        self.position + self.width
    }
}

/// 从左向右查找第一个行终止符
/// - 没有 `\n`：返回 `(len, 0)`，表示到达末尾且没有终止符
/// - `\n` 位于 0：前面不可能有 `\r`，返回 `(0, 1)`
/// - `\n` 前是 `\r`：CR 并入终止符，返回 `(i - 1, 2)`
pub fn find_first_boundary(text: &str) -> Boundary {
    let bytes = text.as_bytes();
    match memchr(b'\n', bytes) {
        None => Boundary::new(bytes.len(), 0),
        Some(idx) => classify(bytes, idx),
    }
}

/// 从右向左查找最后一个行终止符（`find_first_boundary` 的镜像）
/// - 没有 `\n`：返回 `(0, 0)`，表示到达开头且没有终止符
pub fn find_last_boundary(text: &str) -> Boundary {
    let bytes = text.as_bytes();
    match memrchr(b'\n', bytes) {
        None => Boundary::new(0, 0),
        Some(idx) => classify(bytes, idx),
    }
}

/// 统计行数：终止符个数 + 1
/// 空串算一行空行；末尾终止符之后也算一行空行，与两个方向的取行算法口径一致。
pub fn count_lines(text: &str) -> usize {
    memchr_iter(b'\n', text.as_bytes()).count() + 1
}

// `idx` 处是 `\n`，判断是否与前一个 `\r` 组成 CRLF
fn classify(bytes: &[u8], idx: usize) -> Boundary {
    if idx > 0 && bytes[idx - 1] == b'\r' {
        Boundary::new(idx - 1, 2)
    } else {
        Boundary::new(idx, 1)
    }
}
