//! 只读文本视图（借用调用方缓冲区，不持有存储）
use std::fmt;
use std::num::NonZeroUsize;

use crate::boundary::{find_first_boundary, find_last_boundary, Boundary};
use crate::error::TakeError;
use crate::take::{take_lines, take_lines_from_end, TakeResult};

/// 原始缓冲区上的一段窗口
/// - `start`/`end` 均为原始缓冲区坐标（字节偏移），链式取行时始终单调收窄
/// - 子切片是 O(1)，剩余部分永不复制
#[derive(Clone, Copy)]
pub struct TextView<'a> {
    source: &'a str,
    start: usize,
    end: usize,
}

impl<'a> TextView<'a> {
    /// 覆盖整个缓冲区的视图
    pub fn new(source: &'a str) -> Self {
        Self { source, start: 0, end: source.len() }
    }

    /// 视图内容
    pub fn as_str(&self) -> &'a str {
        &self.source[self.start..self.end]
    }

    /// 视图所借用的原始缓冲区
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// 视图起点在原始缓冲区中的偏移
    pub fn offset(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// 以视图内坐标截取子视图；调用方保证 `from <= to <= len` 且落在字符边界上
    pub(crate) fn sub(&self, from: usize, to: usize) -> Self {
        debug_assert!(from <= to && to <= self.len());
        Self { source: self.source, start: self.start + from, end: self.start + to }
    }

    pub fn first_boundary(&self) -> Boundary {
        find_first_boundary(self.as_str())
    }

    pub fn last_boundary(&self) -> Boundary {
        find_last_boundary(self.as_str())
    }

    /// 取前 `count` 行，便于 `view.take_lines(..)?.remainder.take_lines(..)` 链式调用
    pub fn take_lines(self, count: NonZeroUsize) -> Result<TakeResult<'a>, TakeError> {
        take_lines(self, count)
    }

    /// 取后 `count` 行
    pub fn take_lines_from_end(self, count: NonZeroUsize) -> Result<TakeResult<'a>, TakeError> {
        take_lines_from_end(self, count)
    }
}

impl<'a> From<&'a str> for TextView<'a> {
    fn from(source: &'a str) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Debug 只展示内容与位置，不打印整个原始缓冲区
impl fmt::Debug for TextView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextView")
            .field("text", &self.as_str())
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

// 同一缓冲区（按地址比较）上的同一区间才相等，不逐字节比较整个缓冲区
impl PartialEq for TextView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source, other.source) && self.start == other.start && self.end == other.end
    }
}

impl Eq for TextView<'_> {}

impl PartialEq<str> for TextView<'_> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for TextView<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
