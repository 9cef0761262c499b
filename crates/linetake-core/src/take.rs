//! 前向 / 后向取行
//!
//! 约定：
//! - 相邻两条已取行之间的终止符保留在 `taken` 中；
//! - 切口处的终止符既不属于 `taken` 也不属于 `remainder`；
//! - 没有终止符的最后一段（包括长度为 0）也算一行，因此行数恒为终止符个数 + 1。
//!
//! 两个方向都把切分偏移累加在输入视图的坐标上，最终只做一次切片，
//! 已经走过的文本不会被重复扫描。
use std::num::NonZeroUsize;

use crate::boundary::{find_first_boundary, find_last_boundary};
use crate::error::TakeError;
use crate::view::TextView;

/// 一次取行的结果
/// - `taken`：取出的文本（拥有所有权的副本）
/// - `remainder`：剩余部分，仍指向原始缓冲区
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TakeResult<'a> {
    pub taken: String,
    pub remainder: TextView<'a>,
}

/// 从视图开头取 `count` 行
pub fn take_lines(view: TextView<'_>, count: NonZeroUsize) -> Result<TakeResult<'_>, TakeError> {
    let text = view.as_str();
    let requested = count.get();
    let mut split = 0;
    let mut found = 0;

    loop {
        let boundary = find_first_boundary(&text[split..]);
        found += 1;
        let line_end = split + boundary.position;

        if found == requested {
            return Ok(TakeResult {
                taken: text[..line_end].to_owned(),
                remainder: view.sub(line_end + boundary.width, text.len()),
            });
        }
        if !boundary.has_terminator() {
            return Err(TakeError::InsufficientLines { requested, available: found });
        }
        split = line_end + boundary.width;
    }
}

/// 从视图末尾取 `count` 行（`take_lines` 的镜像）
/// 末尾若是终止符，其后的空串就是取出的第一行。
pub fn take_lines_from_end(view: TextView<'_>, count: NonZeroUsize) -> Result<TakeResult<'_>, TakeError> {
    let text = view.as_str();
    let requested = count.get();
    let mut split = text.len();
    let mut found = 0;

    loop {
        // 剩余部分始终是输入的前缀，视图内坐标无需换算
        let boundary = find_last_boundary(&text[..split]);
        found += 1;

        if found == requested {
            return Ok(TakeResult {
                taken: text[boundary.end()..].to_owned(),
                remainder: view.sub(0, boundary.position),
            });
        }
        if !boundary.has_terminator() {
            return Err(TakeError::InsufficientLines { requested, available: found });
        }
        split = boundary.position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap()
    }

    #[test]
    fn front_drops_the_terminator_at_the_cut() {
        let r = take_lines("1\n2".into(), n(1)).unwrap();
        assert_eq!(r.taken, "1");
        assert_eq!(r.remainder, "2");

        let r = take_lines("1\n2\n3".into(), n(2)).unwrap();
        assert_eq!(r.taken, "1\n2");
        assert_eq!(r.remainder, "3");
    }

    #[test]
    fn back_drops_the_terminator_at_the_cut() {
        let r = take_lines_from_end("1\n2".into(), n(1)).unwrap();
        assert_eq!(r.taken, "2");
        assert_eq!(r.remainder, "1");

        let r = take_lines_from_end("1\r\n2\r\n3".into(), n(2)).unwrap();
        assert_eq!(r.taken, "2\r\n3");
        assert_eq!(r.remainder, "1");
    }

    #[test]
    fn empty_input_is_one_empty_line() {
        let r = take_lines("".into(), n(1)).unwrap();
        assert_eq!(r.taken, "");
        assert!(r.remainder.is_empty());

        let r = take_lines_from_end("".into(), n(1)).unwrap();
        assert_eq!(r.taken, "");
        assert!(r.remainder.is_empty());

        assert_eq!(
            take_lines("".into(), n(2)),
            Err(TakeError::InsufficientLines { requested: 2, available: 1 })
        );
    }

    #[test]
    fn trailing_terminator_is_followed_by_an_empty_line() {
        let r = take_lines_from_end("1\n".into(), n(1)).unwrap();
        assert_eq!(r.taken, "");
        assert_eq!(r.remainder, "1");

        let r = take_lines("1\n".into(), n(2)).unwrap();
        assert_eq!(r.taken, "1\n");
        assert!(r.remainder.is_empty());

        let r = take_lines_from_end("1\n".into(), n(2)).unwrap();
        assert_eq!(r.taken, "1\n");
        assert!(r.remainder.is_empty());
    }

    #[test]
    fn leading_terminator_is_preceded_by_an_empty_line() {
        let r = take_lines("\n1".into(), n(1)).unwrap();
        assert_eq!(r.taken, "");
        assert_eq!(r.remainder, "1");

        let r = take_lines("\r\n1".into(), n(2)).unwrap();
        assert_eq!(r.taken, "\r\n1");
        assert!(r.remainder.is_empty());
    }

    #[test]
    fn blank_lines_count() {
        let r = take_lines("a\n\n\nb".into(), n(3)).unwrap();
        assert_eq!(r.taken, "a\n\n");
        assert_eq!(r.remainder, "b");

        let r = take_lines_from_end("a\n\n\nb".into(), n(3)).unwrap();
        assert_eq!(r.taken, "\n\nb");
        assert_eq!(r.remainder, "a");
    }

    #[test]
    fn remainder_offsets_point_into_the_original_buffer() {
        let text = "ab\r\ncd\nef";
        let r = take_lines(text.into(), n(1)).unwrap();
        assert_eq!(r.remainder.offset(), 4);
        let r = r.remainder.take_lines(n(1)).unwrap();
        assert_eq!(r.taken, "cd");
        assert_eq!(r.remainder.offset(), 7);
        assert_eq!(r.remainder.source(), text);

        let r = take_lines_from_end(text.into(), n(2)).unwrap();
        assert_eq!(r.remainder.offset(), 0);
        assert_eq!(r.remainder.len(), 2);
    }

    #[test]
    fn failure_reports_available_lines() {
        assert_eq!(
            take_lines("a\nb".into(), n(3)),
            Err(TakeError::InsufficientLines { requested: 3, available: 2 })
        );
        assert_eq!(
            take_lines_from_end("a\nb\n".into(), n(4)),
            Err(TakeError::InsufficientLines { requested: 4, available: 3 })
        );
    }
}
