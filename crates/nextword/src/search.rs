use std::cmp::Ordering;
use std::io;

use tracing::trace;

use crate::reader::{Line, ReadAt, read_line};

/// Outcome of [`search`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Position {
    /// Byte offset of the first line that compares `>=` the query.
    Found(u64),
    /// Every line compares `<` the query, or the source holds no lines.
    NotFound,
}

/// Binary search a byte-sorted, newline-delimited source for `query`.
///
/// Probes land on arbitrary bytes and are moved forward to the start of the
/// next line. A probe that runs off the end of the source behaves like a line
/// greater than every query. The returned line is only guaranteed to be
/// `>= query`; callers check whether it actually starts with their key.
pub fn search<R: ReadAt + ?Sized>(
    src: &R,
    size: u64,
    query: &[u8],
    buf_size: usize,
) -> io::Result<Position> {
    let mut lo = 0u64;
    let mut hi = size + 1;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let offset = line_start_after(src, mid, buf_size)?;
        let line = read_line(src, offset, buf_size)?;
        let ord = match line.bytes() {
            Some(bytes) => bytes.cmp(query),
            None => Ordering::Greater,
        };
        trace!(mid, offset, ?ord, "probe");

        match ord {
            Ordering::Less => lo = mid + 1,
            Ordering::Equal => return Ok(Position::Found(offset)),
            Ordering::Greater => hi = mid,
        }
    }

    let offset = line_start_after(src, lo, buf_size)?;
    if offset >= size {
        return Ok(Position::NotFound);
    }
    Ok(Position::Found(offset))
}

/// Normalize a raw offset to a line boundary: `0` stays put, anything else
/// moves past the next newline.
fn line_start_after<R: ReadAt + ?Sized>(src: &R, raw: u64, buf_size: usize) -> io::Result<u64> {
    if raw == 0 {
        return Ok(0);
    }
    Ok(match read_line(src, raw, buf_size)? {
        Line::End => raw,
        line => raw + line.span(),
    })
}
