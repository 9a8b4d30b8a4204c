use std::fs::File;
use std::io;
use std::path::Path;

/// Default chunk size for [`read_line`].
pub const DEFAULT_READ_BUF_SIZE: usize = 10_000;

/// Positional reads over a byte source.
///
/// `Ok(0)` signals the end of the source. Implementations must not depend on
/// a shared cursor so that concurrent callers can read the same source.
pub trait ReadAt {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize>;
}

impl ReadAt for File {
    #[cfg(unix)]
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        std::os::unix::fs::FileExt::read_at(self, buf, offset)
    }

    #[cfg(windows)]
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        std::os::windows::fs::FileExt::seek_read(self, buf, offset)
    }
}

impl ReadAt for [u8] {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        let Ok(start) = usize::try_from(offset) else {
            return Ok(0);
        };
        if start >= self.len() {
            return Ok(0);
        }
        let n = buf.len().min(self.len() - start);
        buf[..n].copy_from_slice(&self[start..start + n]);
        Ok(n)
    }
}

impl ReadAt for Vec<u8> {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        self.as_slice().read_at(buf, offset)
    }
}

impl<T: ReadAt + ?Sized> ReadAt for &T {
    fn read_at(&self, buf: &mut [u8], offset: u64) -> io::Result<usize> {
        (**self).read_at(buf, offset)
    }
}

/// Open a data file for positional reads, returning it with its size.
///
/// A file that does not exist yields `Ok(None)`.
pub(crate) fn open_source(path: &Path) -> io::Result<Option<(File, u64)>> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e),
    };
    let size = file.metadata()?.len();
    Ok(Some((file, size)))
}

/// Decode a line as UTF-8, reporting bad bytes as `InvalidData`.
pub(crate) fn into_text(bytes: Vec<u8>) -> io::Result<String> {
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// One line read from a [`ReadAt`] source, without its newline.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// A line terminated by `\n`.
    Full(Vec<u8>),
    /// The source ended before a newline was seen.
    Last(Vec<u8>),
    /// The offset was at or past the end of the source.
    End,
}

impl Line {
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            Line::Full(b) | Line::Last(b) => Some(b),
            Line::End => None,
        }
    }

    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Line::Full(b) | Line::Last(b) => Some(b),
            Line::End => None,
        }
    }

    /// Number of bytes this line occupies in the source, newline included.
    pub fn span(&self) -> u64 {
        match self {
            Line::Full(b) => b.len() as u64 + 1,
            Line::Last(b) => b.len() as u64,
            Line::End => 0,
        }
    }
}

/// Read the line starting at `offset`, pulling `buf_size` bytes per read.
pub fn read_line<R: ReadAt + ?Sized>(src: &R, mut offset: u64, buf_size: usize) -> io::Result<Line> {
    let mut buf = vec![0u8; buf_size.max(1)];
    let mut line = Vec::new();

    loop {
        let n = match src.read_at(&mut buf, offset) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if n == 0 {
            if line.is_empty() {
                return Ok(Line::End);
            }
            return Ok(Line::Last(line));
        }

        let chunk = &buf[..n];
        if let Some(pos) = chunk.iter().position(|b| *b == b'\n') {
            line.extend_from_slice(&chunk[..pos]);
            return Ok(Line::Full(line));
        }
        line.extend_from_slice(chunk);
        offset += n as u64;
    }
}

/// Iterator over consecutive lines of a source, starting at an offset.
pub struct Lines<'a, R: ?Sized> {
    src: &'a R,
    offset: u64,
    buf_size: usize,
    done: bool,
}

impl<'a, R: ReadAt + ?Sized> Lines<'a, R> {
    pub fn new(src: &'a R, offset: u64, buf_size: usize) -> Self {
        Self {
            src,
            offset,
            buf_size,
            done: false,
        }
    }
}

impl<R: ReadAt + ?Sized> Iterator for Lines<'_, R> {
    type Item = io::Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match read_line(self.src, self.offset, self.buf_size) {
            Ok(line) => {
                self.offset += line.span();
                if !matches!(line, Line::Full(_)) {
                    self.done = true;
                }
                line.into_bytes().map(Ok)
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
