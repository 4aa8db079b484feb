//! Line sources feeding the windower.

mod error;


use std::io::BufRead;

use bstr::ByteSlice;

pub use self::error::{ErrorKind, InputError, LineCol, Overflow};

pub(crate) const NL: u8 = b'\n';

/// A sequential, read-once source of lines.
pub trait LineSource {
    /// Read the next line with trailing whitespace stripped.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    fn next_line(&mut self) -> Result<Option<&[u8]>, InputError>;
}

impl<S> LineSource for &mut S
where
    S: ?Sized + LineSource,
{
    #[inline]
    fn next_line(&mut self) -> Result<Option<&[u8]>, InputError> {
        (**self).next_line()
    }
}

/// Lines of an in-memory byte string.
///
/// # Examples
///
/// ```
/// use schematic::prelude::*;
///
/// let mut lines = Lines::new(b"467..\n...*.  \r\n");
/// assert_eq!(lines.next_line()?, Some(&b"467.."[..]));
/// assert_eq!(lines.next_line()?, Some(&b"...*."[..]));
/// assert_eq!(lines.next_line()?, None);
/// # Ok::<_, schematic::input::InputError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Lines<'a> {
    data: &'a [u8],
}

impl<'a> Lines<'a> {
    /// Construct a new line source over the given data.
    #[inline]
    pub fn new<D>(data: &'a D) -> Self
    where
        D: ?Sized + AsRef<[u8]>,
    {
        Self {
            data: data.as_ref(),
        }
    }

    /// Split once at the next newline or until the end of the data.
    fn split_once(&mut self) -> Option<&'a [u8]> {
        if self.data.is_empty() {
            return None;
        }

        let Some(at) = memchr::memchr(NL, self.data) else {
            return Some(core::mem::take(&mut self.data));
        };

        let (line, rest) = self.data.split_at(at);
        self.data = rest.get(1..).unwrap_or_default();
        Some(line)
    }
}

impl LineSource for Lines<'_> {
    #[inline]
    fn next_line(&mut self) -> Result<Option<&[u8]>, InputError> {
        Ok(self.split_once().map(|line| line.trim_end()))
    }
}

/// Lines read from an underlying [BufRead].
pub struct Reader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl<R> Reader<R>
where
    R: BufRead,
{
    /// Wrap the given reader.
    #[inline]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(256),
            line: 0,
        }
    }
}

impl<R> LineSource for Reader<R>
where
    R: BufRead,
{
    fn next_line(&mut self) -> Result<Option<&[u8]>, InputError> {
        self.buf.clear();

        let n = match self.reader.read_until(NL, &mut self.buf) {
            Ok(n) => n,
            Err(error) => {
                return Err(InputError::new(
                    LineCol::new(self.line, 0),
                    ErrorKind::Io(error),
                ));
            }
        };

        if n == 0 {
            return Ok(None);
        }

        self.line += 1;
        Ok(Some(self.buf.trim_end()))
    }
}
