use core::fmt;
use std::rc::Rc;

use bstr::{BStr, ByteSlice};

use crate::input::Overflow;
use crate::run::{self, Run};

/// Character used for empty cells and filler lines.
pub const EMPTY: u8 = b'.';

/// Cell standing in for a character outside of ASCII. Such characters are
/// never digits or `.`, so they are always symbols.
pub const WIDE: u8 = 0xff;

/// Test if the given character is a symbol.
///
/// # Examples
///
/// ```
/// use schematic::line::is_symbol;
///
/// assert!(is_symbol(b'*'));
/// assert!(is_symbol(b'#'));
/// assert!(!is_symbol(b'.'));
/// assert!(!is_symbol(b'7'));
/// ```
#[inline]
pub fn is_symbol(b: u8) -> bool {
    !b.is_ascii_digit() && b != EMPTY
}

/// A single row of a schematic, one cell per character.
///
/// Cloning a line is cheap since the underlying data is shared.
#[derive(Clone, PartialEq, Eq)]
pub struct Line {
    data: Rc<[u8]>,
}

impl Line {
    /// Construct a new line from the given UTF-8 data.
    ///
    /// Every character occupies exactly one cell, characters outside of
    /// ASCII (and invalid UTF-8 sequences) are stored as [WIDE].
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::line::{Line, WIDE};
    ///
    /// let line = Line::new("1§.".as_bytes());
    /// assert_eq!(line.len(), 3);
    /// assert_eq!(line.as_bytes(), &[b'1', WIDE, b'.']);
    /// ```
    pub fn new(data: &[u8]) -> Self {
        if data.is_ascii() {
            return Self {
                data: Rc::from(data),
            };
        }

        let cells = data
            .chars()
            .map(|c| if c.is_ascii() { c as u8 } else { WIDE })
            .collect::<Vec<u8>>();

        Self {
            data: Rc::from(cells),
        }
    }

    /// Construct a filler line consisting only of `.`.
    #[inline]
    pub fn filler(len: usize) -> Self {
        Self {
            data: Rc::from(vec![EMPTY; len]),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the character at the given column, columns outside of the line
    /// are absent.
    #[inline]
    pub fn get(&self, column: usize) -> Option<u8> {
        self.data.get(column).copied()
    }

    /// Test if any of the cells in `column - 1..=column + 1` is a symbol.
    #[inline]
    pub fn symbol_near(&self, column: usize) -> bool {
        (column.saturating_sub(1)..=column.saturating_add(1))
            .any(|c| self.get(c).is_some_and(is_symbol))
    }

    /// Get the number run covering the given column.
    #[inline]
    pub fn run_at(&self, column: usize) -> Result<Option<Run>, Overflow> {
        run::extract(&self.data, column)
    }
}

impl fmt::Debug for Line {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(BStr::new(&self.data), f)
    }
}

/// Which line of a [Triple] is being addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Offset {
    Prev,
    Current,
    Next,
}

/// A window of three consecutive lines.
#[derive(Debug, Clone)]
pub struct Triple {
    row: usize,
    prev: Line,
    current: Line,
    next: Line,
}

impl Triple {
    /// Construct a new triple where `row` is the zero-based row of the
    /// current line.
    #[inline]
    pub fn new(row: usize, prev: Line, current: Line, next: Line) -> Self {
        Self {
            row,
            prev,
            current,
            next,
        }
    }

    /// Zero-based row of the current line.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    #[inline]
    pub fn prev(&self) -> &Line {
        &self.prev
    }

    #[inline]
    pub fn current(&self) -> &Line {
        &self.current
    }

    #[inline]
    pub fn next(&self) -> &Line {
        &self.next
    }

    /// Access the line at the given offset.
    #[inline]
    pub fn line(&self, offset: Offset) -> &Line {
        match offset {
            Offset::Prev => &self.prev,
            Offset::Current => &self.current,
            Offset::Next => &self.next,
        }
    }

    /// All three lines, top to bottom.
    #[inline]
    pub fn lines(&self) -> [&Line; 3] {
        [&self.prev, &self.current, &self.next]
    }

    /// Row of the line at the given offset.
    ///
    /// The filler line above the first row reports row `0`.
    #[inline]
    pub fn row_of(&self, offset: Offset) -> usize {
        match offset {
            Offset::Prev => self.row.saturating_sub(1),
            Offset::Current => self.row,
            Offset::Next => self.row.saturating_add(1),
        }
    }
}
