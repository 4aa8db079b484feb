use core::fmt;
use std::io;

use thiserror::Error;

/// A line and column combination.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineCol {
    line: usize,
    column: usize,
}

impl LineCol {
    /// Construct a new zero-based position.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Zero-based line of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Zero-based column of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let line = self.line + 1;
        let column = self.column + 1;
        write!(f, "{line}:{column}")
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    #[error("failed to read line")]
    Io(#[source] io::Error),
    #[error("ragged line; expected {expected} columns, but got {actual}")]
    Ragged { expected: usize, actual: usize },
    #[error("integer overflow")]
    Overflow,
}

/// Error raised while reading or scanning a schematic.
#[derive(Debug)]
pub struct InputError {
    pos: LineCol,
    kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub fn new(pos: LineCol, kind: ErrorKind) -> Self {
        Self { pos, kind }
    }

    /// Position the error was raised at.
    #[inline]
    pub fn pos(&self) -> LineCol {
        self.pos
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {})", self.kind, self.pos)
    }
}

impl std::error::Error for InputError {
    // The kind is already part of the display, so skip straight to its cause.
    #[inline]
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

/// Raised when a number or a total does not fit in a `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

impl Overflow {
    /// Attach a position to the overflow.
    #[inline]
    pub(crate) fn at(self, pos: LineCol) -> InputError {
        InputError::new(pos, ErrorKind::Overflow)
    }
}
