//! Extraction of number runs.

#[cfg(test)]
mod tests;

use core::fmt;

use crate::input::Overflow;

/// A maximal span of digits within a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    /// First column of the run, inclusive.
    pub start: usize,
    /// Last column of the run, inclusive.
    pub end: usize,
    /// Numerical value of the run.
    pub value: u64,
}

impl fmt::Display for Run {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}..={})", self.value, self.start, self.end)
    }
}

/// Get the full run of digits covering `column`.
///
/// Returns `Ok(None)` if `column` is not a digit or is out of bounds.
///
/// # Examples
///
/// ```
/// use schematic::run::{extract, Run};
///
/// let line = b"..35..633.";
/// assert_eq!(extract(line, 3)?, Some(Run { start: 2, end: 3, value: 35 }));
/// assert_eq!(extract(line, 7)?, Some(Run { start: 6, end: 8, value: 633 }));
/// assert_eq!(extract(line, 4)?, None);
/// assert_eq!(extract(line, 10)?, None);
/// # Ok::<_, schematic::input::Overflow>(())
/// ```
pub fn extract(line: &[u8], column: usize) -> Result<Option<Run>, Overflow> {
    if !line.get(column).is_some_and(u8::is_ascii_digit) {
        return Ok(None);
    }

    let head = line.get(..column).unwrap_or_default();
    let start = head
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |n| n + 1);

    let tail = line.get(column..).unwrap_or_default();
    let len = tail
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(tail.len());

    let end = column + len - 1;
    let value = parse(line.get(start..=end).unwrap_or_default())?;
    Ok(Some(Run { start, end, value }))
}

/// Parse a string of ASCII digits.
#[inline]
pub fn parse(digits: &[u8]) -> Result<u64, Overflow> {
    digits
        .iter()
        .try_fold(0u64, |n, d| {
            n.checked_mul(10)?.checked_add(u64::from(d.wrapping_sub(b'0')))
        })
        .ok_or(Overflow)
}
