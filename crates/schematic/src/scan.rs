//! Sum of numbers adjacent to a symbol.


use core::mem;

use crate::input::{InputError, LineCol, Overflow};
use crate::line::Triple;
use crate::run;

/// Sum every number in the current line of the triple which has at least one
/// digit next to a symbol, diagonals included.
///
/// # Examples
///
/// ```
/// use schematic::line::{Line, Triple};
/// use schematic::scan::symbol_sum;
///
/// let triple = Triple::new(
///     0,
///     Line::filler(10),
///     Line::new(b"467..114.."),
///     Line::new(b"...*......"),
/// );
///
/// assert_eq!(symbol_sum(&triple)?, 467);
/// # Ok::<_, schematic::input::InputError>(())
/// ```
pub fn symbol_sum(triple: &Triple) -> Result<u64, InputError> {
    let lines = triple.lines();
    let current = triple.current().as_bytes();

    let mut total = 0u64;
    let mut start = None;
    let mut counts = false;

    // One past the end so that a run touching the right edge is terminated.
    for column in 0..=current.len() {
        if current.get(column).is_some_and(u8::is_ascii_digit) {
            start.get_or_insert(column);
            counts = counts || lines.iter().any(|line| line.symbol_near(column));
            continue;
        }

        let Some(s) = start.take() else {
            continue;
        };

        if !mem::take(&mut counts) {
            continue;
        }

        let pos = LineCol::new(triple.row(), s);
        let digits = current.get(s..column).unwrap_or_default();
        let value = run::parse(digits).map_err(|e| e.at(pos))?;
        total = total
            .checked_add(value)
            .ok_or(Overflow)
            .map_err(|e| e.at(pos))?;
    }

    Ok(total)
}
