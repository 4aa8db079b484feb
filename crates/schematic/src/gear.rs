//! Sum of gear ratios.

#[cfg(test)]
mod tests;

use arrayvec::ArrayVec;

use crate::input::{InputError, LineCol, Overflow};
use crate::line::{Offset, Triple};
use crate::run::Run;

/// Character marking a potential gear.
pub const GEAR: u8 = b'*';

/// The eight neighbours of a cell as a line offset and a column delta.
const NEIGHBORS: [(Offset, isize); 8] = [
    (Offset::Prev, -1),
    (Offset::Prev, 0),
    (Offset::Prev, 1),
    (Offset::Current, -1),
    (Offset::Current, 1),
    (Offset::Next, -1),
    (Offset::Next, 0),
    (Offset::Next, 1),
];

/// Sum the gear ratios of every gear in the current line of the triple.
pub fn gear_sum(triple: &Triple) -> Result<u64, InputError> {
    let mut total = 0u64;

    for (column, _) in triple
        .current()
        .as_bytes()
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == GEAR)
    {
        let Some(ratio) = ratio(triple, column)? else {
            continue;
        };

        total = total
            .checked_add(ratio)
            .ok_or(Overflow)
            .map_err(|e| e.at(LineCol::new(triple.row(), column)))?;
    }

    Ok(total)
}

/// Calculate the ratio of the `*` at `column` in the current line.
///
/// Returns `Ok(None)` unless the cell is next to exactly two distinct runs.
///
/// # Examples
///
/// ```
/// use schematic::gear::ratio;
/// use schematic::line::{Line, Triple};
///
/// let triple = Triple::new(
///     1,
///     Line::new(b"467..114.."),
///     Line::new(b"...*......"),
///     Line::new(b"..35..633."),
/// );
///
/// assert_eq!(ratio(&triple, 3)?, Some(467 * 35));
/// # Ok::<_, schematic::input::InputError>(())
/// ```
pub fn ratio(triple: &Triple, column: usize) -> Result<Option<u64>, InputError> {
    let pos = LineCol::new(triple.row(), column);
    let mut runs = ArrayVec::<Run, 8>::new();

    for (offset, delta) in NEIGHBORS {
        let Some(c) = column.checked_add_signed(delta) else {
            continue;
        };

        let run = triple
            .line(offset)
            .run_at(c)
            .map_err(|e| e.at(LineCol::new(triple.row_of(offset), c)))?;

        let Some(run) = run else {
            continue;
        };

        // Runs are identified by span and value, so the same run reached
        // through neighbouring cells is only counted once.
        if !runs.contains(&run) {
            runs.push(run);
        }
    }

    let [a, b] = runs.as_slice() else {
        log::trace!("{pos}: not a gear, {} adjacent number(s)", runs.len());
        return Ok(None);
    };

    let ratio = a.value.checked_mul(b.value).ok_or(Overflow).map_err(|e| e.at(pos))?;
    log::debug!("{pos}: gear {a} * {b} = {ratio}");
    Ok(Some(ratio))
}
