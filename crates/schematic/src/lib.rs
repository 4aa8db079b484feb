//! Scanner for engine schematics.
//!
//! A schematic is a grid of digits, `.` for empty cells, and symbols. Part
//! one sums every number adjacent to a symbol, part two sums the products of
//! the two numbers adjacent to each gear (a `*` next to exactly two numbers).
//!
//! ```
//! use schematic::prelude::*;
//!
//! const INPUT: &str = "\
//! 467..114..
//! ...*......
//! ..35..633.
//! ";
//!
//! assert_eq!(part1(Lines::new(INPUT))?, 502);
//! assert_eq!(part2(Lines::new(INPUT))?, 16345);
//! # Ok::<_, schematic::input::InputError>(())
//! ```

pub mod cli;
pub mod gear;
pub mod input;
pub mod line;
pub mod run;
pub mod scan;
pub mod window;


use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::input::{InputError, LineCol, LineSource, Overflow};
use crate::line::Triple;
use crate::window::Windower;

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{LineSource, Lines, Reader};
    pub use crate::window::Windower;
    pub use crate::{part1, part2, solve, Part};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
}

/// Which part of the puzzle to solve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    /// Sum of numbers adjacent to a symbol.
    #[default]
    One,
    /// Sum of gear ratios.
    Two,
}

impl Part {
    /// The number of the part.
    #[inline]
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.number(), f)
    }
}

#[derive(Debug, Error)]
#[error("unsupported part `{0}`, expected `1` or `2`")]
pub struct PartError(String);

impl FromStr for Part {
    type Err = PartError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Part::One),
            "2" => Ok(Part::Two),
            other => Err(PartError(other.to_owned())),
        }
    }
}

/// Sum of all numbers adjacent to a symbol.
#[inline]
pub fn part1<S>(source: S) -> Result<u64, InputError>
where
    S: LineSource,
{
    total(source, scan::symbol_sum)
}

/// Sum of all gear ratios.
#[inline]
pub fn part2<S>(source: S) -> Result<u64, InputError>
where
    S: LineSource,
{
    total(source, gear::gear_sum)
}

/// Solve the given part over the source.
#[inline]
pub fn solve<S>(part: Part, source: S) -> Result<u64, InputError>
where
    S: LineSource,
{
    match part {
        Part::One => part1(source),
        Part::Two => part2(source),
    }
}

fn total<S>(source: S, f: fn(&Triple) -> Result<u64, InputError>) -> Result<u64, InputError>
where
    S: LineSource,
{
    let mut total = 0u64;

    for triple in Windower::new(source) {
        let triple = triple?;
        let value = f(&triple)?;

        total = total
            .checked_add(value)
            .ok_or(Overflow)
            .map_err(|e| e.at(LineCol::new(triple.row(), 0)))?;
    }

    Ok(total)
}
