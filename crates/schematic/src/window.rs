//! Sliding window of line triples.


use core::iter::FusedIterator;
use core::mem;

use crate::input::{ErrorKind, InputError, LineCol, LineSource};
use crate::line::{Line, Triple};

enum State {
    /// Nothing has been read yet.
    Start,
    /// The previous and current line of the next triple to emit.
    Running { prev: Line, current: Line },
    /// The source is exhausted or an error has been raised.
    Done,
}

/// Produces one [Triple] per line read from a [LineSource].
///
/// The lines above the first and below the last line are filler lines. An
/// empty line is treated as the end of the schematic and nothing further is
/// read from the source after that.
///
/// # Examples
///
/// ```
/// use schematic::prelude::*;
///
/// let mut it = Windower::new(Lines::new("467\n.*.\n"));
///
/// let t = it.next().transpose()?.unwrap();
/// assert_eq!(t.prev().as_bytes(), b"...");
/// assert_eq!(t.current().as_bytes(), b"467");
/// assert_eq!(t.next().as_bytes(), b".*.");
///
/// let t = it.next().transpose()?.unwrap();
/// assert_eq!(t.prev().as_bytes(), b"467");
/// assert_eq!(t.current().as_bytes(), b".*.");
/// assert_eq!(t.next().as_bytes(), b"...");
///
/// assert!(it.next().is_none());
/// # Ok::<_, schematic::input::InputError>(())
/// ```
pub struct Windower<S> {
    source: S,
    state: State,
    row: usize,
}

impl<S> Windower<S>
where
    S: LineSource,
{
    /// Construct a new windower over the given source.
    #[inline]
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: State::Start,
            row: 0,
        }
    }

    fn step(&mut self) -> Result<Option<Triple>, InputError> {
        let (prev, current) = match mem::replace(&mut self.state, State::Done) {
            State::Start => {
                let Some(current) = self.read()? else {
                    log::debug!("empty schematic");
                    return Ok(None);
                };

                (Line::filler(current.len()), current)
            }
            State::Running { prev, current } => (prev, current),
            State::Done => return Ok(None),
        };

        let row = self.row;
        self.row += 1;

        let next = match self.read()? {
            Some(next) => {
                if next.len() != current.len() {
                    let pos = LineCol::new(self.row, next.len().min(current.len()));

                    return Err(InputError::new(
                        pos,
                        ErrorKind::Ragged {
                            expected: current.len(),
                            actual: next.len(),
                        },
                    ));
                }

                self.state = State::Running {
                    prev: current.clone(),
                    current: next.clone(),
                };

                next
            }
            None => {
                log::debug!("end of schematic after {} line(s)", self.row);
                Line::filler(current.len())
            }
        };

        Ok(Some(Triple::new(row, prev, current, next)))
    }

    fn read(&mut self) -> Result<Option<Line>, InputError> {
        let Some(line) = self.source.next_line()? else {
            return Ok(None);
        };

        if line.is_empty() {
            return Ok(None);
        }

        Ok(Some(Line::new(line)))
    }
}

impl<S> Iterator for Windower<S>
where
    S: LineSource,
{
    type Item = Result<Triple, InputError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

impl<S> FusedIterator for Windower<S> where S: LineSource {}
