use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::Part;

/// Where answers and messages are written to.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// One JSON object per line.
    Json,
    /// Plain text.
    Normal,
}

/// A single JSON line, `{"type": ..., "data": ...}`.
#[derive(Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
enum Event {
    Answer { part: u8, value: u64 },
    Message { kind: &'static str, output: String },
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Write the answer to the given part.
    pub fn answer(&mut self, part: Part, value: u64) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(&Event::Answer {
                part: part.number(),
                value,
            }),
            OutputKind::Normal => writeln!(self.out, "{value}"),
        }
    }

    pub fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => self.json(&Event::Message {
                kind: "error",
                output: m.to_string(),
            }),
            OutputKind::Normal => writeln!(self.out, "error: {m}"),
        }
    }

    /// Consume the output and return the underlying writer.
    pub fn into_inner(self) -> O {
        self.out
    }

    fn json(&mut self, event: &Event) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        writeln!(self.out)
    }
}
