//! CLI helpers.

mod output;
mod stderr_logger;


use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::Part;

pub use self::output::{Output, OutputKind};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Path which reads the schematic from standard input.
pub const STDIN: &str = "-";

/// Command line options.
#[derive(Debug)]
pub struct Opts {
    /// Which part to solve.
    pub part: Part,
    /// Path to the schematic.
    pub path: PathBuf,
    /// Output JSON lines.
    pub json: bool,
    /// Run in verbose mode.
    pub verbose: bool,
    /// Expected answer.
    pub expect: Option<u64>,
}

impl Opts {
    /// Parse CLI options from the environment and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        log::set_max_level(opts.log_level());
        log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;

        Ok(opts)
    }

    /// Parse CLI options from the given arguments.
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut it = args.into_iter();

        let mut part = None;
        let mut path = None;
        let mut json = false;
        let mut verbose = false;
        let mut expect = None;

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-p" | "--part" => {
                    if part.is_some() {
                        bail!("duplicate `--part` arguments");
                    }

                    let value = it.next().context("missing argument to `--part`")?;
                    let value = value
                        .to_str()
                        .context("missing string argument to `--part`")?;
                    part = Some(value.parse::<Part>()?);
                }
                "--json" => {
                    json = true;
                }
                "-V" | "--verbose" => {
                    verbose = true;
                }
                "--expect" => {
                    let value = it.next().context("missing argument to `--expect`")?;
                    let value = value
                        .to_str()
                        .context("missing string argument to `--expect`")?;
                    expect = Some(value.parse().context("bad argument to `--expect`")?);
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') && other != STDIN => {
                    bail!("unsupported argument: {other}");
                }
                other => {
                    if path.is_some() {
                        bail!("unexpected argument: {other}");
                    }

                    path = Some(PathBuf::from(other));
                }
            }
        }

        for arg in it {
            if path.is_some() {
                bail!("unexpected argument: {}", arg.to_string_lossy());
            }

            path = Some(PathBuf::from(arg));
        }

        Ok(Self {
            part: part.unwrap_or_default(),
            path: path.context("missing input path")?,
            json,
            verbose,
            expect,
        })
    }

    /// Test if the schematic should be read from stdin.
    #[inline]
    pub fn is_stdin(&self) -> bool {
        self.path.as_os_str() == STDIN
    }

    /// The kind of output to produce.
    #[inline]
    pub fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }

    fn log_level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}
