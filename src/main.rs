use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{anyhow, ensure, Context, Result};
use schematic::cli::{Opts, Output};
use schematic::input::Reader;

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let stdout = io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());

    match run(&opts, &mut o) {
        Err(e) if opts.json => {
            o.error(format_args!("{e:#}"))?;
            Err(e)
        }
        result => result,
    }
}

fn run(opts: &Opts, o: &mut Output<impl Write>) -> Result<()> {
    let reader = open(opts)?;

    log::debug!("solving part {} of {}", opts.part, opts.path.display());

    let value = schematic::solve(opts.part, Reader::new(reader))
        .with_context(|| anyhow!("{}", opts.path.display()))?;

    o.answer(opts.part, value)?;

    if let Some(expect) = opts.expect {
        ensure!(value == expect, "{value} (value) != {expect} (expected)");
    }

    Ok(())
}

fn open(opts: &Opts) -> Result<Box<dyn BufRead>> {
    if opts.is_stdin() {
        return Ok(Box::new(io::stdin().lock()));
    }

    let path: &Path = &opts.path;
    let file = File::open(path).with_context(|| anyhow!("{}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
