use anyhow::Context as _;
use anyhow::Result;
use std::io::Write as _;

const USAGE: &str = "Usage: fit-line [options] [in-points] <in.txt";

fn main() -> Result<()> {
    let mut options = getopts::Options::new();
    options.optflag("v", "verbose", "print the unrounded coefficients");

    let matches = scatter_tools::parse_args(options, USAGE, 1)?;
    let _trace_guard = scatter_tools::init_tracing(&matches);

    let points = scatter_tools::read_points(matches.free.get(0))?;
    let line = points.fit_line().context("failed to fit a line")?;

    let mut output = scatter_tools::writer(None)?;
    writeln!(output, "{line}")?;
    if matches.opt_present("v") {
        let (a, b, c) = line.coefficients();
        writeln!(output, "a={a} b={b} c={c}")?;
    }
    output.flush()?;

    Ok(())
}
