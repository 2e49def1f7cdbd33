use anyhow::Context as _;
use anyhow::Result;
use rand::SeedableRng as _;
use scatter::Point2D;
use scatter::PointSet;
use std::env;
use std::fs;
use std::io;
use std::process;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use tracing_subscriber::Registry;
use tracing_tree::HierarchicalLayer;

pub mod svg;

/// Parses the command line, after adding the options shared by all tools.
///
/// Prints the usage and exits when `-h` is given.
pub fn parse_args(
    mut options: getopts::Options,
    usage: &str,
    max_free_args: usize,
) -> Result<getopts::Matches> {
    options.optflag("h", "help", "print this help menu");
    options.optopt("t", "trace", "emit a chrome trace", "FILE");

    let matches = options.parse(env::args().skip(1))?;

    if matches.opt_present("h") {
        eprintln!("{}", options.usage(usage));
        process::exit(0);
    }
    if matches.free.len() > max_free_args {
        anyhow::bail!("too many arguments\n\n{}", options.usage(usage));
    }

    Ok(matches)
}

/// Installs the global subscriber. Events are filtered through the `LOG`
/// environment variable.
///
/// The returned guard must be kept alive for the chrome trace to be written.
pub fn init_tracing(matches: &getopts::Matches) -> Option<tracing_chrome::FlushGuard> {
    let registry = Registry::default().with(EnvFilter::from_env("LOG")).with(
        HierarchicalLayer::new(4)
            .with_targets(true)
            .with_bracketed_fields(true),
    );
    match matches.opt_str("t") {
        Some(filename) => {
            let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
                .file(filename)
                .build();
            registry.with(chrome_layer).init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    }
}

/// Opens the given file, or standard input.
pub fn reader(filename: Option<&String>) -> Result<Box<dyn io::BufRead>> {
    Ok(match filename {
        Some(filename) => {
            let file = fs::File::open(filename)
                .with_context(|| format!("failed to open {filename:?}"))?;
            Box::new(io::BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    })
}

/// Creates the given file, or returns standard output.
///
/// The writer is buffered, callers must flush it.
pub fn writer(filename: Option<&String>) -> Result<Box<dyn io::Write>> {
    Ok(match filename {
        Some(filename) => {
            let file = fs::File::create(filename)
                .with_context(|| format!("failed to create {filename:?}"))?;
            Box::new(io::BufWriter::new(file))
        }
        None => Box::new(io::BufWriter::new(io::stdout().lock())),
    })
}

pub fn read_points(filename: Option<&String>) -> Result<PointSet> {
    let input = reader(filename)?;
    let points = point_io::points::read(input).context("failed to read point file")?;
    tracing::debug!(point_count = points.len(), "read points");
    Ok(points.into_iter().map(Point2D::from).collect())
}

/// A PCG generator seeded from `seed`, or from the OS when absent.
pub fn rng(seed: Option<u64>) -> rand_pcg::Pcg64 {
    match seed {
        Some(seed) => rand_pcg::Pcg64::seed_from_u64(seed),
        None => rand_pcg::Pcg64::from_entropy(),
    }
}

/// Reads the `-s SEED` option.
pub fn seed(matches: &getopts::Matches) -> Result<Option<u64>> {
    matches
        .opt_get("s")
        .context("invalid value for option 'seed'")
}
