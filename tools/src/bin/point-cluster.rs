use anyhow::Context as _;
use anyhow::Result;
use scatter::Partition as _;
use std::io::Write as _;

const USAGE: &str = "Usage: point-cluster [options] [in-points [out-labels]] <in.txt >out.txt";

fn main() -> Result<()> {
    let mut options = getopts::Options::new();
    options.optopt("k", "clusters", "number of clusters", "N");
    options.optopt("n", "trials", "number of k-means runs (default: 10)", "N");
    options.optopt("s", "seed", "seed of the random generator", "SEED");
    options.optflag("v", "verbose", "print diagnostic data");

    let matches = scatter_tools::parse_args(options, USAGE, 2)?;
    let _trace_guard = scatter_tools::init_tracing(&matches);

    let part_count: usize = matches
        .opt_get("k")
        .context("invalid value for option 'clusters'")?
        .context("missing required option 'clusters'")?;
    let rng = scatter_tools::rng(scatter_tools::seed(&matches)?);
    let mut k_means = scatter::KMeans::new(part_count, rng);
    if let Some(trial_count) = matches
        .opt_get("n")
        .context("invalid value for option 'trials'")?
    {
        k_means.trial_count = trial_count;
    }

    let points = scatter_tools::read_points(matches.free.get(0))?;
    let mut labels = vec![0; points.len()];
    let metadata = k_means
        .partition(&mut labels, points.points())
        .context("failed to cluster points")?;

    if matches.opt_present("v") {
        eprintln!("{metadata:?}");
    }

    let mut output = scatter_tools::writer(matches.free.get(1))?;
    point_io::labels::write(&mut output, labels).context("failed to write labels")?;
    output.flush()?;

    Ok(())
}
