use anyhow::Context as _;
use anyhow::Result;
use scatter::LineEquation;
use scatter::PointSet;
use scatter_tools::svg;
use std::io::Write as _;

const USAGE: &str = "Usage: scatter-plot [options]";

const DEFAULT_SIZE: u32 = 600;

#[derive(Debug)]
enum Analysis {
    Line,
    Clusters(i64),
}

#[derive(Debug)]
struct Dataset {
    path: String,
    analysis: Analysis,
}

impl Dataset {
    /// Parses `FILE:K`.
    fn clusters(spec: &str) -> Result<Dataset> {
        let (path, k) = spec
            .rsplit_once(':')
            .with_context(|| format!("expected FILE:K, got {spec:?}"))?;
        let k = k
            .parse::<i64>()
            .with_context(|| format!("invalid cluster count in {spec:?}"))?;
        Ok(Dataset {
            path: path.to_owned(),
            analysis: Analysis::Clusters(k),
        })
    }
}

struct Settings {
    references: Vec<LineEquation>,
    size: u32,
    rng: rand_pcg::Pcg64,
}

fn plot_dataset(dataset: &Dataset, settings: &mut Settings) -> Result<String> {
    let points: PointSet = scatter_tools::read_points(Some(&dataset.path))?;
    let window = svg::Window::around(points.points()).context("no points to plot")?;
    let mut plot = svg::Plot::new(window, settings.size, settings.size);

    match dataset.analysis {
        Analysis::Line => {
            let line = points.fit_line().context("failed to fit a line")?;
            println!("{}: {line}", dataset.path);
            for &point in points.points() {
                plot.add_point(point, "black");
            }
            plot.add_line(&line, "red");
        }
        Analysis::Clusters(k) => {
            let clusters = points
                .cluster_with(k, &mut settings.rng)
                .with_context(|| format!("failed to make {k} clusters"))?;
            tracing::info!(sizes = ?clusters.sizes(), "clustered points");
            for (&point, &label) in points.points().iter().zip(clusters.iter()) {
                plot.add_point(point, svg::cluster_color(label));
            }
        }
    }
    for reference in &settings.references {
        plot.add_line(reference, "gray");
    }

    let output_path = format!("{}.svg", dataset.path);
    let mut output = scatter_tools::writer(Some(&output_path))?;
    plot.write(&mut output).context("failed to write plot")?;
    output.flush()?;

    Ok(output_path)
}

fn main() -> Result<()> {
    let mut options = getopts::Options::new();
    options.optmulti("l", "line", "fit a line through the points of FILE", "FILE");
    options.optmulti("c", "clusters", "split the points of FILE into K clusters", "FILE:K");
    options.optmulti("e", "equation", "draw a reference line on every plot", "EQUATION");
    options.optopt("s", "seed", "seed of the random generator", "SEED");
    options.optopt("w", "size", "width and height of the images (default: 600)", "PIXELS");

    let matches = scatter_tools::parse_args(options, USAGE, 0)?;
    let _trace_guard = scatter_tools::init_tracing(&matches);

    let mut datasets: Vec<Dataset> = matches
        .opt_strs("l")
        .into_iter()
        .map(|path| Dataset {
            path,
            analysis: Analysis::Line,
        })
        .collect();
    for spec in matches.opt_strs("c") {
        datasets.push(Dataset::clusters(&spec)?);
    }
    if datasets.is_empty() {
        anyhow::bail!("nothing to plot, see -l and -c\n\n{USAGE}");
    }

    let references = matches
        .opt_strs("e")
        .iter()
        .map(|equation| {
            equation
                .parse::<LineEquation>()
                .with_context(|| format!("invalid value for option 'equation': {equation:?}"))
        })
        .collect::<Result<_>>()?;
    let size = matches
        .opt_get_default("w", DEFAULT_SIZE)
        .context("invalid value for option 'size'")?;
    let mut settings = Settings {
        references,
        size,
        rng: scatter_tools::rng(scatter_tools::seed(&matches)?),
    };

    let mut failure_count = 0;
    for dataset in &datasets {
        let _span = tracing::info_span!("dataset", path = %dataset.path).entered();
        match plot_dataset(dataset, &mut settings) {
            Ok(output_path) => tracing::info!(%output_path, "wrote plot"),
            Err(err) => {
                tracing::error!("{}: {:#}", dataset.path, err);
                failure_count += 1;
            }
        }
    }
    if failure_count != 0 {
        tracing::warn!(
            failure_count,
            dataset_count = datasets.len(),
            "some datasets were skipped"
        );
    }

    Ok(())
}
