//! K-means clustering with restart selection.
//!
//! Each trial seeds its centroids on distinct points drawn at random, then
//! alternates between assigning points to their nearest centroid and moving
//! centroids to the mean of their points. A trial stops once the mean
//! point-to-centroid distance moves by less than a relative threshold, or
//! after a fixed number of iterations.
//!
//! Several independent trials are run and the one that converged best is
//! kept, in the manner of RANSAC.

use std::cmp::Ordering;

use super::Error;
use super::InvalidArgument;
use crate::IndexShuffle;
use crate::Point2D;

const TRIAL_COUNT: usize = 10;
const MAX_ITER: usize = 100;
const DELTA_THRESHOLD: f64 = 0.01;

/// Outcome of a single k-means run.
#[derive(Debug)]
struct Trial {
    labels: Vec<usize>,
    centers: Vec<Point2D>,

    /// Relative change of the error during the last iteration.
    score: f64,

    /// Mean distance from points to their centroid.
    error: f64,

    iterations: usize,
}

/// `|current - previous| / previous`, with `0 / 0` counted as converged.
fn relative_change(previous: f64, current: f64) -> f64 {
    if previous == 0.0 {
        if current == 0.0 {
            0.0
        } else {
            f64::INFINITY
        }
    } else {
        f64::abs(current - previous) / previous
    }
}

/// Index of the centroid closest to `point`, the lowest one on ties.
fn nearest_center(point: &Point2D, centers: &[Point2D]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, center) in centers.iter().enumerate() {
        let distance = (center - point).norm();
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

fn assign(points: &[Point2D], centers: &[Point2D], labels: &mut [usize]) {
    for (point, label) in points.iter().zip(labels) {
        *label = nearest_center(point, centers);
    }
}

/// Moves each centroid to the mean of its points.
///
/// Centroids that lost all their points stay where they are.
fn update_centers(points: &[Point2D], labels: &[usize], centers: &mut [Point2D]) {
    let mut sums = vec![Point2D::zeros(); centers.len()];
    let mut counts = vec![0_usize; centers.len()];
    for (point, &label) in points.iter().zip(labels) {
        sums[label] += point;
        counts[label] += 1;
    }
    for ((center, sum), count) in centers.iter_mut().zip(sums).zip(counts) {
        if count != 0 {
            *center = sum / count as f64;
        }
    }
}

fn mean_distance(points: &[Point2D], labels: &[usize], centers: &[Point2D]) -> f64 {
    let total: f64 = points
        .iter()
        .zip(labels)
        .map(|(point, &label)| (point - centers[label]).norm())
        .sum();
    total / points.len() as f64
}

fn run_trial<S>(
    points: &[Point2D],
    part_count: usize,
    max_iter: usize,
    delta_threshold: f64,
    rng: &mut S,
) -> Trial
where
    S: IndexShuffle + ?Sized,
{
    let mut permutation: Vec<usize> = (0..points.len()).collect();
    rng.shuffle_indices(&mut permutation);
    let mut centers: Vec<Point2D> = permutation[..part_count]
        .iter()
        .map(|&i| points[i])
        .collect();

    let mut labels = vec![0; points.len()];
    let mut error = f64::MAX;
    let mut iterations = 0;

    // The first iteration always runs, since nothing is closer to f64::MAX
    // than itself.
    let score = loop {
        iterations += 1;
        assign(points, &centers, &mut labels);
        update_centers(points, &labels, &mut centers);

        let new_error = mean_distance(points, &labels, &centers);
        let change = relative_change(error, new_error);
        error = new_error;
        tracing::trace!(iterations, error, change);

        if change <= delta_threshold || max_iter <= iterations {
            break change;
        }
    };

    tracing::debug!(iterations, error, score, "trial done");

    Trial {
        labels,
        centers,
        score,
        error,
        iterations,
    }
}

/// Orders trials by score, then by error. NaN counts as the worst value.
fn trial_cmp(a: &Trial, b: &Trial) -> Ordering {
    fn key(v: f64) -> f64 {
        if v.is_nan() {
            f64::INFINITY
        } else {
            v
        }
    }
    f64::total_cmp(&key(a.score), &key(b.score))
        .then(f64::total_cmp(&key(a.error), &key(b.error)))
}

fn k_means<R>(
    part_ids: &mut [usize],
    points: &[Point2D],
    settings: &mut KMeans<R>,
) -> Result<Metadata, Error>
where
    R: IndexShuffle,
{
    if part_ids.len() != points.len() {
        return Err(InvalidArgument::InputLenMismatch {
            expected: part_ids.len(),
            actual: points.len(),
        }
        .into());
    }
    let part_count = settings.part_count;
    if part_count == 0 {
        return Err(InvalidArgument::NonPositivePartCount { requested: 0 }.into());
    }
    if points.len() < part_count {
        return Err(InvalidArgument::TooManyParts {
            requested: part_count,
            point_count: points.len(),
        }
        .into());
    }

    let _span = tracing::info_span!("k_means", part_count, point_count = points.len()).entered();

    let max_iter = settings.max_iter;
    let delta_threshold = settings.delta_threshold;
    let rng = &mut settings.rng;
    let mut iterations = Vec::with_capacity(settings.trial_count);

    let (best_trial, best) = super::best_of(
        settings.trial_count,
        |trial| {
            let _span = tracing::debug_span!("trial", trial).entered();
            let outcome = run_trial(points, part_count, max_iter, delta_threshold, &mut *rng);
            iterations.push(outcome.iterations);
            outcome
        },
        trial_cmp,
    )
    .ok_or(InvalidArgument::NoTrial)?;

    tracing::info!(
        best_trial,
        score = best.score,
        error = best.error,
        "selected trial"
    );

    part_ids.copy_from_slice(&best.labels);

    Ok(Metadata {
        best_trial,
        score: best.score,
        error: best.error,
        centers: best.centers,
        iterations,
    })
}

/// Diagnostic data for a [`KMeans`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    /// Index of the trial whose assignment was kept.
    pub best_trial: usize,

    /// Relative change of the error during the last iteration of the kept
    /// trial.
    pub score: f64,

    /// Mean distance from points to their centroid, in the kept trial.
    pub error: f64,

    /// Centroids of the kept trial. A centroid that ended up with no point is
    /// the last position it had.
    pub centers: Vec<Point2D>,

    /// Number of iterations run by each trial.
    pub iterations: Vec<usize>,
}

/// K-means clustering with restart selection.
///
/// Runs `trial_count` independent k-means trials and keeps the one whose last
/// iteration changed the mean point-to-centroid distance the least. Trials
/// with the same score are ranked by that distance, and remaining ties go to
/// the earliest trial.
///
/// Initial centroids are drawn from the points through `rng`; any
/// [`rand::Rng`] can be used.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), scatter::Error> {
/// use scatter::Partition as _;
/// use scatter::Point2D;
///
/// let points = [
///     Point2D::new(0., 0.),
///     Point2D::new(1., 0.),
///     Point2D::new(0., 1.),
///     Point2D::new(10., 10.),
///     Point2D::new(10., 11.),
///     Point2D::new(12., 10.),
/// ];
/// let mut partition = [0; 6];
///
/// let metadata = scatter::KMeans::new(2, rand::thread_rng())
///     .partition(&mut partition, &points[..])?;
///
/// assert_eq!(partition[0], partition[1]);
/// assert_ne!(partition[0], partition[3]);
/// assert_eq!(metadata.iterations.len(), 10);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct KMeans<R> {
    pub part_count: usize,
    pub trial_count: usize,
    pub max_iter: usize,
    pub delta_threshold: f64,
    pub rng: R,
}

impl<R> KMeans<R> {
    /// Default settings: 10 trials of at most 100 iterations, stopping below
    /// a 1% relative change.
    pub fn new(part_count: usize, rng: R) -> Self {
        Self {
            part_count,
            trial_count: TRIAL_COUNT,
            max_iter: MAX_ITER,
            delta_threshold: DELTA_THRESHOLD,
            rng,
        }
    }
}

impl<'a, R> crate::Partition<&'a [Point2D]> for KMeans<R>
where
    R: IndexShuffle,
{
    type Metadata = Metadata;
    type Error = Error;

    fn partition(
        &mut self,
        part_ids: &mut [usize],
        points: &'a [Point2D],
    ) -> Result<Self::Metadata, Self::Error> {
        k_means(part_ids, points, self)
    }
}
