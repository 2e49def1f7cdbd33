//! A few useful geometric types

use itertools::Itertools as _;
use itertools::MinMaxResult;
use nalgebra::Vector2;

use crate::algorithms::Error;
use crate::algorithms::KMeans;
use crate::algorithms::LineEquation;
use crate::ClusterAssignment;
use crate::IndexShuffle;
use crate::Partition as _;

pub type Point2D = Vector2<f64>;

/// An ordered, append-only collection of 2D points.
///
/// Points keep their insertion order, which is also the order of the labels
/// returned by [`PointSet::cluster`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point2D>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Appends the point `(x, y)`.
    ///
    /// Coordinates are not validated. Non-finite values are stored as-is and
    /// make [`PointSet::fit_line`] fail later on.
    pub fn add(&mut self, x: f64, y: f64) {
        self.points.push(Point2D::new(x, y));
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Best-fit line of the set, by orthogonal regression.
    ///
    /// See [`crate::fit_line`].
    pub fn fit_line(&self) -> Result<LineEquation, Error> {
        crate::fit_line(&self.points)
    }

    /// Splits the set into `k` clusters with the default [`KMeans`] settings,
    /// seeding centroids from the thread-local random generator.
    pub fn cluster(&self, k: i64) -> Result<ClusterAssignment, Error> {
        self.cluster_with(k, rand::thread_rng())
    }

    /// Same as [`PointSet::cluster`], with a caller-provided random source.
    pub fn cluster_with<R>(&self, k: i64, rng: R) -> Result<ClusterAssignment, Error>
    where
        R: IndexShuffle,
    {
        let part_count = crate::algorithms::checked_part_count(k, self.len())?;
        let mut labels = vec![0; self.len()];
        KMeans::new(part_count, rng).partition(&mut labels, self.points())?;
        Ok(ClusterAssignment::new(labels, part_count))
    }
}

impl FromIterator<Point2D> for PointSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Point2D>,
    {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point2D> for PointSet {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Point2D>,
    {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub p_min: Point2D,
    pub p_max: Point2D,
}

impl BoundingBox {
    /// Returns `None` if `points` is empty.
    pub fn from_points<P>(points: P) -> Option<Self>
    where
        P: IntoIterator<Item = Point2D>,
        P::IntoIter: Clone,
    {
        let points = points.into_iter();
        let (x_min, x_max) = minmax(points.clone().map(|p| p.x))?;
        let (y_min, y_max) = minmax(points.map(|p| p.y))?;
        Some(Self {
            p_min: Point2D::new(x_min, y_min),
            p_max: Point2D::new(x_max, y_max),
        })
    }

    pub fn width(&self) -> f64 {
        self.p_max.x - self.p_min.x
    }

    pub fn height(&self) -> f64 {
        self.p_max.y - self.p_min.y
    }

    pub fn contains(&self, point: &Point2D) -> bool {
        self.p_min.x <= point.x
            && point.x <= self.p_max.x
            && self.p_min.y <= point.y
            && point.y <= self.p_max.y
    }
}

fn minmax(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(min, max) => Some((min, max)),
    }
}

/// Means and central second moments of a set of points.
///
/// Sums are accumulated in input order so that results are reproducible
/// bit for bit.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SecondMoments {
    pub mean: Point2D,
    pub sxx: f64,
    pub syy: f64,
    pub sxy: f64,
}

impl SecondMoments {
    pub fn from_points(points: &[Point2D]) -> Self {
        let mean = center(points);
        let (sxx, syy, sxy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), p| {
            let dx = p.x - mean.x;
            let dy = p.y - mean.y;
            (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
        });
        Self { mean, sxx, syy, sxy }
    }
}

/// Arithmetic mean of the given points.
pub(crate) fn center(points: &[Point2D]) -> Point2D {
    assert!(!points.is_empty());
    let total = points.len() as f64;
    points.iter().fold(Point2D::zeros(), |acc, p| acc + p) / total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_get_points() {
        let mut set = PointSet::new();
        set.add(20., 20.2);
        set.add(10., 2.);
        set.add(0., -4.);

        assert_eq!(set.len(), 3);
        assert_eq!(
            set.points(),
            &[
                Point2D::new(20., 20.2),
                Point2D::new(10., 2.),
                Point2D::new(0., -4.)
            ]
        );
    }

    #[test]
    fn test_repeated_and_non_finite_points() {
        let mut set = PointSet::new();
        set.add(1., 1.);
        set.add(1., 1.);
        set.add(f64::NAN, f64::INFINITY);

        assert_eq!(set.len(), 3);
        assert!(set.points()[2].x.is_nan());
    }

    #[test]
    fn test_center() {
        let points = [
            Point2D::new(3., 0.),
            Point2D::new(0., 3.),
            Point2D::new(6., -3.),
        ];
        assert_ulps_eq!(center(&points), Point2D::new(3., 0.));
    }

    #[test]
    fn test_second_moments() {
        let points = [
            Point2D::new(3., 0.),
            Point2D::new(0., 3.),
            Point2D::new(6., -3.),
        ];
        let moments = SecondMoments::from_points(&points);

        assert_ulps_eq!(moments.sxx, 18.);
        assert_ulps_eq!(moments.syy, 18.);
        assert_ulps_eq!(moments.sxy, -18.);
    }

    #[test]
    fn test_bounding_box() {
        let points = vec![
            Point2D::new(1., 2.),
            Point2D::new(0., 0.),
            Point2D::new(3., 1.),
            Point2D::new(5., 4.),
            Point2D::new(4., 5.),
        ];

        let bb = BoundingBox::from_points(points.iter().cloned()).unwrap();

        assert_ulps_eq!(bb.p_min, Point2D::new(0., 0.));
        assert_ulps_eq!(bb.p_max, Point2D::new(5., 5.));
        assert!(bb.contains(&Point2D::new(2.5, 2.5)));
        assert!(!bb.contains(&Point2D::new(-1., 2.5)));
    }

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(BoundingBox::from_points(Vec::new()), None);
    }
}
