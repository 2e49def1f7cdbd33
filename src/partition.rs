//! Utilities to manipulate cluster assignments

use std::ops::Deref;

use crate::Point2D;

/// One cluster label per point, in the order points were added.
///
/// Labels are in `0..part_count()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterAssignment {
    labels: Vec<usize>,
    part_count: usize,
}

impl ClusterAssignment {
    // panics if a label is out of range
    pub fn new(labels: Vec<usize>, part_count: usize) -> Self {
        if let Some(label) = labels.iter().find(|label| part_count <= **label) {
            panic!(
                "Cannot build an assignment with label {} out of {} clusters",
                label, part_count,
            );
        }
        Self { labels, part_count }
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    pub fn into_labels(self) -> Vec<usize> {
        self.labels
    }

    pub fn part_count(&self) -> usize {
        self.part_count
    }

    /// Number of points in each cluster.
    pub fn sizes(&self) -> Vec<usize> {
        self.labels
            .iter()
            .fold(vec![0; self.part_count], |mut acc, &label| {
                acc[label] += 1;
                acc
            })
    }

    /// Indices of the points of each cluster.
    pub fn parts(&self) -> Vec<Vec<usize>> {
        let mut parts = vec![Vec::new(); self.part_count];
        for (i, &label) in self.labels.iter().enumerate() {
            parts[label].push(i);
        }
        parts
    }

    /// Mean of the points of each cluster, `None` for empty clusters.
    ///
    /// # Panics
    ///
    /// Panics if `points` and the assignment do not have the same length.
    pub fn centroids(&self, points: &[Point2D]) -> Vec<Option<Point2D>> {
        assert_eq!(
            points.len(),
            self.labels.len(),
            "expected one label per point",
        );
        let mut sums = vec![Point2D::zeros(); self.part_count];
        for (point, &label) in points.iter().zip(&self.labels) {
            sums[label] += point;
        }
        sums.into_iter()
            .zip(self.sizes())
            .map(|(sum, size)| (size != 0).then(|| sum / size as f64))
            .collect()
    }
}

impl Deref for ClusterAssignment {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.labels
    }
}

impl IntoIterator for ClusterAssignment {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.labels.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_and_parts() {
        let assignment = ClusterAssignment::new(vec![0, 2, 0, 2, 2], 4);

        assert_eq!(assignment.sizes(), vec![2, 0, 3, 0]);
        assert_eq!(
            assignment.parts(),
            vec![vec![0, 2], vec![], vec![1, 3, 4], vec![]]
        );
        assert_eq!(assignment.len(), 5);
        assert_eq!(assignment[1], 2);
    }

    #[test]
    fn test_centroids() {
        let points = [
            Point2D::new(0., 0.),
            Point2D::new(10., 10.),
            Point2D::new(2., 0.),
        ];
        let assignment = ClusterAssignment::new(vec![0, 2, 0], 3);
        let centroids = assignment.centroids(&points);

        assert_ulps_eq!(centroids[0].unwrap(), Point2D::new(1., 0.));
        assert_eq!(centroids[1], None);
        assert_ulps_eq!(centroids[2].unwrap(), Point2D::new(10., 10.));
    }

    #[test]
    #[should_panic]
    fn test_label_out_of_range() {
        let _assignment = ClusterAssignment::new(vec![0, 3], 3);
    }
}
