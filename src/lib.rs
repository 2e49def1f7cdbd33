//! A library to analyze sets of 2D points.
//!
//! # Crate Layout
//!
//! Points are collected in a [`PointSet`], which exposes the two analyses
//! offered by the crate:
//!
//! - [Line fitting][fit_line], by orthogonal (total least squares) regression.
//!   The result is a [`LineEquation`] `ax + by + c = 0` with `a² + b² = 1`.
//! - [Clustering][KMeans], by k-means restarted several times from random
//!   centroids. The best run is chosen with [`best_of`].
//!
//! Clustering algorithms implement the [`Partition`] trait, which is generic
//! around its input.
//!
//! # Example
//!
//! ```rust
//! let mut points = scatter::PointSet::new();
//! for x in 3..9 {
//!     points.add(x as f64, 8.0);
//! }
//!
//! let line = points.fit_line()?;
//! assert_eq!(line.to_string(), "0.0x + 1.0y - 8.0 = 0");
//!
//! let clusters = points.cluster(1)?;
//! assert_eq!(clusters.labels(), &[0; 6]);
//! # Ok::<(), scatter::Error>(())
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod algorithms;
mod geometry;
mod partition;
mod shuffle;

#[cfg(test)]
mod tests;

pub use crate::algorithms::best_of;
pub use crate::algorithms::fit_line;
pub use crate::algorithms::Error;
pub use crate::algorithms::InvalidArgument;
pub use crate::algorithms::InvalidInput;
pub use crate::algorithms::KMeans;
pub use crate::algorithms::KMeansMetadata;
pub use crate::algorithms::LineEquation;
pub use crate::algorithms::ParseLineError;
pub use crate::geometry::BoundingBox;
pub use crate::geometry::Point2D;
pub use crate::geometry::PointSet;
pub use crate::partition::ClusterAssignment;
pub use crate::shuffle::IndexShuffle;

pub use nalgebra;

/// The `Partition` trait allows for partitioning data.
///
/// Clustering algorithms implement this trait.
///
/// The generic argument `M` defines the input of the algorithms (e.g. a slice
/// of 2D points).
///
/// The input partition must be of the correct size and its contents may or may
/// not be used by the algorithms.
pub trait Partition<M> {
    /// Diagnostic data returned for a specific run of the algorithm.
    type Metadata;

    /// Error details, should the algorithm fail to run.
    type Error;

    /// Partition the given data and output the part ID of each element in
    /// `part_ids`.
    ///
    /// Part IDs are contiguous and start from zero.
    fn partition(&mut self, part_ids: &mut [usize], data: M)
        -> Result<Self::Metadata, Self::Error>;
}
