use std::fmt;

mod k_means;
mod line_fit;
mod restart;

pub use k_means::KMeans;
pub use k_means::Metadata as KMeansMetadata;
pub use line_fit::fit_line;
pub use line_fit::LineEquation;
pub use line_fit::ParseLineError;
pub use restart::best_of;

/// Common errors thrown by algorithms.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Algorithm parameters are out of range for the given input.
    InvalidArgument(InvalidArgument),

    /// Input points do not allow the computation.
    InvalidInput(InvalidInput),
}

/// Details of [`Error::InvalidArgument`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum InvalidArgument {
    /// The requested number of clusters is zero or negative.
    NonPositivePartCount { requested: i64 },

    /// More clusters than points were requested.
    TooManyParts { requested: usize, point_count: usize },

    /// Input sets don't have matching lengths.
    InputLenMismatch { expected: usize, actual: usize },

    /// Restart selection needs at least one trial.
    NoTrial,
}

/// Details of [`Error::InvalidInput`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum InvalidInput {
    /// A line needs at least two points.
    NotEnoughPoints { actual: usize },

    /// Points spread evenly in every direction (or all coincide), so no
    /// direction minimizes the orthogonal distances.
    UndefinedDirection,

    /// Coordinates or intermediate results are not finite.
    NonFinite,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            Error::InvalidInput(reason) => write!(f, "invalid input: {reason}"),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NonPositivePartCount { requested } => {
                write!(f, "cluster count must be positive, got {requested}")
            }
            InvalidArgument::TooManyParts {
                requested,
                point_count,
            } => write!(
                f,
                "cannot make {requested} clusters out of {point_count} points",
            ),
            InvalidArgument::InputLenMismatch { expected, actual } => write!(
                f,
                "input sets don't have the same length (expected {expected} items, got {actual})",
            ),
            InvalidArgument::NoTrial => write!(f, "trial count must be positive"),
        }
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::NotEnoughPoints { actual } => {
                write!(f, "expected at least 2 points, got {actual}")
            }
            InvalidInput::UndefinedDirection => write!(f, "points have no main direction"),
            InvalidInput::NonFinite => write!(f, "input contains non-finite values"),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidArgument> for Error {
    fn from(reason: InvalidArgument) -> Self {
        Error::InvalidArgument(reason)
    }
}

impl From<InvalidInput> for Error {
    fn from(reason: InvalidInput) -> Self {
        Error::InvalidInput(reason)
    }
}

/// Validates a cluster count requested for `point_count` points.
pub(crate) fn checked_part_count(requested: i64, point_count: usize) -> Result<usize, Error> {
    let part_count = match usize::try_from(requested) {
        Ok(0) | Err(_) => return Err(InvalidArgument::NonPositivePartCount { requested }.into()),
        Ok(part_count) => part_count,
    };
    if point_count < part_count {
        return Err(InvalidArgument::TooManyParts {
            requested: part_count,
            point_count,
        }
        .into());
    }
    Ok(part_count)
}
