//! Line fitting by orthogonal regression (total least squares).
//!
//! The fitted line minimizes the sum of squared perpendicular distances from
//! the points to the line. Its normal makes an angle θ/2 with the x axis,
//! where θ solves
//!
//! ```text
//! tan θ = 2·Sxy / (Sxx − Syy)
//! ```
//!
//! with `Sxx`, `Syy`, `Sxy` the central second moments of the points. The
//! two solutions 180° apart correspond to the best and the worst line; the
//! sign of `(Syy − Sxx)·cos θ − 2·Sxy·sin θ` tells them apart.

use approx::AbsDiffEq;
use approx::RelativeEq;
use std::fmt;
use std::str::FromStr;

use super::Error;
use super::InvalidInput;
use crate::geometry::SecondMoments;
use crate::Point2D;

/// The line `a·x + b·y + c = 0`.
///
/// Lines returned by [`fit_line`] have a unit normal, that is `a² + b² = 1`.
///
/// The [`Display`](fmt::Display) implementation prints coefficients rounded
/// to two decimals, as in `0.78x - 0.63y - 1.29 = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl LineEquation {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn coefficients(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }

    pub fn normal(&self) -> Point2D {
        Point2D::new(self.a, self.b)
    }

    /// Signed distance from `point` to the line.
    ///
    /// Only a true distance when the normal has unit length.
    pub fn distance(&self, point: &Point2D) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// The ordinate of the line at `x`, or `None` for vertical lines.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        if self.b == 0.0 {
            return None;
        }
        Some((-self.a * x - self.c) / self.b)
    }
}

/// Rounds half up to two decimals.
fn round2(v: f64) -> f64 {
    f64::floor(v * 100.0 + 0.5) / 100.0
}

/// Shortest decimal form, with at least one fractional digit.
struct Decimal(f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Sign token and rounded magnitude of a non-leading coefficient.
///
/// Only strictly positive values get a `+`: zero, whatever its sign, is
/// printed `- 0.0`.
struct Term(f64);

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0.0 {
            write!(f, " + {}", Decimal(round2(self.0)))
        } else {
            write!(f, " - {}", Decimal(round2(self.0.abs())))
        }
    }
}

impl fmt::Display for LineEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}y{} = 0",
            Decimal(round2(self.a)),
            Term(self.b),
            Term(self.c),
        )
    }
}

/// Error returned when parsing a [`LineEquation`] fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseLineError {
    input: String,
}

impl fmt::Display for ParseLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected a line of the form \"ax + by + c = 0\", got {:?}",
            self.input,
        )
    }
}

impl std::error::Error for ParseLineError {}

impl FromStr for LineEquation {
    type Err = ParseLineError;

    /// Parses the output of the [`Display`](fmt::Display) implementation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLineError {
            input: s.to_owned(),
        };

        fn signed(sign: &str, value: f64) -> Option<f64> {
            match sign {
                "+" => Some(value),
                "-" => Some(-value),
                _ => None,
            }
        }

        let tokens: Vec<&str> = s.split_whitespace().collect();
        let &[a, b_sign, b, c_sign, c, "=", "0"] = tokens.as_slice() else {
            return Err(err());
        };
        let a = a.strip_suffix('x').ok_or_else(err)?;
        let b = b.strip_suffix('y').ok_or_else(err)?;
        let a: f64 = a.parse().map_err(|_| err())?;
        let b: f64 = b.parse().map_err(|_| err())?;
        let c: f64 = c.parse().map_err(|_| err())?;

        Ok(Self {
            a,
            b: signed(b_sign, b).ok_or_else(err)?,
            c: signed(c_sign, c).ok_or_else(err)?,
        })
    }
}

impl AbsDiffEq for LineEquation {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
    }
}

impl RelativeEq for LineEquation {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
    }
}

/// Fits a line through `points` by orthogonal regression.
///
/// # Errors
///
/// Fails with [`Error::InvalidInput`] when there are fewer than two points,
/// when the points have no main direction (all coincide, or spread evenly
/// in every direction), or when coordinates are not finite.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), scatter::Error> {
/// use scatter::Point2D;
///
/// let points = [
///     Point2D::new(3., 8.),
///     Point2D::new(4., 8.),
///     Point2D::new(5., 8.),
/// ];
/// let line = scatter::fit_line(&points)?;
/// assert_eq!(line.to_string(), "0.0x + 1.0y - 8.0 = 0");
/// # Ok(())
/// # }
/// ```
pub fn fit_line(points: &[Point2D]) -> Result<LineEquation, Error> {
    let _span = tracing::info_span!("fit_line", point_count = points.len()).entered();

    if points.len() < 2 {
        return Err(InvalidInput::NotEnoughPoints {
            actual: points.len(),
        }
        .into());
    }

    let SecondMoments {
        mean,
        sxx,
        syy,
        sxy,
    } = SecondMoments::from_points(points);
    tracing::debug!(sxx, syy, sxy, "second moments");

    if sxx - syy == 0.0 && sxy == 0.0 {
        return Err(InvalidInput::UndefinedDirection.into());
    }

    let mut theta = f64::atan(2.0 * sxy / (sxx - syy)).to_degrees();
    let f = (syy - sxx) * theta.to_radians().cos() - 2.0 * sxy * theta.to_radians().sin();
    if f <= 0.0 {
        // Other root of the tangent equation.
        theta += 180.0;
    }

    let half_theta = theta.to_radians() / 2.0;
    let a = half_theta.cos();
    let b = half_theta.sin();
    let c = -a * mean.x - b * mean.y;

    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(InvalidInput::NonFinite.into());
    }

    let line = LineEquation { a, b, c };
    tracing::info!(theta, %line, "fitted line");
    Ok(line)
}
