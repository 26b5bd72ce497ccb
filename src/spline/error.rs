use std::fmt;

/// Error type for rejecting control points in a checked spline build.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Fewer knots than a natural cubic spline needs
    TooFewPoints(usize),
    /// The x or y slice does not match the number of segments
    LengthMismatch {
        /// Number of segments the spline was created with
        expected: usize,
        /// Length of the x slice
        xs: usize,
        /// Length of the y slice
        ys: usize,
    },
    /// `xs[index]` is not strictly greater than `xs[index - 1]`
    NonIncreasingKnots { index: usize },
}

impl fmt::Display for SplineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplineError::TooFewPoints(n) => {
                write!(f, "natural cubic spline needs at least 3 knots, got {}", n)
            }
            SplineError::LengthMismatch { expected, xs, ys } => write!(
                f,
                "expected {} knots, got {} x values and {} y values",
                expected, xs, ys
            ),
            SplineError::NonIncreasingKnots { index } => {
                write!(
                    f,
                    "knot {} is not strictly greater than knot {}",
                    index,
                    index - 1
                )
            }
        }
    }
}

impl std::error::Error for SplineError {}
