//! Natural cubic spline with a fixed number of knots.
//!
//! # Design Overview
//!
//! `NaturalSpline` owns a preallocated buffer of `n` [`Segment`]s plus two
//! scratch buffers of `n - 1` elimination coefficients. Nothing is resized
//! after construction: every [`build`](NaturalSpline::build) overwrites the
//! same slots, which keeps the per-frame rebuild allocation-free.
//!
//! ## Fitting
//!
//! The curvature `c[i]` at each interior knot satisfies
//!
//! ```text
//! h[i]·c[i-1] + 2(h[i] + h[i+1])·c[i] + h[i+1]·c[i+1]
//!     = 6·((y[i+1] - y[i]) / h[i+1] - (y[i] - y[i-1]) / h[i])
//! ```
//!
//! with `h[i] = x[i] - x[i-1]` and `c[0] = c[n-1] = 0`. The system is
//! tridiagonal and is solved with the Thomas algorithm in O(n):
//!
//! 1. A forward sweep computes `alpha[i]`, `beta[i]` so that
//!    `c[i] = alpha[i]·c[i+1] + beta[i]`.
//! 2. A backward sweep recovers `c[i]` for the interior knots.
//! 3. A final sweep derives `d[i]` and `b[i]` for each piece from consecutive
//!    curvatures and the y differences.
//!
//! `alpha[0]` and `beta[0]` are written before the sweep reads them, so no
//! state carries over from one build to the next.
//!
//! ## Evaluation
//!
//! [`evaluate`](NaturalSpline::evaluate) locates the first knot at or after
//! `x` with a binary search and evaluates that knot's piece. Below the first
//! knot the first piece is used, which is flat at `y[0]`. Above the last knot
//! the last piece is extrapolated as a cubic; the output is not clamped.

use super::{Segment, SplineError};
use crate::Interpolant;
use std::cmp::Ordering;

/// A natural cubic spline through a fixed number of knots.
///
/// # Examples
///
/// ```
/// use undulate::NaturalSpline;
///
/// let mut spline = NaturalSpline::new(3);
/// spline.build(&[0.0, 5.0, 10.0], &[0.0, 10.0, 0.0]);
///
/// assert_eq!(spline.evaluate(5.0), 10.0);
/// assert!((spline.evaluate(2.5) - spline.evaluate(7.5)).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct NaturalSpline {
    parts: Vec<Segment>,
    alpha: Vec<f64>,
    beta: Vec<f64>,
}

impl NaturalSpline {
    /// Creates a spline with room for `n` knots.
    ///
    /// All segments start zeroed, so evaluating before the first build
    /// returns `0.0` everywhere.
    ///
    /// # Panics
    ///
    /// Panics if `n < 3`.
    pub fn new(n: usize) -> Self {
        match Self::try_new(n) {
            Ok(spline) => spline,
            Err(err) => panic!("{}", err),
        }
    }

    /// Creates a spline with room for `n` knots, rejecting `n < 3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use undulate::{NaturalSpline, SplineError};
    ///
    /// assert_eq!(NaturalSpline::try_new(7).unwrap().len(), 7);
    /// assert_eq!(
    ///     NaturalSpline::try_new(2).unwrap_err(),
    ///     SplineError::TooFewPoints(2)
    /// );
    /// ```
    pub fn try_new(n: usize) -> Result<Self, SplineError> {
        if n < 3 {
            return Err(SplineError::TooFewPoints(n));
        }
        Ok(Self {
            parts: vec![Segment::default(); n],
            alpha: vec![0.0; n - 1],
            beta: vec![0.0; n - 1],
        })
    }

    /// Number of knots this spline was created with.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false; a spline has at least 3 knots.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The fitted pieces, one per knot.
    pub fn segments(&self) -> &[Segment] {
        &self.parts
    }

    /// Iterates over the knot positions of the last build.
    pub fn knots(&self) -> impl Iterator<Item = f64> + '_ {
        self.parts.iter().map(|part| part.x)
    }

    /// Recomputes every segment from the given control points.
    ///
    /// `xs` must be strictly increasing and both slices must hold exactly
    /// [`len`](Self::len) values. Knot order is not checked: a repeated or
    /// inverted knot divides by a zero or negative gap and yields non-finite
    /// or meaningless coefficients. Mismatched lengths are asserted in debug
    /// builds. Use [`try_build`](Self::try_build) when the input is not
    /// already known to be valid.
    ///
    /// # Arguments
    ///
    /// * `xs` - Knot positions
    /// * `ys` - Values at the knots
    pub fn build(&mut self, xs: &[f64], ys: &[f64]) {
        let n = self.parts.len();
        debug_assert!(
            xs.len() == n && ys.len() == n,
            "expected {} knots, got {} x values and {} y values",
            n,
            xs.len(),
            ys.len()
        );

        for (part, (&x, &y)) in self.parts.iter_mut().zip(xs.iter().zip(ys)) {
            *part = Segment {
                x,
                a: y,
                ..Segment::default()
            };
        }

        self.alpha[0] = 0.0;
        self.beta[0] = 0.0;
        for i in 1..n - 1 {
            let hi = xs[i] - xs[i - 1];
            let hi1 = xs[i + 1] - xs[i];
            let diag = 2.0 * (hi + hi1);
            let rhs = 6.0 * ((ys[i + 1] - ys[i]) / hi1 - (ys[i] - ys[i - 1]) / hi);
            let z = hi * self.alpha[i - 1] + diag;
            self.alpha[i] = -hi1 / z;
            self.beta[i] = (rhs - hi * self.beta[i - 1]) / z;
        }

        for i in (1..n - 1).rev() {
            self.parts[i].c = self.alpha[i] * self.parts[i + 1].c + self.beta[i];
        }

        for i in (1..n).rev() {
            let hi = xs[i] - xs[i - 1];
            let prev_c = self.parts[i - 1].c;
            let part = &mut self.parts[i];
            part.d = (part.c - prev_c) / hi;
            part.b = hi * (2.0 * part.c + prev_c) / 6.0 + (ys[i] - ys[i - 1]) / hi;
        }
    }

    /// Validates the control points, then rebuilds.
    ///
    /// Leaves the spline untouched when validation fails.
    ///
    /// # Errors
    ///
    /// - [`SplineError::LengthMismatch`] if either slice has the wrong length
    /// - [`SplineError::NonIncreasingKnots`] if some `xs[i] <= xs[i - 1]`
    ///   (NaN knots are rejected here as well)
    ///
    /// # Examples
    ///
    /// ```
    /// use undulate::{NaturalSpline, SplineError};
    ///
    /// let mut spline = NaturalSpline::new(3);
    /// let err = spline.try_build(&[0.0, 4.0, 4.0], &[1.0, 2.0, 3.0]).unwrap_err();
    /// assert_eq!(err, SplineError::NonIncreasingKnots { index: 2 });
    /// ```
    pub fn try_build(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), SplineError> {
        let n = self.parts.len();
        if xs.len() != n || ys.len() != n {
            return Err(SplineError::LengthMismatch {
                expected: n,
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let out_of_order = xs
            .windows(2)
            .position(|w| w[0].partial_cmp(&w[1]) != Some(Ordering::Less));
        if let Some(index) = out_of_order {
            return Err(SplineError::NonIncreasingKnots { index: index + 1 });
        }
        self.build(xs, ys);
        Ok(())
    }

    /// Returns the spline value at `x` in O(log n).
    ///
    /// When `x` falls exactly on a knot, that knot's own piece is used, so
    /// the knot value is reproduced exactly.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.segment_for(x).value_at(x)
    }

    /// Returns the piece that [`evaluate`](Self::evaluate) would use for `x`.
    pub fn segment_for(&self, x: f64) -> &Segment {
        let n = self.parts.len();
        if x <= self.parts[0].x {
            &self.parts[0]
        } else if x >= self.parts[n - 1].x {
            &self.parts[n - 1]
        } else {
            &self.parts[self.parts.partition_point(|part| part.x < x)]
        }
    }
}

impl Interpolant for NaturalSpline {
    fn evaluate(&self, x: f64) -> f64 {
        NaturalSpline::evaluate(self, x)
    }
}
