//! Core evaluation trait.
//!
//! This module provides the `Interpolant` trait that represents any curve
//! which can be queried for a value at a horizontal position. The outline
//! builder samples through this trait, so it never needs to know how the
//! curve was fitted.

/// Common interface for curves that can be sampled along the x axis.
///
/// The trait provides two fundamental operations:
/// - Single point evaluation via `evaluate()`
/// - Batch evaluation via `sample_into()`
pub trait Interpolant {
    /// Evaluates the curve at `x`.
    ///
    /// # Arguments
    ///
    /// * `x` - Horizontal position in surface units
    ///
    /// # Returns
    ///
    /// The curve height at `x`
    fn evaluate(&self, x: f64) -> f64;

    /// Evaluates the curve at every position in `xs`, writing into `out`.
    ///
    /// Default implementation calls `evaluate()` for each element.
    /// Implementors may override this for more efficient batch evaluation.
    /// Only `min(xs.len(), out.len())` positions are written.
    ///
    /// # Arguments
    ///
    /// * `xs` - Positions to evaluate
    /// * `out` - Mutable slice receiving the values
    fn sample_into(&self, xs: &[f64], out: &mut [f64]) {
        for (value, &x) in out.iter_mut().zip(xs) {
            *value = self.evaluate(x);
        }
    }
}

/// Implementation of `Interpolant` for `f64` representing a flat line.
///
/// Useful as a baseline before any control points exist, and for testing.
///
/// # Examples
///
/// ```
/// use undulate::Interpolant;
///
/// let flat = 42.0_f64;
/// assert_eq!(flat.evaluate(-10.0), 42.0);
///
/// let mut out = vec![0.0; 3];
/// flat.sample_into(&[0.0, 1.0, 2.0], &mut out);
/// assert_eq!(out, vec![42.0, 42.0, 42.0]);
/// ```
impl Interpolant for f64 {
    fn evaluate(&self, _x: f64) -> f64 {
        *self
    }

    fn sample_into(&self, xs: &[f64], out: &mut [f64]) {
        let n = xs.len().min(out.len());
        out[..n].fill(*self);
    }
}
