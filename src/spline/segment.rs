//! A single cubic piece of the spline.

/// One cubic piece of a natural spline, anchored at its knot.
///
/// The piece stored at knot `i` describes the curve on `[x[i-1], x[i]]` and is
/// expressed relative to its own knot, so the local offset `dx = x - self.x`
/// is zero or negative inside the piece:
///
/// `a + b·dx + c·dx²/2 + d·dx³/6`
///
/// `a` is the knot value, `b` the slope at the knot, `c` the curvature at the
/// knot and `d` the rate of change of the curvature over the piece.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    /// Knot position
    pub x: f64,
    /// Value at the knot
    pub a: f64,
    /// First derivative at the knot
    pub b: f64,
    /// Second derivative at the knot
    pub c: f64,
    /// Third derivative over the piece
    pub d: f64,
}

impl Segment {
    /// Evaluates the cubic at `x`.
    ///
    /// # Examples
    ///
    /// ```
    /// use undulate::Segment;
    ///
    /// let seg = Segment { x: 2.0, a: 1.0, b: 0.5, c: 0.0, d: 0.0 };
    /// assert_eq!(seg.value_at(2.0), 1.0);
    /// assert_eq!(seg.value_at(0.0), 0.0);
    /// ```
    #[inline]
    pub fn value_at(&self, x: f64) -> f64 {
        let dx = x - self.x;
        self.a + (self.b + (self.c / 2.0 + self.d * dx / 6.0) * dx) * dx
    }

    /// First derivative of the cubic at `x`.
    #[inline]
    pub fn slope_at(&self, x: f64) -> f64 {
        let dx = x - self.x;
        self.b + (self.c + self.d * dx / 2.0) * dx
    }

    /// Second derivative of the cubic at `x`.
    #[inline]
    pub fn curvature_at(&self, x: f64) -> f64 {
        self.c + self.d * (x - self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_derivatives_match_polynomial() {
        // f(dx) = 1 + 2dx + 3dx² + 4dx³
        let seg = Segment {
            x: 1.0,
            a: 1.0,
            b: 2.0,
            c: 6.0,
            d: 24.0,
        };
        let dx = -0.5;
        let x = 1.0 + dx;
        assert!(approx_eq(
            seg.value_at(x),
            1.0 + 2.0 * dx + 3.0 * dx * dx + 4.0 * dx * dx * dx
        ));
        assert!(approx_eq(seg.slope_at(x), 2.0 + 6.0 * dx + 12.0 * dx * dx));
        assert!(approx_eq(seg.curvature_at(x), 6.0 + 24.0 * dx));
    }

    #[test]
    fn test_default_is_zero() {
        let seg = Segment::default();
        assert_eq!(seg.value_at(123.0), 0.0);
        assert_eq!(seg.slope_at(-4.0), 0.0);
    }
}
