//! Closed, fillable outline of the waveform.

use crate::Interpolant;

/// A closed polygon whose top edge follows a sampled curve.
///
/// The point buffer is reused across rebuilds. Points are emitted in this
/// order:
///
/// 1. `(W, f(W))`, the top right corner
/// 2. `(W, H)` and `(0, H)` along the right, bottom and left edges
/// 3. `(0, f(0))`, the top left corner
/// 4. `curve_points` samples at `x = i · floor(W / curve_points)`
/// 5. `(W, f(W))` again, closing the shape
///
/// # Examples
///
/// ```
/// use undulate::Outline;
///
/// let mut outline = Outline::new();
/// outline.rebuild(&40.0_f64, 100.0, 50.0, 4);
///
/// assert_eq!(outline.len(), 9);
/// assert_eq!(outline.points()[0], (100.0, 40.0));
/// assert_eq!(outline.points()[1], (100.0, 50.0));
/// assert_eq!(outline.points()[8], (100.0, 40.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    points: Vec<(f64, f64)>,
}

impl Outline {
    /// Corners emitted before the curve samples.
    const LEADING_CORNERS: usize = 4;

    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an outline with room for `curve_points` samples.
    pub fn with_capacity(curve_points: usize) -> Self {
        Self {
            points: Vec::with_capacity(curve_points + Self::LEADING_CORNERS + 1),
        }
    }

    /// Resamples `curve` over a `width × height` surface.
    ///
    /// The curve is evaluated at `0` and `width` directly, so a curve that
    /// extrapolates beyond its last knot is drawn as such.
    pub fn rebuild<I: Interpolant + ?Sized>(
        &mut self,
        curve: &I,
        width: f64,
        height: f64,
        curve_points: usize,
    ) {
        self.points.clear();

        let top_right = (width, curve.evaluate(width));
        self.points.push(top_right);
        self.points.push((width, height));
        self.points.push((0.0, height));
        self.points.push((0.0, curve.evaluate(0.0)));

        let step = (width / curve_points as f64).floor();
        self.points.extend((0..curve_points).map(|i| {
            let x = i as f64 * step;
            (x, curve.evaluate(x))
        }));

        self.points.push(top_right);
    }

    /// All points of the closed shape.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// The points tracing the curve, from the top left corner to the top right.
    pub fn top_edge(&self) -> &[(f64, f64)] {
        self.points.get(Self::LEADING_CORNERS - 1..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NaturalSpline;

    struct Ramp;

    impl Interpolant for Ramp {
        fn evaluate(&self, x: f64) -> f64 {
            x / 2.0
        }
    }

    #[test]
    fn test_empty_before_rebuild() {
        let outline = Outline::new();
        assert!(outline.is_empty());
        assert!(outline.top_edge().is_empty());
    }

    #[test]
    fn test_point_order() {
        let mut outline = Outline::with_capacity(5);
        outline.rebuild(&Ramp, 100.0, 80.0, 5);

        assert_eq!(
            outline.points(),
            &[
                (100.0, 50.0),
                (100.0, 80.0),
                (0.0, 80.0),
                (0.0, 0.0),
                (0.0, 0.0),
                (20.0, 10.0),
                (40.0, 20.0),
                (60.0, 30.0),
                (80.0, 40.0),
                (100.0, 50.0),
            ]
        );
    }

    #[test]
    fn test_step_is_floored() {
        let mut outline = Outline::new();
        outline.rebuild(&Ramp, 250.0, 10.0, 100);

        // floor(250 / 100) = 2, so samples stop at x = 198
        let edge = outline.top_edge();
        assert_eq!(edge[1].0, 0.0);
        assert_eq!(edge[2].0, 2.0);
        assert_eq!(edge[edge.len() - 2].0, 198.0);
        assert_eq!(edge[edge.len() - 1], (250.0, 125.0));
    }

    #[test]
    fn test_rebuild_reuses_buffer() {
        let mut outline = Outline::new();
        outline.rebuild(&1.0_f64, 100.0, 10.0, 100);
        let len = outline.len();
        outline.rebuild(&2.0_f64, 100.0, 10.0, 100);
        assert_eq!(outline.len(), len);
        assert_eq!(len, 105);
        assert!(outline.top_edge().iter().all(|&(_, y)| y == 2.0));
    }

    #[test]
    fn test_follows_spline() {
        let mut spline = NaturalSpline::new(3);
        spline.build(&[0.0, 5.0, 10.0], &[0.0, 10.0, 0.0]);

        let mut outline = Outline::new();
        outline.rebuild(&spline, 10.0, 12.0, 10);
        for &(x, y) in outline.top_edge() {
            assert_eq!(y, spline.evaluate(x));
        }
        assert_eq!(outline.points()[0], (10.0, 0.0));
    }
}
