//! Control points and fixed-size vertex sets.

/// A single control point of the waveform.
///
/// `x` is fixed by the layout; only `y` moves from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered, fixed-length set of control points.
///
/// Positions and heights are kept in two parallel buffers so the spline can be
/// rebuilt straight from [`xs`](Self::xs) and [`ys`](Self::ys) without copying.
/// The length never changes after construction.
///
/// # Examples
///
/// ```
/// use undulate::VertexSet;
///
/// let mut set = VertexSet::new(7);
/// set.layout(120.0);
/// assert_eq!(set.xs(), &[0.0, 17.0, 34.0, 51.0, 68.0, 85.0, 120.0]);
///
/// set.fill_y(100.0);
/// set.set_y(3, 40.0);
/// assert_eq!(set.y(3), 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VertexSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl VertexSet {
    /// Creates a set of `n` points, all at the origin.
    pub fn new(n: usize) -> Self {
        Self {
            xs: vec![0.0; n],
            ys: vec![0.0; n],
        }
    }

    /// Spreads the x coordinates across `[0, width]`.
    ///
    /// Points are spaced by `floor(width / n)` and the last point is pinned to
    /// `width` exactly, so the final gap absorbs the rounding remainder.
    /// A width smaller than `n` collapses the interior spacing to zero; callers
    /// are expected to lay out only once the surface has a real size.
    pub fn layout(&mut self, width: f64) {
        let n = self.xs.len();
        let step = (width / n as f64).floor();
        for (i, x) in self.xs.iter_mut().enumerate() {
            *x = if i + 1 == n { width } else { i as f64 * step };
        }
    }

    /// Copies the x coordinates of `other`, which must have the same length.
    pub fn align_with(&mut self, other: &VertexSet) {
        self.xs.copy_from_slice(&other.xs);
    }

    /// Sets every y to `y`.
    pub fn fill_y(&mut self, y: f64) {
        self.ys.fill(y);
    }

    /// Sets the y of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn set_y(&mut self, i: usize, y: f64) {
        self.ys[i] = y;
    }

    /// Returns the y of point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn y(&self, i: usize) -> f64 {
        self.ys[i]
    }

    /// Returns point `i`.
    pub fn point(&self, i: usize) -> ControlPoint {
        ControlPoint {
            x: self.xs[i],
            y: self.ys[i],
        }
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub(crate) fn ys_mut(&mut self) -> &mut [f64] {
        &mut self.ys
    }

    /// Iterates over the points in order.
    pub fn points(&self) -> impl Iterator<Item = ControlPoint> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| ControlPoint { x, y })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}
