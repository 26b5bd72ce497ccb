//! Tuning parameters for the waveform animation.

use std::fmt;

/// Error type for rejecting an invalid [`MorphConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Fewer than 3 control points
    TooFewVertices(usize),
    /// The per-frame step is zero, negative or not finite
    InvalidThreshold(f64),
    /// The outline would have no curve samples
    NoCurvePoints,
    /// The lowest target level is outside `[0, 1]`
    InvalidFloorFraction(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooFewVertices(n) => {
                write!(f, "at least 3 vertices are required, got {}", n)
            }
            ConfigError::InvalidThreshold(t) => {
                write!(
                    f,
                    "variance threshold must be positive and finite, got {}",
                    t
                )
            }
            ConfigError::NoCurvePoints => write!(f, "curve point count must be at least 1"),
            ConfigError::InvalidFloorFraction(v) => {
                write!(f, "floor fraction must lie in [0, 1], got {}", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration for a [`MorphDriver`](crate::MorphDriver) and the outline it
/// feeds.
///
/// Defaults: 7 vertices, a step of 20 surface units per frame, 100 curve
/// samples, and targets drawn from the lower 70% of the surface.
///
/// # Examples
///
/// ```
/// use undulate::MorphConfig;
///
/// let config = MorphConfig::default()
///     .with_vertex_count(9)
///     .with_variance_threshold(12.5);
///
/// assert_eq!(config.vertex_count, 9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphConfig {
    /// Number of control points, fixed for the life of the driver
    pub vertex_count: usize,
    /// Distance a vertex moves per frame; twice this is the arrival radius
    pub variance_threshold: f64,
    /// Number of evenly spaced samples along the top edge of the outline
    pub curve_points: usize,
    /// Lowest target as a fraction of surface height
    pub floor_fraction: f64,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            vertex_count: 7,
            variance_threshold: 20.0,
            curve_points: 100,
            floor_fraction: 0.3,
        }
    }
}

impl MorphConfig {
    /// Sets the number of control points.
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Sets the per-frame step.
    pub fn with_variance_threshold(mut self, variance_threshold: f64) -> Self {
        self.variance_threshold = variance_threshold;
        self
    }

    /// Sets the number of curve samples in the outline.
    pub fn with_curve_points(mut self, curve_points: usize) -> Self {
        self.curve_points = curve_points;
        self
    }

    /// Sets the lowest target level as a fraction of surface height.
    pub fn with_floor_fraction(mut self, floor_fraction: f64) -> Self {
        self.floor_fraction = floor_fraction;
        self
    }

    /// Checks that the configuration describes a usable animation.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertex_count < 3 {
            return Err(ConfigError::TooFewVertices(self.vertex_count));
        }
        if !(self.variance_threshold.is_finite() && self.variance_threshold > 0.0) {
            return Err(ConfigError::InvalidThreshold(self.variance_threshold));
        }
        if self.curve_points == 0 {
            return Err(ConfigError::NoCurvePoints);
        }
        if !(0.0..=1.0).contains(&self.floor_fraction) {
            return Err(ConfigError::InvalidFloorFraction(self.floor_fraction));
        }
        Ok(())
    }
}
