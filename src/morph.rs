//! Frame-by-frame morphing of the control points.
//!
//! # Design Overview
//!
//! `MorphDriver` owns two [`VertexSet`]s with identical x coordinates:
//! `current`, which the spline is fitted through, and `target`, where each
//! vertex is heading. Every call to [`tick`](MorphDriver::tick) advances the
//! animation by one frame:
//!
//! - On the first tick the vertices are laid out across the surface,
//!   `current` is set to a flat baseline at the surface height and every
//!   target is drawn at random.
//! - On later ticks each vertex is handled independently. A vertex within
//!   `2 · variance_threshold` of its target gets a fresh random target and
//!   does not move this frame. Any other vertex moves exactly
//!   `variance_threshold` towards its target.
//! - The spline is rebuilt once, after all vertices are updated.
//!
//! Random targets are uniform in `[floor_fraction · H, H]`, so the waveform
//! never reaches the top of the surface.
//!
//! The driver owns no timer or thread. It is advanced by whoever renders it,
//! once per redraw, and runs until that caller stops ticking.

use crate::{ConfigError, MorphConfig, NaturalSpline, VertexSet};
use log::{debug, trace};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Lifecycle of a [`MorphDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphPhase {
    /// No surface size seen yet; the next tick lays out the vertices
    Uninitialized,
    /// Vertices are moving towards their targets
    Morphing,
}

/// Drives a fixed set of control points towards randomly chosen heights.
///
/// # Examples
///
/// ```
/// use undulate::{MorphConfig, MorphDriver};
/// use rand::SeedableRng;
///
/// let rng = rand::rngs::StdRng::seed_from_u64(7);
/// let mut driver = MorphDriver::with_rng(MorphConfig::default(), rng).unwrap();
///
/// // First frame: flat baseline along the bottom edge
/// let spline = driver.tick(120.0, 100.0);
/// assert_eq!(spline.evaluate(60.0), 100.0);
///
/// // Later frames step vertices towards their targets
/// driver.tick(120.0, 100.0);
/// assert!(driver.current().ys().iter().all(|&y| y <= 100.0));
/// ```
pub struct MorphDriver<R: Rng = ThreadRng> {
    config: MorphConfig,
    phase: MorphPhase,
    current: VertexSet,
    target: VertexSet,
    spline: NaturalSpline,
    rng: R,
}

impl MorphDriver<ThreadRng> {
    /// Creates a driver that draws targets from the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn new(config: MorphConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> MorphDriver<R> {
    /// Creates a driver with a custom RNG.
    ///
    /// Seeding the RNG makes the animation reproducible.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use undulate::{MorphConfig, MorphDriver};
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let driver = MorphDriver::with_rng(MorphConfig::default(), rng).unwrap();
    /// assert!(!driver.is_initialized());
    /// ```
    pub fn with_rng(config: MorphConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let n = config.vertex_count;
        Ok(Self {
            config,
            phase: MorphPhase::Uninitialized,
            current: VertexSet::new(n),
            target: VertexSet::new(n),
            spline: NaturalSpline::new(n),
            rng,
        })
    }

    /// Lays out the vertices for a `width × height` surface and starts over.
    ///
    /// `current` becomes a flat baseline at `height`, every target is drawn
    /// at random and the spline is rebuilt. Calling this again, for example
    /// after a resize, discards all morph progress.
    pub fn initialize(&mut self, width: f64, height: f64) {
        self.current.layout(width);
        self.current.fill_y(height);
        self.target.align_with(&self.current);
        for y in self.target.ys_mut() {
            *y = random_level(&mut self.rng, height, self.config.floor_fraction);
        }
        self.spline.build(self.current.xs(), self.current.ys());
        self.phase = MorphPhase::Morphing;
        debug!(
            "initialized {} vertices on a {}x{} surface",
            self.current.len(),
            width,
            height
        );
    }

    /// Advances the animation by one frame and returns the updated spline.
    ///
    /// The first tick only initializes (see [`initialize`](Self::initialize)).
    /// After that, `width` is ignored until the next re-initialization and
    /// `height` bounds the targets drawn this frame.
    pub fn tick(&mut self, width: f64, height: f64) -> &NaturalSpline {
        match self.phase {
            MorphPhase::Uninitialized => self.initialize(width, height),
            MorphPhase::Morphing => self.advance(height),
        }
        &self.spline
    }

    fn advance(&mut self, height: f64) {
        let threshold = self.config.variance_threshold;
        let floor = self.config.floor_fraction;
        let currents = self.current.ys_mut().iter_mut();
        let targets = self.target.ys_mut().iter_mut();

        for (i, (from, to)) in currents.zip(targets).enumerate() {
            let dy = *from - *to;
            if dy.abs() <= 2.0 * threshold {
                *to = random_level(&mut self.rng, height, floor);
                trace!(
                    "vertex {} arrived near {:.1}, next target {:.1}",
                    i, from, to
                );
            } else if dy > 0.0 {
                *from -= threshold;
            } else {
                *from += threshold;
            }
        }

        self.spline.build(self.current.xs(), self.current.ys());
    }

    /// Evaluates the current curve at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        self.spline.evaluate(x)
    }

    /// Overrides the target height of vertex `i`.
    ///
    /// The vertex heads for `y` from the next tick on, until it arrives and
    /// is retargeted at random.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn set_target(&mut self, i: usize, y: f64) {
        self.target.set_y(i, y);
    }

    /// Forgets the layout; the next tick initializes again.
    pub fn reset(&mut self) {
        self.phase = MorphPhase::Uninitialized;
        debug!("morph driver reset");
    }

    pub fn is_initialized(&self) -> bool {
        self.phase != MorphPhase::Uninitialized
    }

    pub fn phase(&self) -> MorphPhase {
        self.phase
    }

    /// The vertices the spline is fitted through.
    pub fn current(&self) -> &VertexSet {
        &self.current
    }

    /// Where each vertex is heading.
    pub fn target(&self) -> &VertexSet {
        &self.target
    }

    pub fn spline(&self) -> &NaturalSpline {
        &self.spline
    }

    pub fn config(&self) -> &MorphConfig {
        &self.config
    }
}

/// Draws a height uniformly from `[floor_fraction · height, height]`.
///
/// A zero or negative height collapses the range and returns `height`.
fn random_level<R: Rng>(rng: &mut R, height: f64, floor_fraction: f64) -> f64 {
    let low = floor_fraction * height;
    if low < height {
        rng.gen_range(low..=height)
    } else {
        height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WIDTH: f64 = 120.0;
    const HEIGHT: f64 = 100.0;

    fn seeded(seed: u64) -> MorphDriver<StdRng> {
        MorphDriver::with_rng(MorphConfig::default(), StdRng::seed_from_u64(seed)).unwrap()
    }

    fn assert_targets_in_range(driver: &MorphDriver<StdRng>, height: f64) {
        for &y in driver.target().ys() {
            assert!(
                y >= 0.3 * height && y <= height,
                "target {} out of range",
                y
            );
        }
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = MorphConfig::default().with_vertex_count(2);
        let result = MorphDriver::with_rng(config, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(ConfigError::TooFewVertices(2))));
    }

    #[test]
    fn test_thread_rng_constructor() {
        let mut driver = MorphDriver::new(MorphConfig::default()).unwrap();
        driver.tick(WIDTH, HEIGHT);
        driver.tick(WIDTH, HEIGHT);
        assert!(driver.is_initialized());
    }

    #[test_log::test]
    fn test_first_tick_initializes_flat_baseline() {
        let mut driver = seeded(1);
        assert_eq!(driver.phase(), MorphPhase::Uninitialized);

        let spline = driver.tick(WIDTH, HEIGHT);
        assert_eq!(spline.evaluate(0.0), HEIGHT);
        assert_eq!(spline.evaluate(55.5), HEIGHT);
        assert_eq!(spline.evaluate(WIDTH), HEIGHT);

        assert_eq!(driver.phase(), MorphPhase::Morphing);
        assert_eq!(driver.current().ys(), &[HEIGHT; 7]);
        assert_eq!(
            driver.current().xs(),
            &[0.0, 17.0, 34.0, 51.0, 68.0, 85.0, 120.0]
        );
        assert_eq!(driver.target().xs(), driver.current().xs());
        assert_targets_in_range(&driver, HEIGHT);
    }

    #[test]
    fn test_flat_baseline_steps_down_by_threshold() {
        let mut driver = seeded(2);
        driver.initialize(WIDTH, HEIGHT);
        for i in 0..7 {
            driver.set_target(i, 0.0);
        }

        driver.tick(WIDTH, HEIGHT);
        assert_eq!(driver.current().ys(), &[80.0; 7]);
        assert_eq!(driver.sample(60.0), 80.0);
    }

    #[test]
    fn test_step_bounded_convergence_downwards() {
        let mut driver = seeded(3);
        driver.initialize(WIDTH, HEIGHT);
        driver.set_target(2, 0.0);

        let mut last_gap = (driver.current().y(2) - driver.target().y(2)).abs();
        let mut steps = 0;
        while last_gap > 40.0 {
            driver.tick(WIDTH, HEIGHT);
            let gap = (driver.current().y(2) - driver.target().y(2)).abs();
            assert_eq!(last_gap - gap, 20.0);
            last_gap = gap;
            steps += 1;
        }
        assert_eq!(steps, 3);
        assert_eq!(driver.current().y(2), 40.0);

        // Within reach: a new target is drawn and the vertex holds still
        driver.tick(WIDTH, HEIGHT);
        assert_eq!(driver.current().y(2), 40.0);
        let next = driver.target().y(2);
        assert!((30.0..=100.0).contains(&next));
    }

    #[test]
    fn test_step_bounded_convergence_upwards() {
        let mut driver = seeded(4);
        driver.initialize(WIDTH, HEIGHT);
        driver.current.set_y(4, 30.0);
        driver.set_target(4, 100.0);

        driver.tick(WIDTH, HEIGHT);
        assert_eq!(driver.current().y(4), 50.0);
        driver.tick(WIDTH, HEIGHT);
        assert_eq!(driver.current().y(4), 70.0);
        assert_eq!(driver.target().y(4), 100.0);

        driver.tick(WIDTH, HEIGHT);
        assert_eq!(driver.current().y(4), 70.0);
        assert_targets_in_range(&driver, HEIGHT);
    }

    #[test]
    fn test_arrival_radius_is_twice_threshold() {
        let mut driver = seeded(5);
        driver.initialize(WIDTH, HEIGHT);
        driver.current.set_y(0, 60.0);
        driver.set_target(0, 100.0);

        driver.tick(WIDTH, HEIGHT);
        assert_eq!(driver.current().y(0), 60.0);
        assert_ne!(driver.target().y(0), 100.0);
    }

    #[test]
    fn test_long_run_stays_in_band() {
        for seed in 0..8 {
            let mut driver = seeded(seed);
            for _ in 0..2000 {
                driver.tick(WIDTH, HEIGHT);
                assert_targets_in_range(&driver, HEIGHT);
                for &y in driver.current().ys() {
                    assert!((30.0..=HEIGHT).contains(&y), "seed {} current {}", seed, y);
                }
            }
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        for _ in 0..50 {
            a.tick(WIDTH, HEIGHT);
            b.tick(WIDTH, HEIGHT);
        }
        assert_eq!(a.current(), b.current());
        assert_eq!(a.target(), b.target());
        assert_eq!(a.sample(33.0), b.sample(33.0));
    }

    #[test]
    fn test_spline_follows_current_vertices() {
        let mut driver = seeded(6);
        for _ in 0..25 {
            driver.tick(WIDTH, HEIGHT);
        }
        for point in driver.current().points() {
            assert!((driver.sample(point.x) - point.y).abs() < 1e-9);
        }
    }

    #[test_log::test]
    fn test_reset_reinitializes() {
        let mut driver = seeded(7);
        for _ in 0..10 {
            driver.tick(WIDTH, HEIGHT);
        }
        driver.reset();
        assert!(!driver.is_initialized());

        driver.tick(240.0, 50.0);
        assert_eq!(driver.current().ys(), &[50.0; 7]);
        assert_eq!(driver.current().xs()[6], 240.0);
        assert_targets_in_range(&driver, 50.0);
    }

    #[test]
    fn test_zero_surface_is_not_fatal() {
        let mut driver = seeded(8);
        driver.initialize(0.0, 0.0);
        assert!(driver.target().ys().iter().all(|&y| y == 0.0));
        for _ in 0..5 {
            driver.tick(0.0, 0.0);
        }
        assert!(driver.current().ys().iter().all(|&y| y == 0.0));

        driver.initialize(WIDTH, HEIGHT);
        assert_eq!(driver.sample(60.0), HEIGHT);
    }

    #[test]
    fn test_custom_vertex_count() {
        let config = MorphConfig::default()
            .with_vertex_count(3)
            .with_variance_threshold(5.0);
        let mut driver = MorphDriver::with_rng(config, StdRng::seed_from_u64(9)).unwrap();
        driver.tick(30.0, 60.0);
        assert_eq!(driver.current().xs(), &[0.0, 10.0, 30.0]);
        assert_eq!(driver.spline().len(), 3);

        driver.set_target(1, 0.0);
        driver.tick(30.0, 60.0);
        assert_eq!(driver.current().y(1), 55.0);
    }

    #[test]
    fn test_random_level_bounds() {
        let mut rng = StdRng::seed_from_u64(10);
        for _ in 0..1000 {
            let y = random_level(&mut rng, 200.0, 0.3);
            assert!((60.0..=200.0).contains(&y));
        }
        assert_eq!(random_level(&mut rng, 0.0, 0.3), 0.0);
        assert_eq!(random_level(&mut rng, 80.0, 1.0), 80.0);
    }
}
