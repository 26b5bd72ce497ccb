//! Start/stop wrapper that draws the morphing waveform onto a surface.
//!
//! [`Waveform`] is the piece a host view embeds. Each redraw calls
//! [`Waveform::draw`], which advances the animation by one frame, fills the
//! resulting outline and asks the surface for another redraw. As long as the
//! host honors those requests the animation keeps itself going; calling
//! [`stop`](Waveform::stop) breaks the loop on the next redraw.

use crate::{ConfigError, MorphConfig, MorphDriver, Outline};
use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;

/// A drawing target for the waveform.
///
/// Implemented by the host; paint style and colour are the host's concern.
pub trait Surface {
    /// Current `(width, height)` in surface units.
    fn size(&self) -> (f64, f64);

    /// Fills the closed polygon through `points`.
    fn fill_polygon(&mut self, points: &[(f64, f64)]);

    /// Schedules another call to [`Waveform::draw`].
    fn request_redraw(&mut self);
}

/// An animated, filled waveform.
///
/// # Examples
///
/// ```
/// use undulate::{MorphConfig, Surface, Waveform};
/// use rand::SeedableRng;
///
/// struct Recorder {
///     fills: usize,
///     redraws: usize,
/// }
///
/// impl Surface for Recorder {
///     fn size(&self) -> (f64, f64) {
///         (320.0, 80.0)
///     }
///     fn fill_polygon(&mut self, _points: &[(f64, f64)]) {
///         self.fills += 1;
///     }
///     fn request_redraw(&mut self) {
///         self.redraws += 1;
///     }
/// }
///
/// let rng = rand::rngs::StdRng::seed_from_u64(1);
/// let mut wave = Waveform::with_rng(MorphConfig::default(), rng).unwrap();
/// let mut surface = Recorder { fills: 0, redraws: 0 };
///
/// wave.draw(&mut surface); // not running yet
/// assert_eq!(surface.fills, 0);
///
/// wave.start();
/// wave.draw(&mut surface);
/// wave.draw(&mut surface);
/// assert_eq!(surface.fills, 2);
/// assert_eq!(surface.redraws, 2);
/// ```
pub struct Waveform<R: Rng = ThreadRng> {
    driver: MorphDriver<R>,
    outline: Outline,
    running: bool,
}

impl Waveform<ThreadRng> {
    /// Creates a stopped waveform using the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn new(config: MorphConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Waveform<R> {
    /// Creates a stopped waveform with a custom RNG.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` is invalid.
    pub fn with_rng(config: MorphConfig, rng: R) -> Result<Self, ConfigError> {
        let driver = MorphDriver::with_rng(config, rng)?;
        Ok(Self {
            driver,
            outline: Outline::with_capacity(config.curve_points),
            running: false,
        })
    }

    /// Starts animating from the next draw.
    pub fn start(&mut self) {
        if !self.running {
            debug!("waveform started");
        }
        self.running = true;
    }

    /// Stops animating; the next draw paints nothing and requests nothing.
    ///
    /// Morph progress is kept, so a later [`start`](Self::start) resumes
    /// where it left off.
    pub fn stop(&mut self) {
        if self.running {
            debug!("waveform stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances one frame and paints it onto `surface`.
    ///
    /// Does nothing while stopped. The first draw after construction or
    /// [`reset`](Self::reset) shows the flat baseline; every later draw moves
    /// the vertices one step.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if !self.running {
            return;
        }
        let (width, height) = surface.size();
        let curve_points = self.driver.config().curve_points;
        let spline = self.driver.tick(width, height);
        self.outline.rebuild(spline, width, height, curve_points);
        surface.fill_polygon(self.outline.points());
        surface.request_redraw();
    }

    /// Re-lays out the vertices on the next draw, e.g. after a resize.
    pub fn reset(&mut self) {
        self.driver.reset();
    }

    /// The outline painted by the last draw.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn driver(&self) -> &MorphDriver<R> {
        &self.driver
    }
}
