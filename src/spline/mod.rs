//! Natural cubic spline fitting and evaluation.
//!
//! This module contains the curve engine behind the waveform: a fixed-size
//! natural cubic spline that is rebuilt in place from a set of control
//! points every frame and sampled by the renderer in between rebuilds.

mod error;
mod natural;
mod segment;

pub use error::SplineError;
pub use natural::NaturalSpline;
pub use segment::Segment;
