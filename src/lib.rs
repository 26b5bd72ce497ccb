//! Undulate - An organically morphing waveform for Rust
//!
//! This library animates a filled waveform whose top edge is a natural cubic
//! spline through a handful of control points. Each frame the control points
//! step towards randomly chosen heights, and the spline is refitted.

pub mod config;
pub mod interpolant;
pub mod morph;
pub mod outline;
pub mod spline;
pub mod vertex;
pub mod waveform;

// Re-export commonly used types at the crate root
pub use config::{ConfigError, MorphConfig};
pub use interpolant::Interpolant;
pub use morph::{MorphDriver, MorphPhase};
pub use outline::Outline;
pub use spline::{NaturalSpline, Segment, SplineError};
pub use vertex::{ControlPoint, VertexSet};
pub use waveform::{Surface, Waveform};
