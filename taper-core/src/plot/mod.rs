//! Before/after waveform visualisation.
//!
//! The `Visualizer` trait keeps display out of the transform: the pipeline
//! hands it the original and windowed buffers once both exist, and a failure
//! here is reported but never aborts the run.

#[cfg(feature = "plot")]
pub mod svg;

#[cfg(feature = "plot")]
pub use svg::SvgPlotter;

use crate::{buffer::AudioBuffer, error::Result};

/// Renders the original signal next to its windowed counterpart.
pub trait Visualizer {
    fn render(&self, original: &AudioBuffer, windowed: &AudioBuffer) -> Result<()>;
}
