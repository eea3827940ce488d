//! # taper-core
//!
//! Applies a single Hann window spanning the whole file to a WAV recording.
//!
//! ## Architecture
//!
//! ```text
//! wav::read_wav ─► AudioBuffer (frames × channels, native format)
//!                        │
//!            window::hann_window(frames)
//!                        │
//!            apply::apply_window (f64 product, QuantizePolicy, clamp)
//!                        │
//!                  wav::write_wav ─► plot::Visualizer (optional)
//! ```
//!
//! The window generator and the applier are pure functions; `pipeline` is the
//! only module that touches the filesystem.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod apply;
pub mod buffer;
pub mod error;
pub mod pipeline;
pub mod plot;
pub mod stats;
pub mod wav;
pub mod window;

// Convenience re-exports for downstream crates
pub use apply::{apply_window, taper, QuantizePolicy};
pub use buffer::{AudioBuffer, SampleFormat, Samples};
pub use error::TaperError;
pub use pipeline::{run, run_with, RunReport, TaperConfig};
pub use plot::Visualizer;
pub use stats::SignalStats;
pub use window::hann_window;

#[cfg(feature = "plot")]
pub use plot::SvgPlotter;
