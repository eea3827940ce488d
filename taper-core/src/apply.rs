//! Multiply an [`AudioBuffer`] by a per-frame window.
//!
//! ## Numeric rules
//!
//! Every product is computed in `f64`. Float buffers are narrowed back to
//! `f32` directly. Integer buffers go through a [`QuantizePolicy`] and are
//! then clamped to the format's range (24-bit clamps to ±2²³ even though it
//! is stored in `i32`), so a product that rounds one unit past the edge
//! saturates instead of wrapping.
//!
//! The input buffer is never modified; a new buffer of the same shape,
//! format and sample rate is returned.

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    buffer::{AudioBuffer, Sample, SampleFormat, Samples},
    error::{Result, TaperError},
    window::hann_window,
};

/// How a windowed `f64` value is turned back into an integer sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantizePolicy {
    /// Nearest integer, halfway cases away from zero (`f64::round`).
    #[default]
    #[serde(alias = "nearest")]
    Round,
    /// Toward zero (`f64::trunc`), the behaviour of a bare `as` cast.
    #[serde(alias = "trunc", alias = "toward_zero", alias = "cast")]
    Truncate,
}

impl QuantizePolicy {
    /// Quantize `value` and clamp it into `[min, max]`.
    pub fn quantize(self, value: f64, min: f64, max: f64) -> f64 {
        let q = match self {
            Self::Round => value.round(),
            Self::Truncate => value.trunc(),
        };
        q.clamp(min, max)
    }
}

fn scale<S: Sample>(
    samples: &Array2<S>,
    window: &[f64],
    narrow: impl Fn(f64) -> S,
) -> Array2<S> {
    let mut out = samples.clone();
    for (mut frame, &w) in out.axis_iter_mut(Axis(0)).zip(window) {
        frame.mapv_inplace(|s| narrow(s.to_f64() * w));
    }
    out
}

fn scale_int<S: Sample>(
    samples: &Array2<S>,
    window: &[f64],
    format: SampleFormat,
    policy: QuantizePolicy,
) -> Array2<S> {
    let (min, max) = format.range();
    scale(samples, window, |v| S::from_f64(policy.quantize(v, min, max)))
}

/// Multiply every channel of `buffer` by `window`, frame by frame.
///
/// # Errors
/// `TaperError::ShapeMismatch` when `window.len()` differs from the
/// buffer's frame count.
pub fn apply_window(
    buffer: &AudioBuffer,
    window: &[f64],
    policy: QuantizePolicy,
) -> Result<AudioBuffer> {
    let frames = buffer.frames();
    if window.len() != frames {
        return Err(TaperError::ShapeMismatch {
            frames,
            window: window.len(),
        });
    }

    let format = buffer.format();
    debug!(frames, channels = buffer.channels(), %format, ?policy, "applying window");

    let samples = match buffer.samples() {
        Samples::I8(a) => Samples::I8(scale_int(a, window, format, policy)),
        Samples::I16(a) => Samples::I16(scale_int(a, window, format, policy)),
        Samples::I24(a) => Samples::I24(scale_int(a, window, format, policy)),
        Samples::I32(a) => Samples::I32(scale_int(a, window, format, policy)),
        Samples::F32(a) => Samples::F32(scale(a, window, <f32 as Sample>::from_f64)),
    };

    Ok(AudioBuffer::new(buffer.sample_rate, samples))
}

/// Taper `buffer` with a Hann window spanning its full length.
pub fn taper(buffer: &AudioBuffer, policy: QuantizePolicy) -> Result<AudioBuffer> {
    let window = hann_window(buffer.frames());
    apply_window(buffer, &window, policy)
}
