//! In-memory audio buffer: `frames × channels` samples plus a sample rate.
//!
//! Rows are frames, columns are channels, so a row-major `Array2` is exactly
//! the interleaved layout WAV files use. A mono file is an `N × 1` buffer.

pub mod format;

use ndarray::Array2;

pub use format::{Sample, SampleFormat};

use crate::error::{Result, TaperError};

/// Sample storage, one variant per [`SampleFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    I8(Array2<i8>),
    I16(Array2<i16>),
    /// 24-bit PCM in `i32` storage.
    I24(Array2<i32>),
    I32(Array2<i32>),
    F32(Array2<f32>),
}

impl Samples {
    pub fn format(&self) -> SampleFormat {
        match self {
            Self::I8(_) => SampleFormat::I8,
            Self::I16(_) => SampleFormat::I16,
            Self::I24(_) => SampleFormat::I24,
            Self::I32(_) => SampleFormat::I32,
            Self::F32(_) => SampleFormat::F32,
        }
    }

    /// `(frames, channels)`.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            Self::I8(a) => a.dim(),
            Self::I16(a) => a.dim(),
            Self::I24(a) | Self::I32(a) => a.dim(),
            Self::F32(a) => a.dim(),
        }
    }

    /// Samples widened to `f64`, in the format's native scale.
    pub fn to_f64(&self) -> Array2<f64> {
        match self {
            Self::I8(a) => a.mapv(Sample::to_f64),
            Self::I16(a) => a.mapv(Sample::to_f64),
            Self::I24(a) | Self::I32(a) => a.mapv(Sample::to_f64),
            Self::F32(a) => a.mapv(Sample::to_f64),
        }
    }
}

/// Reshape interleaved samples into `frames × channels`.
///
/// # Errors
/// `TaperError::InvalidFormat` if `channels` is zero or the sample count is
/// not a whole number of frames.
pub fn deinterleave<S: Sample>(channels: usize, interleaved: Vec<S>) -> Result<Array2<S>> {
    if channels == 0 {
        return Err(TaperError::InvalidFormat("zero channels".into()));
    }
    if interleaved.len() % channels != 0 {
        return Err(TaperError::InvalidFormat(format!(
            "{} samples is not a whole number of {channels}-channel frames",
            interleaved.len()
        )));
    }
    let frames = interleaved.len() / channels;
    Array2::from_shape_vec((frames, channels), interleaved)
        .map_err(|e| TaperError::InvalidFormat(e.to_string()))
}

/// A decoded audio file held entirely in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample rate in Hz. Carried through the transform untouched.
    pub sample_rate: u32,
    samples: Samples,
}

impl AudioBuffer {
    pub fn new(sample_rate: u32, samples: Samples) -> Self {
        Self {
            sample_rate,
            samples,
        }
    }

    pub fn samples(&self) -> &Samples {
        &self.samples
    }

    pub fn format(&self) -> SampleFormat {
        self.samples.format()
    }

    pub fn frames(&self) -> usize {
        self.samples.shape().0
    }

    pub fn channels(&self) -> usize {
        self.samples.shape().1
    }

    pub fn is_empty(&self) -> bool {
        self.frames() == 0
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / self.sample_rate as f64
    }

    /// Samples scaled so full scale of the format maps to `±1.0`.
    pub fn normalized(&self) -> Array2<f64> {
        let scale = self.format().full_scale();
        self.samples.to_f64().mapv(|v| v / scale)
    }
}
