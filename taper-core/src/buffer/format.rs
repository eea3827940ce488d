//! Sample formats a WAV file can carry, and the element types that hold them.

use crate::error::{Result, TaperError};

/// Fixed-width numeric representation of every sample in a buffer.
///
/// 24-bit PCM is held in `i32` storage but keeps its own variant so the
/// writer emits 24-bit again and the applier clamps to the 24-bit range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    I8,
    I16,
    I24,
    I32,
    F32,
}

impl SampleFormat {
    /// Map a WAV header's bit depth and encoding onto a supported format.
    ///
    /// # Errors
    /// `TaperError::UnsupportedFormat` for anything `hound` cannot decode
    /// losslessly into one of the variants above (e.g. 64-bit float).
    pub fn from_wav(bits_per_sample: u16, encoding: hound::SampleFormat) -> Result<Self> {
        match (encoding, bits_per_sample) {
            (hound::SampleFormat::Int, 8) => Ok(Self::I8),
            (hound::SampleFormat::Int, 16) => Ok(Self::I16),
            (hound::SampleFormat::Int, 24) => Ok(Self::I24),
            (hound::SampleFormat::Int, 32) => Ok(Self::I32),
            (hound::SampleFormat::Float, 32) => Ok(Self::F32),
            (encoding, bits_per_sample) => Err(TaperError::UnsupportedFormat {
                bits_per_sample,
                kind: match encoding {
                    hound::SampleFormat::Int => "integer",
                    hound::SampleFormat::Float => "float",
                },
            }),
        }
    }

    pub fn bits_per_sample(self) -> u16 {
        match self {
            Self::I8 => 8,
            Self::I16 => 16,
            Self::I24 => 24,
            Self::I32 | Self::F32 => 32,
        }
    }

    pub fn is_float(self) -> bool {
        self == Self::F32
    }

    pub fn wav_encoding(self) -> hound::SampleFormat {
        if self.is_float() {
            hound::SampleFormat::Float
        } else {
            hound::SampleFormat::Int
        }
    }

    /// Inclusive `(min, max)` of representable values, as `f64`.
    ///
    /// Float samples are nominally in `[-1.0, 1.0]` but are never clamped.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::I8 => (i8::MIN as f64, i8::MAX as f64),
            Self::I16 => (i16::MIN as f64, i16::MAX as f64),
            Self::I24 => (-8_388_608.0, 8_388_607.0),
            Self::I32 => (i32::MIN as f64, i32::MAX as f64),
            Self::F32 => (f64::NEG_INFINITY, f64::INFINITY),
        }
    }

    /// Magnitude that corresponds to 0 dBFS, used to normalise to `[-1, 1]`.
    pub fn full_scale(self) -> f64 {
        match self {
            Self::F32 => 1.0,
            _ => -self.range().0,
        }
    }
}

impl std::fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I24 => "i24",
            Self::I32 => "i32",
            Self::F32 => "f32",
        };
        f.write_str(name)
    }
}

/// Element types that can back a sample column.
pub trait Sample: Copy + PartialEq + std::fmt::Debug + 'static {
    fn to_f64(self) -> f64;

    /// Plain `as` conversion. Callers quantize and clamp first.
    fn from_f64(value: f64) -> Self;
}

impl Sample for i8 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as i8
    }
}

impl Sample for i16 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as i16
    }
}

impl Sample for i32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as i32
    }
}

impl Sample for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}
