//! Level statistics logged before and after tapering.

use crate::buffer::AudioBuffer;

/// Peak and RMS level of a buffer across all channels, relative to full scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalStats {
    /// Largest absolute sample, in `[0, 1]` for in-range signals.
    pub peak: f64,
    /// Root-mean-square over every sample of every channel.
    pub rms: f64,
}

impl SignalStats {
    pub fn measure(buffer: &AudioBuffer) -> Self {
        let samples = buffer.normalized();
        if samples.is_empty() {
            return Self {
                peak: 0.0,
                rms: 0.0,
            };
        }
        let peak = samples.iter().fold(0.0f64, |acc, s| acc.max(s.abs()));
        let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
        Self {
            peak,
            rms: (sum_sq / samples.len() as f64).sqrt(),
        }
    }

    /// RMS in dBFS. Silence reports `-inf`.
    pub fn rms_dbfs(&self) -> f64 {
        20.0 * self.rms.log10()
    }
}
