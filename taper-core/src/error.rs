use thiserror::Error;

/// All errors produced by taper-core.
#[derive(Debug, Error)]
pub enum TaperError {
    #[error("input file not found: {path}")]
    InputNotFound { path: std::path::PathBuf },

    #[error("invalid audio file: {0}")]
    InvalidFormat(String),

    #[error("unsupported sample format: {bits_per_sample}-bit {kind}")]
    UnsupportedFormat {
        bits_per_sample: u16,
        kind: &'static str,
    },

    #[error("cannot taper a signal of {frames} frames")]
    DegenerateLength { frames: usize },

    #[error("window length {window} does not match frame count {frames}")]
    ShapeMismatch { frames: usize, window: usize },

    #[error("failed to write {path}: {reason}")]
    WriteFailure {
        path: std::path::PathBuf,
        reason: String,
    },

    #[error("plot error: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, TaperError>;
