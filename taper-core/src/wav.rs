//! WAV file reader and writer backed by `hound`.
//!
//! The reader keeps the file's native sample format (no conversion to f32) so
//! the writer can reproduce the exact bit depth and encoding.

use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::{
    buffer::{deinterleave, AudioBuffer, SampleFormat, Samples},
    error::{Result, TaperError},
};

fn read_samples<S, R>(reader: &mut hound::WavReader<R>) -> Result<Vec<S>>
where
    S: hound::Sample,
    R: Read,
{
    reader
        .samples::<S>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| TaperError::InvalidFormat(e.to_string()))
}

/// Decode a WAV file into an [`AudioBuffer`] in its native sample format.
///
/// # Errors
/// - `TaperError::InputNotFound` if `path` does not exist.
/// - `TaperError::InvalidFormat` if the file is not a decodable WAV container.
/// - `TaperError::UnsupportedFormat` for bit depths outside 8/16/24/32-bit
///   integer and 32-bit float.
pub fn read_wav(path: impl AsRef<Path>) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let mut reader = hound::WavReader::open(path).map_err(|e| match e {
        hound::Error::IoError(io) if io.kind() == std::io::ErrorKind::NotFound => {
            TaperError::InputNotFound {
                path: path.to_path_buf(),
            }
        }
        other => TaperError::InvalidFormat(other.to_string()),
    })?;

    let spec = reader.spec();
    let format = SampleFormat::from_wav(spec.bits_per_sample, spec.sample_format)?;
    let channels = usize::from(spec.channels);

    let samples = match format {
        SampleFormat::I8 => Samples::I8(deinterleave(channels, read_samples(&mut reader)?)?),
        SampleFormat::I16 => Samples::I16(deinterleave(channels, read_samples(&mut reader)?)?),
        SampleFormat::I24 => Samples::I24(deinterleave(channels, read_samples(&mut reader)?)?),
        SampleFormat::I32 => Samples::I32(deinterleave(channels, read_samples(&mut reader)?)?),
        SampleFormat::F32 => Samples::F32(deinterleave(channels, read_samples(&mut reader)?)?),
    };

    let buffer = AudioBuffer::new(spec.sample_rate, samples);
    info!(
        path = %path.display(),
        frames = buffer.frames(),
        channels,
        sample_rate = spec.sample_rate,
        %format,
        "read wav"
    );
    Ok(buffer)
}

/// Encode `buffer` as a WAV file with the buffer's own format, channel count
/// and sample rate.
///
/// # Errors
/// `TaperError::WriteFailure` if the file cannot be created, a sample does
/// not fit the declared bit depth, or the header cannot be finalised.
pub fn write_wav(path: impl AsRef<Path>, buffer: &AudioBuffer) -> Result<()> {
    let path = path.as_ref();
    let failure = |reason: String| TaperError::WriteFailure {
        path: path.to_path_buf(),
        reason,
    };

    let format = buffer.format();
    let channels = u16::try_from(buffer.channels())
        .map_err(|_| failure(format!("{} channels exceeds WAV limit", buffer.channels())))?;
    let spec = hound::WavSpec {
        channels,
        sample_rate: buffer.sample_rate,
        bits_per_sample: format.bits_per_sample(),
        sample_format: format.wav_encoding(),
    };

    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| failure(e.to_string()))?;

    // `iter()` walks rows first, which is the interleaved frame order.
    let written = match buffer.samples() {
        Samples::I8(a) => a.iter().try_for_each(|&s| writer.write_sample(s)),
        Samples::I16(a) => a.iter().try_for_each(|&s| writer.write_sample(s)),
        Samples::I24(a) | Samples::I32(a) => a.iter().try_for_each(|&s| writer.write_sample(s)),
        Samples::F32(a) => a.iter().try_for_each(|&s| writer.write_sample(s)),
    };
    // The writer is consumed (or dropped) before the partial file goes.
    if let Err(e) = written.and_then(|()| writer.finalize()) {
        let _ = std::fs::remove_file(path);
        return Err(failure(e.to_string()));
    }

    info!(
        path = %path.display(),
        frames = buffer.frames(),
        channels,
        sample_rate = buffer.sample_rate,
        %format,
        "wrote wav"
    );
    Ok(())
}
