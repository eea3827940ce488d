//! One-shot read → taper → write → (plot) run.
//!
//! ```text
//! read_wav(input) ─► hann_window(frames) ─► apply_window ─► write_wav(output)
//!                                                               │
//!                                              Visualizer::render (optional)
//! ```
//!
//! Every stage except plotting is fatal on failure. A plot failure is logged
//! and reported through [`RunReport::plotted`].

use std::path::PathBuf;

use tracing::{info, warn};

use crate::{
    apply::{apply_window, QuantizePolicy},
    buffer::SampleFormat,
    error::{Result, TaperError},
    plot::Visualizer,
    stats::SignalStats,
    wav::{read_wav, write_wav},
    window::hann_window,
};

/// Everything one run needs. No file paths are baked into the library.
#[derive(Debug, Clone, PartialEq)]
pub struct TaperConfig {
    /// WAV file to read.
    pub input_path: PathBuf,
    /// WAV file to create (overwritten if present).
    pub output_path: PathBuf,
    /// Render the before/after plot after writing.
    pub show_plot: bool,
    /// Where the plot is written when `show_plot` is set.
    pub plot_path: PathBuf,
    /// Rounding rule for integer sample formats.
    pub quantize: QuantizePolicy,
}

impl Default for TaperConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("../oli.wav"),
            output_path: PathBuf::from("output.wav"),
            show_plot: true,
            plot_path: PathBuf::from("output.svg"),
            quantize: QuantizePolicy::Round,
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub frames: usize,
    pub channels: usize,
    pub sample_rate: u32,
    pub format: SampleFormat,
    pub before: SignalStats,
    pub after: SignalStats,
    /// `true` only if a visualizer ran and succeeded.
    pub plotted: bool,
}

/// Run with the default visualizer for this build (`SvgPlotter` writing to
/// `config.plot_path` when the `plot` feature is enabled, none otherwise).
pub fn run(config: &TaperConfig) -> Result<RunReport> {
    #[cfg(feature = "plot")]
    {
        let plotter = crate::plot::SvgPlotter::new(&config.plot_path);
        run_with(config, Some(&plotter))
    }
    #[cfg(not(feature = "plot"))]
    {
        run_with(config, None)
    }
}

/// Run with an explicit visualizer (or none).
///
/// # Errors
/// - Any error from [`read_wav`] or [`write_wav`].
/// - `TaperError::DegenerateLength` when the input holds zero frames.
pub fn run_with(config: &TaperConfig, visualizer: Option<&dyn Visualizer>) -> Result<RunReport> {
    let original = read_wav(&config.input_path)?;
    let frames = original.frames();
    if frames == 0 {
        return Err(TaperError::DegenerateLength { frames });
    }

    let window = hann_window(frames);
    let windowed = apply_window(&original, &window, config.quantize)?;

    write_wav(&config.output_path, &windowed)?;

    let before = SignalStats::measure(&original);
    let after = SignalStats::measure(&windowed);
    info!(
        frames,
        duration_secs = original.duration_secs(),
        peak_before = before.peak,
        peak_after = after.peak,
        rms_dbfs_before = before.rms_dbfs(),
        rms_dbfs_after = after.rms_dbfs(),
        "hann taper applied"
    );

    let plotted = match (config.show_plot, visualizer) {
        (false, _) => false,
        (true, None) => {
            info!("plot requested but no visualizer is available in this build");
            false
        }
        (true, Some(v)) => match v.render(&original, &windowed) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "waveform plot failed");
                false
            }
        },
    };

    Ok(RunReport {
        frames,
        channels: original.channels(),
        sample_rate: original.sample_rate,
        format: original.format(),
        before,
        after,
        plotted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{AudioBuffer, Samples};
    use ndarray::Array2;
    use std::cell::Cell;

    struct CountingVisualizer {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Visualizer for CountingVisualizer {
        fn render(&self, original: &AudioBuffer, windowed: &AudioBuffer) -> Result<()> {
            assert_eq!(original.frames(), windowed.frames());
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(TaperError::Plot("no display".into()))
            } else {
                Ok(())
            }
        }
    }

    fn scratch_config(tag: &str, show_plot: bool) -> TaperConfig {
        let dir = std::env::temp_dir();
        let id = format!("{}-{tag}", std::process::id());
        TaperConfig {
            input_path: dir.join(format!("taper-pipeline-in-{id}.wav")),
            output_path: dir.join(format!("taper-pipeline-out-{id}.wav")),
            show_plot,
            plot_path: dir.join(format!("taper-pipeline-{id}.svg")),
            quantize: QuantizePolicy::Round,
        }
    }

    fn cleanup(config: &TaperConfig) {
        for p in [&config.input_path, &config.output_path, &config.plot_path] {
            let _ = std::fs::remove_file(p);
        }
    }

    fn write_input(config: &TaperConfig, frames: usize) {
        let buffer = AudioBuffer::new(8_000, Samples::I16(Array2::from_elem((frames, 1), 1000)));
        write_wav(&config.input_path, &buffer).unwrap();
    }

    #[test]
    fn visualizer_runs_only_when_requested() {
        for show_plot in [false, true] {
            let config = scratch_config(&format!("viz-{show_plot}"), show_plot);
            write_input(&config, 16);
            let viz = CountingVisualizer {
                calls: Cell::new(0),
                fail: false,
            };
            let report = run_with(&config, Some(&viz)).unwrap();
            cleanup(&config);

            assert_eq!(viz.calls.get(), usize::from(show_plot));
            assert_eq!(report.plotted, show_plot);
        }
    }

    #[test]
    fn plot_failure_is_not_fatal() {
        let config = scratch_config("viz-fail", true);
        write_input(&config, 16);
        let viz = CountingVisualizer {
            calls: Cell::new(0),
            fail: true,
        };
        let report = run_with(&config, Some(&viz));
        let output_written = config.output_path.exists();
        cleanup(&config);

        let report = report.unwrap();
        assert!(!report.plotted);
        assert!(output_written);
    }

    #[test]
    fn missing_visualizer_is_skipped() {
        let config = scratch_config("no-viz", true);
        write_input(&config, 4);
        let report = run_with(&config, None);
        cleanup(&config);
        assert!(!report.unwrap().plotted);
    }

    #[test]
    fn empty_input_is_degenerate() {
        let config = scratch_config("empty", false);
        write_input(&config, 0);
        let err = run_with(&config, None).unwrap_err();
        let output_written = config.output_path.exists();
        cleanup(&config);

        assert!(matches!(err, TaperError::DegenerateLength { frames: 0 }));
        assert!(!output_written);
    }

    #[test]
    fn report_describes_the_input() {
        let config = scratch_config("report", false);
        write_input(&config, 5);
        let report = run_with(&config, None);
        cleanup(&config);

        let report = report.unwrap();
        assert_eq!(report.frames, 5);
        assert_eq!(report.channels, 1);
        assert_eq!(report.sample_rate, 8_000);
        assert_eq!(report.format, SampleFormat::I16);
        assert!(report.after.rms < report.before.rms);
        assert_eq!(report.after.peak, report.before.peak);
    }
}
