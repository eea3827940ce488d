//! SVG rendering with `plotters`.
//!
//! Two stacked panels, one line per channel, samples normalised to full
//! scale. Long files are reduced to a min/max envelope per bucket so the SVG
//! stays a manageable size without hiding peaks.

use std::path::PathBuf;

use plotters::prelude::*;
use tracing::info;

use super::Visualizer;
use crate::{
    buffer::AudioBuffer,
    error::{Result, TaperError},
};

/// Upper bound on plotted points per channel.
const MAX_POINTS: usize = 4_000;

const CHANNEL_COLORS: [RGBColor; 4] = [BLUE, RED, GREEN, MAGENTA];

fn plot_err(e: impl std::fmt::Display) -> TaperError {
    TaperError::Plot(e.to_string())
}

/// Reduce `column` to at most `max_points` `(frame, value)` pairs.
///
/// Each bucket contributes its minimum and maximum in frame order, so the
/// drawn line still reaches every peak of the full-resolution signal.
pub(crate) fn envelope(column: &[f64], max_points: usize) -> Vec<(usize, f64)> {
    if column.len() <= max_points {
        return column.iter().copied().enumerate().collect();
    }

    let bucket = column.len().div_ceil((max_points / 2).max(1));
    let mut points = Vec::with_capacity(max_points);
    for (b, chunk) in column.chunks(bucket).enumerate() {
        let start = b * bucket;
        let (mut lo, mut hi) = ((0, f64::INFINITY), (0, f64::NEG_INFINITY));
        for (i, &v) in chunk.iter().enumerate() {
            if v < lo.1 {
                lo = (start + i, v);
            }
            if v > hi.1 {
                hi = (start + i, v);
            }
        }
        if lo.0 <= hi.0 {
            points.extend([lo, hi]);
        } else {
            points.extend([hi, lo]);
        }
    }
    points
}

/// Writes a two-panel SVG ("Original Signal" above, windowed below).
#[derive(Debug, Clone)]
pub struct SvgPlotter {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgPlotter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: (1200, 600),
        }
    }
}

impl Visualizer for SvgPlotter {
    fn render(&self, original: &AudioBuffer, windowed: &AudioBuffer) -> Result<()> {
        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;
        let panels = root.split_evenly((2, 1));

        let signals = [
            ("Original Signal", original),
            ("Signal After Applying Hann Window", windowed),
        ];
        for (area, (title, buffer)) in panels.iter().zip(signals) {
            let frames = buffer.frames().max(1);
            let mut chart = ChartBuilder::on(area)
                .caption(title, ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(40)
                .build_cartesian_2d(0..frames, -1.0f64..1.0f64)
                .map_err(plot_err)?;
            chart.configure_mesh().draw().map_err(plot_err)?;

            let samples = buffer.normalized();
            for (c, column) in samples.columns().into_iter().enumerate() {
                let column: Vec<f64> = column.to_vec();
                let color = CHANNEL_COLORS[c % CHANNEL_COLORS.len()];
                chart
                    .draw_series(LineSeries::new(envelope(&column, MAX_POINTS), &color))
                    .map_err(plot_err)?;
            }
        }

        root.present().map_err(plot_err)?;
        info!(path = %self.path.display(), "wrote waveform plot");
        Ok(())
    }
}
