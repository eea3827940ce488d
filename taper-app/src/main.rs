//! taper — apply a full-length Hann window to one WAV file.
//!
//! Paths and options come from the settings file (see `settings.rs`); there
//! are no command-line flags. A default settings file is written on first run
//! so the paths can be edited.

mod settings;

use anyhow::Context;
use settings::{default_settings_path, load_settings, save_settings};
use tracing::{info, warn};

fn run() -> anyhow::Result<()> {
    let settings_path = default_settings_path();
    let app_settings = load_settings(&settings_path);
    if !settings_path.exists() {
        if let Err(e) = save_settings(&settings_path, &app_settings) {
            warn!(settings_path = ?settings_path, "could not seed settings file: {e}");
        }
    }

    let config = app_settings.to_config();
    info!(
        settings_path = ?settings_path,
        input = ?config.input_path,
        output = ?config.output_path,
        show_plot = config.show_plot,
        quantize = ?config.quantize,
        "settings loaded"
    );

    let report = taper_core::run(&config).with_context(|| {
        format!(
            "tapering {} into {}",
            config.input_path.display(),
            config.output_path.display()
        )
    })?;

    info!(
        frames = report.frames,
        channels = report.channels,
        sample_rate = report.sample_rate,
        format = %report.format,
        plotted = report.plotted,
        "done"
    );
    if report.plotted {
        info!(plot = ?config.plot_path, "waveform plot written");
    }
    Ok(())
}

fn main() {
    // ── Tracing ───────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("taper=info,taper_core=info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("taper failed: {e:#}");
        std::process::exit(1);
    }
}
