//! Persistent driver settings (JSON file in the user config directory).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use taper_core::{QuantizePolicy, TaperConfig};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct AppSettings {
    pub input_path: String,
    pub output_path: String,
    pub show_plot: bool,
    pub plot_path: String,
    /// `"round"` or `"truncate"`; see [`QuantizePolicy`] for accepted aliases.
    pub quantize: QuantizePolicy,
}

impl Default for AppSettings {
    fn default() -> Self {
        let config = TaperConfig::default();
        Self {
            input_path: config.input_path.display().to_string(),
            output_path: config.output_path.display().to_string(),
            show_plot: config.show_plot,
            plot_path: config.plot_path.display().to_string(),
            quantize: config.quantize,
        }
    }
}

impl AppSettings {
    pub fn normalize(&mut self) {
        let defaults = AppSettings::default();
        self.input_path = normalize_path(&self.input_path, &defaults.input_path);
        self.output_path = normalize_path(&self.output_path, &defaults.output_path);
        self.plot_path = normalize_path(&self.plot_path, &defaults.plot_path);
    }

    pub fn to_config(&self) -> TaperConfig {
        TaperConfig {
            input_path: PathBuf::from(&self.input_path),
            output_path: PathBuf::from(&self.output_path),
            show_plot: self.show_plot,
            plot_path: PathBuf::from(&self.plot_path),
            quantize: self.quantize,
        }
    }
}

fn normalize_path(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        fallback.into()
    } else {
        trimmed.into()
    }
}

/// Load settings from `path`. A missing or malformed file yields defaults;
/// an unknown `quantize` name counts as malformed.
pub fn load_settings(path: &Path) -> AppSettings {
    let mut settings = match fs::read_to_string(path) {
        Ok(raw) => serde_json::from_str::<AppSettings>(&raw).unwrap_or_else(|e| {
            warn!(path = ?path, "ignoring malformed settings file: {e}");
            AppSettings::default()
        }),
        Err(_) => AppSettings::default(),
    };
    settings.normalize();
    settings
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(settings).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

pub fn default_settings_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taper")
            .join("settings.json")
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                std::env::var_os("HOME")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
                    .join(".config")
            })
            .join("taper")
            .join("settings.json")
    }
}
