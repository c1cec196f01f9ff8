//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use pcmwave_config::Settings;
use pcmwave_core::WaveContainer;
use pcmwave_io::{Sink, Source};
use std::path::Path;

/// Load settings from an explicit path, else the user config file, else defaults.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    match path {
        Some(path) => Settings::load(path)
            .with_context(|| format!("unable to load settings '{}'", path.display())),
        None => Settings::discover().context("unable to load user settings"),
    }
}

/// Print a one-line format summary to stderr.
pub fn show_info(name: &str, wave: &WaveContainer) {
    eprintln!(
        "{}: {} Hz sampling, {}-bit, {} channel ({:.1} seconds)",
        name,
        wave.sample_rate(),
        wave.bits_per_sample(),
        wave.num_channels(),
        wave.duration_seconds()
    );
}

/// Report a finished conversion to stderr.
pub fn report_done(source: &Source, sink: &Sink) {
    eprintln!("'{source}' --> '{sink}' (OK)");
}
