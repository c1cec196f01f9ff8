//! Build a WAVE file from text samples.

use super::common::{report_done, show_info};
use anyhow::Context;
use clap::Args;
use pcmwave_config::Settings;
use pcmwave_io::{read_text_from, resolve, write_wav_to};
use std::path::PathBuf;

/// Convert text samples to a WAVE file.
///
/// Bit depth and channel count are inferred from the samples.
#[derive(Args)]
pub struct Txt2WavArgs {
    /// Input text file (standard input when omitted)
    pub input: Option<PathBuf>,

    /// Output WAVE file (derived from INPUT, or standard output)
    pub output: Option<PathBuf>,

    /// Sample rate in Hz (default from settings, normally 44100)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rate: Option<u32>,
}

/// Run the txt2wav command.
pub fn run(args: Txt2WavArgs, settings: &Settings) -> anyhow::Result<()> {
    let (source, sink) = resolve(
        args.input.as_deref(),
        args.output.as_deref(),
        "wav",
        settings,
    )?;
    let rate = args.rate.unwrap_or(settings.text.sample_rate);

    let wave =
        read_text_from(&source, rate).with_context(|| format!("{source}: unable to read"))?;
    show_info(&sink.to_string(), &wave);

    write_wav_to(&sink, &wave).with_context(|| format!("{sink}: unable to write"))?;
    report_done(&source, &sink);
    Ok(())
}
